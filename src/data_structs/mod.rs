//! Core data structures of the `dupwindow` crate.
//!
//! - [`Record`]: an aligned read or interval with sequence name, start, stop
//!   and [`Strand`].
//! - [`MultisetCounter`]: a bag of keys with occurrence counts, used to tally
//!   start coordinates while scoring a window.
//! - [`typedef`]: type aliases for positions, edges, counts and scores.

mod counter;
mod enums;
mod record;
pub mod typedef;

#[cfg(test)]
mod tests;

pub use counter::MultisetCounter;
pub use enums::Strand;
pub use record::Record;
