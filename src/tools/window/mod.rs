//! Sliding window over coordinate-sorted records.
//!
//! [`WindowConfig`] holds the settings and builds a [`WindowEngine`] from a
//! [`RecordSource`](crate::io::RecordSource). Each
//! [`advance`](WindowEngine::advance) yields a [`WindowView`] centered on the
//! next distinct start coordinate.

mod config;
mod engine;


pub use config::WindowConfig;
pub use engine::{
    WindowEngine,
    WindowView,
};
