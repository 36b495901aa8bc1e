//! Windowing and scoring.
//!
//! - [`window`]: the sliding-window engine.
//! - [`score`]: duplication scores of a window and the scored-position
//!   iterator built on top of the engine.

pub mod score;
pub mod window;
