//! # dupwindow
//!
//! `dupwindow` computes a local duplication-density signal over a
//! coordinate-sorted stream of aligned reads or intervals. For every distinct
//! start coordinate it reports how many records share that coordinate
//! relative to the surrounding neighborhood, producing a per-position score
//! that can be written out as a bedGraph track.
//!
//! The heart of the crate is [`WindowEngine`], a single-pass sliding window
//! that pulls records from a [`RecordSource`] one at a time and, on every
//! advance, exposes the records within `windowsize / 2` of the current
//! center. Scores are computed from a window with [`dups_score`] or
//! [`dups_score_sum`].
//!
//! ## Structure
//!
//! * [`data_structs`]: [`Record`], [`Strand`], [`MultisetCounter`] and type
//!   aliases.
//! * [`io`]: the [`RecordSource`] trait, a BED reader ([`BedSource`]) and a
//!   bedGraph writer ([`BedGraphWriter`]).
//! * [`tools`]: the window engine and the scores.
//! * [`error`]: the [`WindowError`] variants carried by `anyhow` errors.
//! * [`utils`]: helper macros, logger setup and score formatting.
//!
//! ## Usage
//!
//! ### Scoring an in-memory stream
//!
//! ```
//! use dupwindow::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let records = vec![
//!         Record::new("chr1", 0, 36),
//!         Record::new("chr1", 0, 36),
//!         Record::new("chr1", 40, 76),
//!         Record::new("chr1", 41, 77),
//!     ];
//!     let mut engine = WindowConfig::new(100).try_finish(IterSource::new(records))?;
//!
//!     let window = engine.advance()?.expect("stream has records");
//!     assert_eq!(window.center, 0);
//!     assert_eq!(window.low.len(), 2);
//!     assert_eq!(window.high.len(), 2);
//!     assert_eq!(dups_score(window.low, window.high, window.center), 2.0);
//!     Ok(())
//! }
//! ```
//!
//! ### BED to bedGraph
//!
//! ```no_run
//! use dupwindow::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let source = BedSource::from_path("reads.sorted.bed.gz")?;
//!     let scored = WindowConfig::new(100)
//!         .try_finish(source)?
//!         .into_scored(ScoreStrategy::Mean);
//!
//!     let mut writer = BedGraphWriter::create("dups.bedgraph", Some("dups"))?;
//!     writer.write_all(scored)?;
//!     writer.finish()?;
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod error;
pub mod exports;
pub mod io;
pub mod prelude;
pub mod tools;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
