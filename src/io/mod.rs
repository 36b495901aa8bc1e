//! Record input and track output.
//!
//! - [`RecordSource`]: the forward-only cursor the window engine pulls from,
//!   with adapters for plain iterators ([`IterSource`], [`TryIterSource`]).
//! - [`BedSource`]: BED file reader, gzip-aware with the `compression`
//!   feature.
//! - [`BedGraphWriter`]: four-column bedGraph track writer.

mod bed;
mod bedgraph;
mod source;

pub use bed::{
    open_input,
    BedSource,
};
pub use bedgraph::BedGraphWriter;
pub use source::{
    IterSource,
    RecordSource,
    TryIterSource,
};
