use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::{
    PosType,
    SeqNameType,
};
use crate::error::WindowError;
use crate::getter_fn;

/// A single aligned read or interval: sequence name, half-open
/// `[start, stop)` coordinates and strand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    chrom:  SeqNameType,
    start:  PosType,
    stop:   PosType,
    strand: Strand,
}

impl Record {
    /// Creates a new unstranded `Record`.
    ///
    /// # Panics
    ///
    /// Panics if `start > stop`. Use [`Record::try_new`] for untrusted input.
    pub fn new(
        chrom: impl Into<SeqNameType>,
        start: PosType,
        stop: PosType,
    ) -> Self {
        assert!(
            start <= stop,
            "Start position must be less than or equal to stop position"
        );
        Self {
            chrom: chrom.into(),
            start,
            stop,
            strand: Strand::Unknown,
        }
    }

    /// Creates a new `Record`, rejecting intervals with `start > stop`.
    pub fn try_new(
        chrom: impl Into<SeqNameType>,
        start: PosType,
        stop: PosType,
        strand: Strand,
    ) -> anyhow::Result<Self> {
        if start > stop {
            return Err(WindowError::InvalidInterval { start, stop }.into());
        }
        Ok(Self {
            chrom: chrom.into(),
            start,
            stop,
            strand,
        })
    }

    pub fn with_strand(
        mut self,
        strand: Strand,
    ) -> Self {
        self.strand = strand;
        self
    }

    getter_fn!(chrom, ref SeqNameType);
    getter_fn!(start, PosType);
    getter_fn!(stop, PosType);
    getter_fn!(strand, Strand);

    /// Length of the interval.
    pub fn length(&self) -> PosType {
        self.stop - self.start
    }
}

impl Display for Record {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{} ({})",
            self.chrom, self.start, self.stop, self.strand
        )
    }
}

impl TryFrom<bio::io::bed::Record> for Record {
    type Error = anyhow::Error;

    fn try_from(value: bio::io::bed::Record) -> Result<Self, Self::Error> {
        Record::try_new(
            value.chrom(),
            value.start(),
            value.end(),
            value.strand().map(Strand::from).unwrap_or_default(),
        )
    }
}
