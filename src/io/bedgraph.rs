use std::fs::File;
use std::io::{
    BufWriter,
    Write,
};
use std::path::Path;

use anyhow::Context;
use log::{
    debug,
    info,
};

use crate::tools::score::ScoredPosition;
use crate::utils::format_score;

/// Writes scored positions as a four-column bedGraph track:
/// `chrom`, `center`, `center + 1`, `score`, tab separated.
pub struct BedGraphWriter<W: Write> {
    sink:    W,
    written: u64,
}

impl<W: Write> BedGraphWriter<W> {
    /// Creates a writer without a track header line.
    pub fn new(sink: W) -> Self {
        Self { sink, written: 0 }
    }

    /// Creates a writer and emits `track type=bedGraph name=<name>` first.
    pub fn with_track_name(
        mut sink: W,
        name: &str,
    ) -> anyhow::Result<Self> {
        writeln!(sink, "track type=bedGraph name={name}")
            .context("Failed to write bedGraph header")?;
        Ok(Self::new(sink))
    }

    pub fn write_position(
        &mut self,
        position: &ScoredPosition,
    ) -> anyhow::Result<()> {
        writeln!(
            self.sink,
            "{}\t{}\t{}\t{}",
            position.chrom,
            position.center,
            position.center + 1,
            format_score(position.score)
        )?;
        self.written += 1;
        Ok(())
    }

    /// Writes every position of `positions`, stopping at the first error.
    pub fn write_all<I>(
        &mut self,
        positions: I,
    ) -> anyhow::Result<u64>
    where
        I: IntoIterator<Item = anyhow::Result<ScoredPosition>>, {
        let before = self.written;
        for position in positions {
            self.write_position(&position?)?;
        }
        Ok(self.written - before)
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flushes and returns the underlying sink.
    pub fn finish(mut self) -> anyhow::Result<W> {
        self.sink.flush()?;
        debug!("bedGraph writer finished after {} rows", self.written);
        Ok(self.sink)
    }
}

impl BedGraphWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(
        path: P,
        track_name: Option<&str>,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        info!("Writing bedGraph to {}", path.display());
        let sink = BufWriter::new(file);
        match track_name {
            Some(name) => Self::with_track_name(sink, name),
            None => Ok(Self::new(sink)),
        }
    }
}
