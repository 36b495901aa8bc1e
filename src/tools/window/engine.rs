use std::collections::VecDeque;

use hashbrown::HashSet;
use itertools::Itertools;
use log::{
    debug,
    trace,
};

use crate::data_structs::typedef::{
    EdgeType,
    PosType,
    SeqNameType,
};
use crate::data_structs::Record;
use crate::error::WindowError;
use crate::io::RecordSource;
use crate::tools::score::{
    ScoreStrategy,
    ScoredWindows,
};
use crate::tools::window::WindowConfig;

/// Borrowed snapshot of the window after an [`WindowEngine::advance`].
///
/// `low` holds the records at or below the center that still fit the window,
/// duplicates of the centered record included; `high` holds the records
/// strictly above the center and strictly below the right edge. Both are in
/// input order.
#[derive(Debug, Clone, Copy)]
pub struct WindowView<'a> {
    pub chrom:      &'a SeqNameType,
    pub center:     PosType,
    pub left_edge:  EdgeType,
    pub right_edge: EdgeType,
    pub windowsize: PosType,
    pub low:        &'a VecDeque<Record>,
    pub high:       &'a VecDeque<Record>,
}

impl<'a> WindowView<'a> {
    /// All buffered records, low side first.
    pub fn records(&self) -> impl Iterator<Item = &'a Record> + 'a {
        let (low, high) = (self.low, self.high);
        low.iter().chain(high.iter())
    }

    /// Number of records sharing the center coordinate.
    pub fn center_count(&self) -> usize {
        self.low
            .iter()
            .filter(|r| r.start() == self.center)
            .count()
    }

    pub fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sliding window over a coordinate-sorted stream of records.
///
/// The window is centered on one start coordinate at a time. Every call to
/// [`advance`](Self::advance) moves the center to the next distinct start
/// coordinate of the stream and returns the records whose starts fall within
/// `windowsize / 2` of it on the same chromosome.
///
/// Records are kept in two queues. The low queue holds the records at or
/// below the center, the high queue those above it. One more record, the
/// look-ahead, has been pulled from the source but does not fit the current
/// window yet. Each record is classified once and moves through the queues
/// front to back, so the whole stream is processed in a single pass with
/// O(1) amortized work per record.
pub struct WindowEngine<S: RecordSource> {
    source: S,
    config: WindowConfig,

    chrom:      SeqNameType,
    center:     PosType,
    left_edge:  EdgeType,
    right_edge: EdgeType,

    low:       VecDeque<Record>,
    high:      VecDeque<Record>,
    /// `None` once the source is exhausted.
    lookahead: Option<Record>,

    /// True until the first advance.
    at_start: bool,
    finished: bool,

    last_pulled: (SeqNameType, PosType),
    /// Chromosomes the stream has already moved past.
    left_chroms: HashSet<SeqNameType>,

    records_read:     u64,
    windows_emitted:  u64,
    chromosomes_seen: u64,
}

impl<S: RecordSource> WindowEngine<S> {
    /// Creates a new engine, consuming the first record of `source` as the
    /// initial center.
    ///
    /// Fails with [`WindowError::EmptySource`] if the source has no records
    /// and with [`WindowError::InvalidWindowSize`] for a zero window.
    pub fn try_new(
        mut source: S,
        config: WindowConfig,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        let first = source
            .next_record()?
            .ok_or(WindowError::EmptySource)?;
        debug!(
            "Seeding window (size {}) at {}:{}",
            config.windowsize,
            first.chrom(),
            first.start()
        );

        let mut engine = Self {
            source,
            chrom: first.chrom().clone(),
            center: first.start(),
            left_edge: 0,
            right_edge: 0,
            last_pulled: (first.chrom().clone(), first.start()),
            low: VecDeque::from([first]),
            high: VecDeque::new(),
            lookahead: None,
            at_start: true,
            finished: false,
            left_chroms: HashSet::new(),
            records_read: 1,
            windows_emitted: 0,
            chromosomes_seen: 1,
            config,
        };
        engine.set_edges();
        Ok(engine)
    }

    /// Moves the window to the next center and returns its contents, or
    /// `None` once every window of the stream has been returned.
    ///
    /// The last window is always returned before `None`. After an error the
    /// engine is finished and keeps returning `None`.
    pub fn advance(&mut self) -> anyhow::Result<Option<WindowView<'_>>> {
        if self.finished {
            return Ok(None);
        }
        match self.step() {
            Ok(true) => {
                self.windows_emitted += 1;
                if self.config.debug {
                    self.trace_state();
                }
                Ok(Some(self.view()))
            },
            Ok(false) => {
                self.finished = true;
                debug!(
                    "Window stream finished: {} records, {} windows, {} chromosomes",
                    self.records_read, self.windows_emitted, self.chromosomes_seen
                );
                Ok(None)
            },
            Err(e) => {
                self.finished = true;
                Err(e)
            },
        }
    }

    /// Returns `false` when there is no further center.
    fn step(&mut self) -> anyhow::Result<bool> {
        if self.at_start {
            self.at_start = false;
            self.lookahead = self.pull()?;
        }
        else if !self.shift() {
            return Ok(false);
        }
        self.accumulate()?;
        Ok(true)
    }

    /// Pulls look-ahead records into the queues until one falls outside the
    /// window, belongs to another chromosome, or the source runs dry.
    fn accumulate(&mut self) -> anyhow::Result<()> {
        while let Some(next) = self.lookahead.take() {
            if next.chrom() != &self.chrom {
                self.lookahead = Some(next);
                break;
            }
            if next.start() == self.center {
                self.low.push_back(next);
            }
            else if EdgeType::from(next.start()) < self.right_edge {
                self.high.push_back(next);
            }
            else {
                self.lookahead = Some(next);
                break;
            }
            self.lookahead = self.pull()?;
        }
        Ok(())
    }

    /// Re-centers the window on the next start coordinate: the front of the
    /// high queue, or the look-ahead when the high queue is empty.
    ///
    /// Stale low records are evicted before duplicates of the new center are
    /// promoted from the high queue, otherwise records of the previous
    /// chromosome could end up behind the new center's duplicates.
    fn shift(&mut self) -> bool {
        let (chrom, center) = match self.high.front().or(self.lookahead.as_ref()) {
            Some(next) => (next.chrom().clone(), next.start()),
            None => return false,
        };
        if chrom != self.chrom {
            debug!("Window moves from {} to {}", self.chrom, chrom);
        }
        self.chrom = chrom;
        self.center = center;
        self.set_edges();

        while let Some(front) = self.low.front() {
            if EdgeType::from(front.start()) >= self.left_edge && front.chrom() == &self.chrom {
                break;
            }
            if let Some(evicted) = self.low.pop_front() {
                if self.config.debug {
                    trace!("Evicted {}", evicted);
                }
            }
        }

        while self
            .high
            .front()
            .is_some_and(|r| r.start() == center)
        {
            if let Some(duplicate) = self.high.pop_front() {
                self.low.push_back(duplicate);
            }
        }
        true
    }

    fn set_edges(&mut self) {
        let half = self.config.half_window();
        self.left_edge = EdgeType::from(self.center) - half;
        self.right_edge = EdgeType::from(self.center) + half;
    }

    fn pull(&mut self) -> anyhow::Result<Option<Record>> {
        let Some(record) = self.source.next_record()?
        else {
            return Ok(None);
        };
        self.records_read += 1;

        let (last_chrom, last_start) = &self.last_pulled;
        if record.chrom() == last_chrom {
            if self.config.check_order && record.start() < *last_start {
                return Err(self.ordering_violation(&record).into());
            }
        }
        else {
            if self.config.check_order && self.left_chroms.contains(record.chrom()) {
                return Err(self.ordering_violation(&record).into());
            }
            self.left_chroms.insert(last_chrom.clone());
            self.chromosomes_seen += 1;
        }
        self.last_pulled = (record.chrom().clone(), record.start());
        Ok(Some(record))
    }

    fn ordering_violation(
        &self,
        record: &Record,
    ) -> WindowError {
        WindowError::OrderingViolation {
            previous: format!("{}:{}", self.last_pulled.0, self.last_pulled.1),
            current:  format!("{}:{}", record.chrom(), record.start()),
        }
    }

    fn trace_state(&self) {
        debug!(
            "chrom {} | left {} | center {} | right {} | low [{}] | high [{}] | lookahead {}",
            self.chrom,
            self.left_edge,
            self.center,
            self.right_edge,
            self.low.iter().map(Record::start).join(", "),
            self.high.iter().map(Record::start).join(", "),
            self.lookahead
                .as_ref()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "exhausted".to_string()),
        );
    }

    fn view(&self) -> WindowView<'_> {
        WindowView {
            chrom:      &self.chrom,
            center:     self.center,
            left_edge:  self.left_edge,
            right_edge: self.right_edge,
            windowsize: self.config.windowsize,
            low:        &self.low,
            high:       &self.high,
        }
    }

    /// Turns the engine into an iterator of scored positions.
    pub fn into_scored(
        self,
        strategy: ScoreStrategy,
    ) -> ScoredWindows<S> {
        ScoredWindows::new(self, strategy)
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn chrom(&self) -> &SeqNameType {
        &self.chrom
    }

    pub fn center(&self) -> PosType {
        self.center
    }

    pub fn left_edge(&self) -> EdgeType {
        self.left_edge
    }

    pub fn right_edge(&self) -> EdgeType {
        self.right_edge
    }

    /// Record pulled from the source but not placed in the window yet.
    pub fn lookahead(&self) -> Option<&Record> {
        self.lookahead.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Records pulled from the source so far, the seed record included.
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    pub fn windows_emitted(&self) -> u64 {
        self.windows_emitted
    }

    pub fn chromosomes_seen(&self) -> u64 {
        self.chromosomes_seen
    }
}
