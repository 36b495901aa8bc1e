//! Duplication scores of a window.
//!
//! Both scores tally the start coordinates of every record in the window,
//! set the count of the center coordinate aside and compare it with the
//! counts of the other positions. [`dups_score`] divides by the mean count
//! per other position, [`dups_score_sum`] by the total count of the other
//! positions. When the window holds nothing but duplicates of the center,
//! both return the raw center count.

use std::fmt::Display;
use std::iter::FusedIterator;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::{
    CountType,
    PosType,
    ScoreType,
    SeqNameType,
};
use crate::data_structs::{
    MultisetCounter,
    Record,
};
use crate::io::RecordSource;
use crate::tools::window::{
    WindowEngine,
    WindowView,
};

/// Center count, total count of the other positions and the number of other
/// distinct positions.
fn center_tally<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    center: PosType,
) -> (CountType, CountType, usize) {
    let mut counter: MultisetCounter<PosType> =
        records.into_iter().map(Record::start).collect();
    let center_count = counter.take(&center);
    (center_count, counter.total_count(), counter.distinct_count())
}

/// Center duplicate count relative to the mean duplicate count of the other
/// positions in the window.
///
/// Values above 1 mark a center duplicated more than its neighborhood,
/// uniform background scores around 1.
pub fn dups_score<'a>(
    low: impl IntoIterator<Item = &'a Record>,
    high: impl IntoIterator<Item = &'a Record>,
    center: PosType,
) -> ScoreType {
    let (center_count, total, distinct) =
        center_tally(low.into_iter().chain(high), center);
    if distinct == 0 {
        return center_count as ScoreType;
    }
    let mean = total as ScoreType / distinct as ScoreType;
    center_count as ScoreType / mean
}

/// Center duplicate count relative to the total number of other records in
/// the window. Unlike [`dups_score`] this shrinks as the window gets wider.
pub fn dups_score_sum<'a>(
    low: impl IntoIterator<Item = &'a Record>,
    high: impl IntoIterator<Item = &'a Record>,
    center: PosType,
) -> ScoreType {
    let (center_count, total, distinct) =
        center_tally(low.into_iter().chain(high), center);
    if distinct == 0 {
        return center_count as ScoreType;
    }
    center_count as ScoreType / total as ScoreType
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "console", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ScoreStrategy {
    /// Normalize by the mean count per other position ([`dups_score`]).
    #[default]
    Mean,
    /// Normalize by the total count of other positions ([`dups_score_sum`]).
    Sum,
}

impl ScoreStrategy {
    pub fn score(
        &self,
        window: &WindowView<'_>,
    ) -> ScoreType {
        match self {
            ScoreStrategy::Mean => dups_score(window.low, window.high, window.center),
            ScoreStrategy::Sum => {
                dups_score_sum(window.low, window.high, window.center)
            },
        }
    }
}

impl Display for ScoreStrategy {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ScoreStrategy::Mean => write!(f, "mean"),
            ScoreStrategy::Sum => write!(f, "sum"),
        }
    }
}

/// A window center with its score, one bedGraph row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPosition {
    pub chrom:  SeqNameType,
    pub center: PosType,
    pub score:  ScoreType,
}

impl ScoredPosition {
    pub fn from_view(
        window: &WindowView<'_>,
        strategy: ScoreStrategy,
    ) -> Self {
        Self {
            chrom:  window.chrom.clone(),
            center: window.center,
            score:  strategy.score(window),
        }
    }
}

/// Iterator over the scored windows of a [`WindowEngine`].
///
/// Yields an error at most once; the iterator ends right after it.
pub struct ScoredWindows<S: RecordSource> {
    engine:   WindowEngine<S>,
    strategy: ScoreStrategy,
}

impl<S: RecordSource> ScoredWindows<S> {
    pub fn new(
        engine: WindowEngine<S>,
        strategy: ScoreStrategy,
    ) -> Self {
        Self { engine, strategy }
    }

    pub fn engine(&self) -> &WindowEngine<S> {
        &self.engine
    }

    pub fn strategy(&self) -> ScoreStrategy {
        self.strategy
    }

    pub fn into_engine(self) -> WindowEngine<S> {
        self.engine
    }
}

impl<S: RecordSource> Iterator for ScoredWindows<S> {
    type Item = anyhow::Result<ScoredPosition>;

    fn next(&mut self) -> Option<Self::Item> {
        let strategy = self.strategy;
        self.engine
            .advance()
            .map(|window| {
                window.map(|window| ScoredPosition::from_view(&window, strategy))
            })
            .transpose()
    }
}

impl<S: RecordSource> FusedIterator for ScoredWindows<S> {}
