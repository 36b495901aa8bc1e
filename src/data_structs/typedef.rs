use arcstr::ArcStr;

/// Record start and stop coordinates.
pub type PosType = u64;
/// Window edges. Signed, because the left edge of a window centered close to
/// the chromosome start lies below zero. Wide enough to hold any
/// `PosType +/- PosType / 2` without overflow.
pub type EdgeType = i128;
/// Occurrence counts of the multiset counter.
pub type CountType = usize;
/// Duplication scores.
pub type ScoreType = f64;
/// Chromosome names. Cloning only bumps a reference count.
pub type SeqNameType = ArcStr;
