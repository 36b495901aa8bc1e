pub use crate::data_structs::typedef::{
    EdgeType,
    PosType,
    ScoreType,
    SeqNameType,
};
pub use crate::data_structs::{
    MultisetCounter,
    Record,
    Strand,
};
pub use crate::error::WindowError;
pub use crate::io::{
    BedGraphWriter,
    BedSource,
    IterSource,
    RecordSource,
    TryIterSource,
};
pub use crate::tools::score::{
    dups_score,
    dups_score_sum,
    ScoreStrategy,
    ScoredPosition,
    ScoredWindows,
};
pub use crate::tools::window::{
    WindowConfig,
    WindowEngine,
    WindowView,
};
