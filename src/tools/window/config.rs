use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::{
    EdgeType,
    PosType,
};
use crate::error::WindowError;
use crate::io::RecordSource;
use crate::tools::window::WindowEngine;
use crate::with_field_fn;

/// Settings of a [`WindowEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Width of the neighborhood around the centered coordinate. The window
    /// spans `windowsize / 2` (truncated) on each side of the center.
    pub windowsize:  PosType,
    /// Log buffer contents after every advance.
    pub debug:       bool,
    /// Fail on records that break `(chromosome, start)` order instead of
    /// producing meaningless windows.
    pub check_order: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            windowsize:  100,
            debug:       false,
            check_order: true,
        }
    }
}

impl WindowConfig {
    with_field_fn!(windowsize, PosType);
    with_field_fn!(debug, bool);
    with_field_fn!(check_order, bool);

    pub fn new(windowsize: PosType) -> Self {
        Self::default().with_windowsize(windowsize)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.windowsize == 0 {
            return Err(WindowError::InvalidWindowSize(self.windowsize).into());
        }
        Ok(())
    }

    /// Half of the window width, truncated toward zero. For odd window sizes
    /// the window is therefore one unit narrower than `windowsize`.
    pub fn half_window(&self) -> EdgeType {
        EdgeType::from(self.windowsize / 2)
    }

    /// Builds an engine over `source`, consuming its first record.
    pub fn try_finish<S: RecordSource>(
        &self,
        source: S,
    ) -> anyhow::Result<WindowEngine<S>> {
        WindowEngine::try_new(source, self.clone())
    }
}
