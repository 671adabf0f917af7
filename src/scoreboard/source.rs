//! Score feeds.

use tracing::debug;

use super::ScoreSource;
use crate::config::ScoreboardConfig;
use crate::types::{DemoError, ScoreSnapshot};

/// A stadium feed that always reports the same score.
#[derive(Debug, Clone)]
pub struct FixedScoreSource {
    runs: u32,
    wickets: u8,
    overs: f64,
}

impl FixedScoreSource {
    /// Fails if the fixed values could never form a valid snapshot.
    pub fn new(runs: u32, wickets: u8, overs: f64) -> Result<Self, DemoError> {
        ScoreSnapshot::new(runs, wickets, overs)?;
        Ok(Self { runs, wickets, overs })
    }

    pub fn from_config(cfg: &ScoreboardConfig) -> Result<Self, DemoError> {
        Self::new(cfg.runs, cfg.wickets, cfg.overs)
    }
}

impl Default for FixedScoreSource {
    /// 90 for 2 after 10.2 overs.
    fn default() -> Self {
        Self {
            runs: 90,
            wickets: 2,
            overs: 10.2,
        }
    }
}

impl ScoreSource for FixedScoreSource {
    fn latest(&self) -> Result<ScoreSnapshot, DemoError> {
        debug!(runs = self.runs, wickets = self.wickets, overs = self.overs, "Fixed feed read");
        ScoreSnapshot::new(self.runs, self.wickets, self.overs)
    }
}
