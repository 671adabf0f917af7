//! Scoreboard displays.
//!
//! Each display keeps the last values it was sent and prints its own view
//! as soon as a snapshot arrives. `Display` yields exactly the printed text.

use std::fmt;

use tracing::debug;

use super::ScoreSubscriber;
use crate::types::{DemoError, ScoreSnapshot};

/// Overs in a one-day innings, used to project the final total.
pub const INNINGS_OVERS: f64 = 50.0;

// ---------------------------------------------------------------------------
// Average score
// ---------------------------------------------------------------------------

/// Run rate and projected total derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreProjection {
    pub run_rate: f64,
    pub predicted_score: u32,
}

impl ScoreProjection {
    /// Project a 50-over total from the current run rate.
    ///
    /// The prediction is truncated, not rounded: 441.17 becomes 441.
    pub fn from_snapshot(snapshot: &ScoreSnapshot) -> Result<Self, DemoError> {
        if snapshot.overs() == 0.0 {
            return Err(DemoError::DivisionUndefined {
                runs: snapshot.runs(),
                wickets: snapshot.wickets(),
            });
        }

        let run_rate = f64::from(snapshot.runs()) / snapshot.overs();
        let predicted_score = (run_rate * INNINGS_OVERS) as u32;
        Ok(Self { run_rate, predicted_score })
    }
}

#[derive(Debug, Default)]
pub struct AverageScoreDisplay {
    last: Option<ScoreProjection>,
}

impl AverageScoreDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projection(&self) -> Option<ScoreProjection> {
        self.last
    }
}

impl ScoreSubscriber for AverageScoreDisplay {
    fn receive(&mut self, snapshot: &ScoreSnapshot) -> Result<(), DemoError> {
        let projection = ScoreProjection::from_snapshot(snapshot)?;
        self.last = Some(projection);
        debug!(
            run_rate = projection.run_rate,
            predicted = projection.predicted_score,
            "Average score updated"
        );
        println!("{self}\n");
        Ok(())
    }

    fn name(&self) -> &str {
        "average-score"
    }
}

impl fmt::Display for AverageScoreDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.last {
            Some(p) => write!(
                f,
                "Average Score:\nRun Rate: {:.4}, PredictedScore: {}",
                p.run_rate, p.predicted_score
            ),
            None => write!(f, "Average Score:\nno score yet"),
        }
    }
}

// ---------------------------------------------------------------------------
// Current score
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CurrentScoreDisplay {
    last: Option<ScoreSnapshot>,
}

impl CurrentScoreDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_snapshot(&self) -> Option<ScoreSnapshot> {
        self.last
    }
}

impl ScoreSubscriber for CurrentScoreDisplay {
    fn receive(&mut self, snapshot: &ScoreSnapshot) -> Result<(), DemoError> {
        self.last = Some(*snapshot);
        println!("{self}\n");
        Ok(())
    }

    fn name(&self) -> &str {
        "current-score"
    }
}

impl fmt::Display for CurrentScoreDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.last {
            Some(s) => write!(
                f,
                "Current Score:\nRuns: {}, Wickets: {}, Overs: {}",
                s.runs(),
                s.wickets(),
                s.overs()
            ),
            None => write!(f, "Current Score:\nno score yet"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
