//! High score tracking
//!
//! Kept in memory for the lifetime of the process only.

use std::fmt;

/// Result of a finished run, as shown on the end-of-run panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Final score of the run
    pub score: u64,
    /// Best score before this run ended
    pub previous_high_score: u64,
    /// Best score including this run
    pub high_score: u64,
}

impl RunSummary {
    /// The run beat the previous best
    pub fn is_new_record(&self) -> bool {
        self.score > self.previous_high_score
    }
}

/// The panel text is written before the best score is raised, so it shows the
/// best as it stood when the run started, plus a record line when it was beaten.
impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {}\nHigh Score: {}",
            self.score, self.previous_high_score
        )?;
        if self.is_new_record() {
            write!(f, "\nNew record!")?;
        }
        Ok(())
    }
}

/// Best score across runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    high_score: u64,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Check if a score would beat the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.high_score
    }

    /// Record a finished run, keeping the best score
    pub fn record_run(&mut self, score: u64) -> RunSummary {
        let previous_high_score = self.high_score;
        if self.qualifies(score) {
            log::info!("New high score: {} (was {})", score, previous_high_score);
            self.high_score = score;
        }
        RunSummary {
            score,
            previous_high_score,
            high_score: self.high_score,
        }
    }
}
