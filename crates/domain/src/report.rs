//! Run counters and summary
//!
//! The runner counts every check it attempts and every check whose status
//! matched; the final summary turns those counters into the process exit
//! code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Live counters owned by the runner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Checks attempted so far.
    pub attempted: u32,
    /// Checks whose status matched the expectation.
    pub passed: u32,
}

impl RunStats {
    /// Creates zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempted: 0,
            passed: 0,
        }
    }

    /// Records one attempted check.
    pub const fn record_attempt(&mut self) {
        self.attempted += 1;
    }

    /// Records one passed check.
    pub const fn record_pass(&mut self) {
        self.passed += 1;
    }

    /// Returns true if every attempted check passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed == self.attempted
    }
}

/// Final report for a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Checks attempted over the whole run.
    pub attempted: u32,
    /// Checks that passed over the whole run.
    pub passed: u32,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    /// Builds a summary from the final counters and run timestamps.
    #[must_use]
    pub const fn new(
        stats: RunStats,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            attempted: stats.attempted,
            passed: stats.passed,
            started_at,
            finished_at,
        }
    }

    /// Returns true if every attempted check passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed == self.attempted
    }

    /// Process exit code for this run: 0 when all checks passed, 1 otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.all_passed() { 0 } else { 1 }
    }

    /// Wall-clock duration of the run.
    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
