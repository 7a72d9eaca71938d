//! Run statistics.
//!
//! Accumulator state scoped to one simulation run: no process-wide counters.
//! The waiting-time total conserves every tick spent ready-but-not-running
//! across all instances ever created, including instances still queued when
//! the horizon is reached.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Tick;

/// Summary statistics for one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimStats {
    /// Sum of wait ticks across all instances ever created.
    pub total_wait_ticks: Tick,
    /// Number of instances admitted over the run.
    pub instances_created: u64,
}

impl SimStats {
    /// Mean waiting time per instance, or 0.0 if nothing was created.
    pub fn average_wait(&self) -> f64 {
        if self.instances_created == 0 {
            0.0
        } else {
            self.total_wait_ticks as f64 / self.instances_created as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sum of all waiting times: {}", self.total_wait_ticks)?;
        writeln!(f, "Number of processes created: {}", self.instances_created)?;
        write!(f, "Average Waiting Time: {:.2}", self.average_wait())
    }
}
