//! Live task instance.
//!
//! One `TaskInstance` exists per periodic activation of a task. It copies
//! `exec_time` and `period` from its descriptor at release time, so the
//! instance never aliases the descriptor after creation. The queue owns the
//! instance until completion, at which point its waiting time is folded into
//! the run statistics and the instance is discarded.

use serde::{Deserialize, Serialize};

use super::TaskDescriptor;
use crate::Tick;

/// A single periodic activation of a task.
///
/// Missing a deadline does not destroy an instance: its deadline is advanced
/// by one period and it keeps accumulating run and wait ticks toward its
/// original `exec_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInstance {
    /// Id of the descriptor this instance was released from.
    pub task_id: u32,
    /// CPU ticks required to complete (copied from the descriptor).
    pub exec_time: Tick,
    /// Period (copied from the descriptor, used to re-arm missed deadlines).
    pub period: Tick,
    /// CPU ticks consumed so far.
    pub ran_ticks: Tick,
    /// Ticks spent ready but not running.
    pub wait_ticks: Tick,
    /// Absolute tick by which execution must complete.
    pub deadline: Tick,
}

impl TaskInstance {
    /// Releases a fresh instance of `task` at the given tick.
    ///
    /// The deadline is one period after the release tick; both progress
    /// counters start at zero.
    pub fn release(task: &TaskDescriptor, tick: Tick) -> Self {
        Self {
            task_id: task.id,
            exec_time: task.exec_time,
            period: task.period,
            ran_ticks: 0,
            wait_ticks: 0,
            deadline: tick + task.period,
        }
    }

    /// CPU ticks still required to complete.
    pub fn remaining(&self) -> Tick {
        self.exec_time - self.ran_ticks
    }

    /// Whether the instance has consumed all required CPU ticks.
    pub fn is_complete(&self) -> bool {
        self.ran_ticks == self.exec_time
    }
}
