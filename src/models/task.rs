//! Periodic task descriptor.
//!
//! A descriptor is the static definition of a periodic task, supplied once
//! before simulation starts. Live activations are represented separately by
//! [`TaskInstance`](super::TaskInstance).
//!
//! # Reference
//! Liu & Layland (1973), the periodic task model: each task releases one
//! instance every `period` ticks, each requiring `exec_time` ticks of CPU.

use serde::{Deserialize, Serialize};

use crate::Tick;

/// Static definition of a periodic task.
///
/// `exec_time <= period` is intentionally not required: an over-subscribed
/// task set is legal input and produces deadline misses by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    /// Unique task identifier (>= 1).
    pub id: u32,
    /// CPU ticks required per instance (> 0).
    pub exec_time: Tick,
    /// Ticks between successive instance arrivals (> 0).
    pub period: Tick,
}

impl TaskDescriptor {
    /// Creates a new descriptor.
    pub fn new(id: u32, exec_time: Tick, period: Tick) -> Self {
        Self {
            id,
            exec_time,
            period,
        }
    }

    /// CPU demand as a fraction of the period.
    ///
    /// Values above 1.0 indicate an over-subscribed task that will miss
    /// every deadline.
    pub fn utilization(&self) -> f64 {
        self.exec_time as f64 / self.period as f64
    }
}
