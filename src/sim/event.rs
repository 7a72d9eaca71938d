//! Simulation event log entries.
//!
//! The `Display` output of each event is a stable, user-facing format; the
//! binary prints events line by line as the run's event log.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Tick;

/// One entry in a queue snapshot: a live instance and its remaining work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Task id of the instance.
    pub task_id: u32,
    /// CPU ticks still required.
    pub remaining: Tick,
}

/// An observable scheduling event.
///
/// Completion events carry `tick + 1`: an instance that consumes its last
/// CPU tick during tick `t` has finished by `t + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The queue contents after one or more admissions, oldest first.
    QueueSnapshot {
        /// Tick of the admission.
        tick: Tick,
        /// Live instances in queue order.
        entries: Vec<QueueEntry>,
    },
    /// An instance reached its deadline before completing. It stays queued
    /// with a new deadline one period later.
    DeadlineMiss {
        /// Tick at which the deadline arrived.
        tick: Tick,
        /// Task id of the late instance.
        task_id: u32,
        /// CPU ticks still required at miss time.
        remaining: Tick,
        /// The re-armed deadline.
        new_deadline: Tick,
    },
    /// An instance was selected to run.
    Start {
        /// Tick of selection.
        tick: Tick,
        /// Task id of the selected instance.
        task_id: u32,
    },
    /// The running instance lost the CPU to a strictly earlier deadline.
    Preempt {
        /// Tick of preemption.
        tick: Tick,
        /// Task id of the preempted instance.
        task_id: u32,
    },
    /// An instance consumed its last required CPU tick.
    Complete {
        /// Tick by which the instance has finished (run tick + 1).
        tick: Tick,
        /// Task id of the finished instance.
        task_id: u32,
    },
    /// The simulation horizon was reached.
    MaxTimeReached {
        /// The horizon (hyperperiod).
        tick: Tick,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::QueueSnapshot { tick, entries } => {
                write!(f, "{tick}: processes (oldest first):")?;
                for entry in entries {
                    write!(f, " {} ({} ms)", entry.task_id, entry.remaining)?;
                }
                Ok(())
            }
            Event::DeadlineMiss {
                tick,
                task_id,
                remaining,
                new_deadline,
            } => write!(
                f,
                "{tick}: process {task_id} missed deadline ({remaining} ms left), new deadline is {new_deadline}"
            ),
            Event::Start { tick, task_id } => write!(f, "{tick}: process {task_id} starts"),
            Event::Preempt { tick, task_id } => {
                write!(f, "{tick}: process {task_id} preempted!")
            }
            Event::Complete { tick, task_id } => write!(f, "{tick}: process {task_id} ends"),
            Event::MaxTimeReached { tick } => write!(f, "{tick}: Max Time reached"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_format() {
        let event = Event::QueueSnapshot {
            tick: 2,
            entries: vec![
                QueueEntry {
                    task_id: 1,
                    remaining: 2,
                },
                QueueEntry {
                    task_id: 2,
                    remaining: 1,
                },
            ],
        };
        assert_eq!(
            event.to_string(),
            "2: processes (oldest first): 1 (2 ms) 2 (1 ms)"
        );
    }

    #[test]
    fn test_miss_format() {
        let event = Event::DeadlineMiss {
            tick: 2,
            task_id: 1,
            remaining: 2,
            new_deadline: 4,
        };
        assert_eq!(
            event.to_string(),
            "2: process 1 missed deadline (2 ms left), new deadline is 4"
        );
    }

    #[test]
    fn test_start_preempt_complete_formats() {
        assert_eq!(
            Event::Start { tick: 0, task_id: 1 }.to_string(),
            "0: process 1 starts"
        );
        assert_eq!(
            Event::Preempt { tick: 4, task_id: 2 }.to_string(),
            "4: process 2 preempted!"
        );
        assert_eq!(
            Event::Complete { tick: 1, task_id: 1 }.to_string(),
            "1: process 1 ends"
        );
    }

    #[test]
    fn test_max_time_format() {
        assert_eq!(
            Event::MaxTimeReached { tick: 10 }.to_string(),
            "10: Max Time reached"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let event = Event::Preempt { tick: 4, task_id: 2 };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
