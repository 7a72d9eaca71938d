//! Tick-driven simulation loop.
//!
//! # Tick order
//!
//! Each tick applies, in fixed order:
//! 1. Deadline monitor — re-arm instances whose deadline arrived, report
//!    misses in ascending task-id order
//! 2. Admission — release one instance per task whose period divides the tick,
//!    in ascending task-id order
//! 3. Queue snapshot, iff any admission occurred this tick
//! 4. Dispatch — select or preempt per the policy
//! 5. Execution — advance the running instance; remove it on completion
//! 6. Wait accounting — every queued instance except the running one waits
//!
//! The loop runs for one hyperperiod, after which the arrival pattern would
//! repeat exactly.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Event, QueueEntry, SimStats};
use crate::dispatching::{Decision, DispatchPolicy, EarliestDeadlineFirst};
use crate::models::{ReadyQueue, TaskDescriptor, TaskInstance};
use crate::timing;
use crate::validation::{validate_task_set, ValidationError};
use crate::Tick;

/// Why a simulation could not run.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// The task set failed validation.
    InvalidTaskSet(Vec<ValidationError>),
    /// The LCM of the periods does not fit in 64 bits.
    HyperperiodOverflow,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidTaskSet(errors) => {
                write!(f, "invalid task set:")?;
                for e in errors {
                    write!(f, " {e};")?;
                }
                Ok(())
            }
            SimError::HyperperiodOverflow => {
                write!(f, "hyperperiod overflows 64 bits")
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Complete result of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    /// The simulation horizon (hyperperiod of the task set).
    pub max_time: Tick,
    /// Every observable event, in emission order.
    pub events: Vec<Event>,
    /// Accumulated waiting-time statistics.
    pub stats: SimStats,
}

/// Discrete-event EDF simulator.
///
/// Owns the dispatch policy; each [`run`](Simulator::run) is independent and
/// deterministic given its task set.
///
/// # Example
///
/// ```
/// use edf_sim::models::TaskDescriptor;
/// use edf_sim::sim::Simulator;
///
/// let tasks = vec![
///     TaskDescriptor::new(1, 1, 2),
///     TaskDescriptor::new(2, 1, 5),
/// ];
/// let report = Simulator::new().run(&tasks).unwrap();
/// assert_eq!(report.max_time, 10);
/// assert_eq!(report.stats.instances_created, 7);
/// ```
#[derive(Debug)]
pub struct Simulator {
    policy: Box<dyn DispatchPolicy>,
}

impl Simulator {
    /// Creates a simulator with the EDF policy.
    pub fn new() -> Self {
        Self {
            policy: Box::new(EarliestDeadlineFirst),
        }
    }

    /// Creates a simulator with a custom dispatch policy.
    pub fn with_policy<P: DispatchPolicy + 'static>(policy: P) -> Self {
        Self {
            policy: Box::new(policy),
        }
    }

    /// Validates the task set and simulates one full hyperperiod.
    pub fn run(&self, tasks: &[TaskDescriptor]) -> Result<SimReport, SimError> {
        validate_task_set(tasks).map_err(SimError::InvalidTaskSet)?;
        let max_time = timing::hyperperiod(tasks).ok_or(SimError::HyperperiodOverflow)?;
        debug!(
            "simulating {} tasks with {} policy over hyperperiod {max_time}",
            tasks.len(),
            self.policy.name()
        );
        Ok(self.run_until(tasks, max_time))
    }

    /// Simulates a validated task set up to `max_time` ticks.
    ///
    /// # Panics
    /// Panics if any task has a zero period (admission divides the tick by
    /// the period). [`run`](Simulator::run) validates this up front; callers
    /// invoking `run_until` directly must do the same.
    pub fn run_until(&self, tasks: &[TaskDescriptor], max_time: Tick) -> SimReport {
        // Fixed admission order: ascending task id. Instances admitted in the
        // same tick are thereby ordered by id, which is the fallback for
        // equal-deadline "oldest" comparisons later.
        let mut admission_order: Vec<&TaskDescriptor> = tasks.iter().collect();
        admission_order.sort_by_key(|t| t.id);

        let mut queue = ReadyQueue::new();
        let mut events = Vec::new();
        let mut stats = SimStats::default();
        let mut current: Option<usize> = None;

        for tick in 0..max_time {
            self.monitor_deadlines(&mut queue, tick, &mut events);

            let admitted = Self::admit(&admission_order, &mut queue, tick, &mut stats);
            if admitted {
                events.push(Event::QueueSnapshot {
                    tick,
                    entries: queue
                        .iter()
                        .map(|inst| QueueEntry {
                            task_id: inst.task_id,
                            remaining: inst.remaining(),
                        })
                        .collect(),
                });
            }

            match self.policy.decide(&queue, current) {
                Decision::Idle | Decision::Keep => {}
                Decision::Start(idx) => {
                    current = Some(idx);
                    events.push(Event::Start {
                        tick,
                        task_id: queue[idx].task_id,
                    });
                }
                Decision::Preempt { from, to } => {
                    events.push(Event::Preempt {
                        tick,
                        task_id: queue[from].task_id,
                    });
                    current = Some(to);
                    events.push(Event::Start {
                        tick,
                        task_id: queue[to].task_id,
                    });
                }
            }

            if let Some(idx) = current {
                queue[idx].ran_ticks += 1;
                if queue[idx].is_complete() {
                    let done = queue.remove(idx);
                    debug!(
                        "tick {tick}: task {} instance completed after waiting {}",
                        done.task_id, done.wait_ticks
                    );
                    events.push(Event::Complete {
                        tick: tick + 1,
                        task_id: done.task_id,
                    });
                    stats.total_wait_ticks += done.wait_ticks;
                    current = None;
                }
            }

            for (idx, inst) in queue.iter_mut().enumerate() {
                if current != Some(idx) {
                    inst.wait_ticks += 1;
                }
            }
        }

        events.push(Event::MaxTimeReached { tick: max_time });

        // Instances still queued at the horizon are mid-execution; their
        // accumulated waiting still counts.
        for inst in queue.iter() {
            stats.total_wait_ticks += inst.wait_ticks;
        }

        SimReport {
            max_time,
            events,
            stats,
        }
    }

    /// Re-arms every instance whose deadline arrived this tick and reports
    /// the misses in ascending task-id order.
    fn monitor_deadlines(&self, queue: &mut ReadyQueue, tick: Tick, events: &mut Vec<Event>) {
        let mut missed: Vec<usize> = Vec::new();
        for idx in 0..queue.len() {
            if queue[idx].deadline == tick {
                let period = queue[idx].period;
                queue[idx].deadline = tick + period;
                missed.push(idx);
            }
        }

        // Misses are collected in queue order but reported by ascending
        // task id; this is a user-facing ordering guarantee.
        missed.sort_by_key(|&idx| queue[idx].task_id);

        for idx in missed {
            let inst = &queue[idx];
            events.push(Event::DeadlineMiss {
                tick,
                task_id: inst.task_id,
                remaining: inst.remaining(),
                new_deadline: inst.deadline,
            });
        }
    }

    /// Releases one instance per task whose period divides the tick.
    /// Returns whether any admission occurred.
    fn admit(
        admission_order: &[&TaskDescriptor],
        queue: &mut ReadyQueue,
        tick: Tick,
        stats: &mut SimStats,
    ) -> bool {
        let mut admitted = false;
        for task in admission_order {
            if tick % task.period == 0 {
                queue.push(TaskInstance::release(task, tick));
                stats.instances_created += 1;
                admitted = true;
            }
        }
        admitted
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
