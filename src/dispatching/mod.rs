//! Dispatch policies for the simulation loop.
//!
//! A dispatch policy decides, once per tick, which queued instance should
//! run: keep the current one, start a new one, or preempt. The built-in
//! policy is [`EarliestDeadlineFirst`].
//!
//! # Usage
//!
//! ```
//! use edf_sim::dispatching::{DispatchPolicy, Decision, EarliestDeadlineFirst};
//! use edf_sim::models::ReadyQueue;
//!
//! let queue = ReadyQueue::new();
//! assert!(matches!(EarliestDeadlineFirst.decide(&queue, None), Decision::Idle));
//! ```
//!
//! # Reference
//! Liu & Layland (1973): EDF is optimal for preemptive uniprocessor
//! scheduling of periodic tasks.

mod edf;

pub use edf::EarliestDeadlineFirst;

use std::fmt::Debug;

use crate::models::ReadyQueue;

/// Outcome of one dispatch pass.
///
/// Indices refer to positions in the ready queue at the time of the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Queue is empty; nothing to run.
    Idle,
    /// The current instance keeps the CPU.
    Keep,
    /// No instance was running; start the one at this index.
    Start(usize),
    /// Replace the current instance (`from`) with a more urgent one (`to`).
    /// The preempted instance stays in the queue with its progress intact.
    Preempt {
        /// Queue index of the instance losing the CPU.
        from: usize,
        /// Queue index of the instance taking over.
        to: usize,
    },
}

/// Selects or preempts the running instance, once per tick.
pub trait DispatchPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "EDF").
    fn name(&self) -> &'static str;

    /// Decides what should run this tick.
    ///
    /// `current` is the queue index of the instance that held the CPU at the
    /// end of the previous tick, if any.
    fn decide(&self, queue: &ReadyQueue, current: Option<usize>) -> Decision;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
