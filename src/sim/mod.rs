//! Simulation engine, event log, and run statistics.
//!
//! `Simulator` drives the tick loop: deadline monitoring, admission,
//! dispatch, execution, and wait accounting, in that fixed order each tick.
//! It produces a `SimReport` holding the full `Event` log and the
//! accumulated `SimStats`.
//!
//! The simulation is single-threaded and pure: given the same task set it
//! always produces the same report.

mod engine;
mod event;
mod stats;

pub use engine::{SimError, SimReport, Simulator};
pub use event::{Event, QueueEntry};
pub use stats::SimStats;
