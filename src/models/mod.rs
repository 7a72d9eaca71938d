//! Simulation domain models.
//!
//! Provides the core data types for periodic task scheduling: the static
//! task definition, its per-activation instance, and the ready queue the
//! simulator dispatches from.
//!
//! | Type | Role |
//! |------|------|
//! | `TaskDescriptor` | Static definition (id, execution time, period) |
//! | `TaskInstance` | One periodic activation with its own deadline and counters |
//! | `ReadyQueue` | Ordered owning collection of live instances |

mod instance;
mod queue;
mod task;

pub use instance::TaskInstance;
pub use queue::ReadyQueue;
pub use task::TaskDescriptor;
