//! Earliest-Deadline-First (EDF) real-time scheduling simulator.
//!
//! Simulates a fixed set of periodic tasks, tick by tick, over one
//! hyperperiod (the least common multiple of all task periods). Each tick
//! the simulator admits new task instances, detects and re-arms missed
//! deadlines, and dispatches the instance with the earliest deadline,
//! preempting only on strictly earlier deadlines. The result is a
//! deterministic event log plus waiting-time statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TaskDescriptor`, `TaskInstance`, `ReadyQueue`
//! - **`dispatching`**: `DispatchPolicy` trait and the built-in
//!   `EarliestDeadlineFirst` policy
//! - **`sim`**: `Simulator` engine, `Event` log entries, `SimStats`
//! - **`timing`**: GCD/LCM helpers and hyperperiod computation
//! - **`validation`**: Task-set integrity checks (fail fast before simulation)
//! - **`workload`**: Seeded random task-set generation
//!
//! # References
//!
//! - Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//!   Hard-Real-Time Environment"
//! - Buttazzo (2011), "Hard Real-Time Computing Systems"

pub mod dispatching;
pub mod models;
pub mod sim;
pub mod timing;
pub mod validation;
pub mod workload;

/// Discrete simulation time unit. One unit of CPU capacity is available per tick.
pub type Tick = u64;
