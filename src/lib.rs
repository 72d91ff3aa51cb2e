//! CPU scheduling simulator.
//!
//! Simulates how a single CPU executes a set of processes under four
//! classic policies and reports the resulting Gantt timeline together
//! with per-process and aggregate metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Process`, `GanttEntry`, `ScheduleResult`)
//! - **`dispatching`**: Composable selection rules (`Fifo`, `Sjf`, `Priority`)
//! - **`scheduler`**: Policies, the shared simulation loop, and metrics
//! - **`validation`**: Input integrity checks (duplicate IDs, bad bursts)
//! - **`input`**: Line-format parser and JSON request body
//! - **`report`**: Console rendering
//! - **`workload`**: Seeded random process sets
//! - **`config`**: Command-line configuration of the binary
//!
//! # Example
//!
//! ```
//! use u_cpusched::{simulate, Algorithm, Process};
//!
//! let processes = vec![Process::new("A", 0, 5), Process::new("B", 2, 3)];
//! let result = simulate(&processes, Algorithm::Fcfs).unwrap();
//!
//! assert_eq!(result.total_time, 8);
//! assert_eq!(result.average_waiting_time, 1.5);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
pub use models::{GanttEntry, GanttLabel, Process, ScheduleResult};
pub use scheduler::{simulate, simulate_all, simulate_named, Algorithm};
