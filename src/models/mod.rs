//! CPU scheduling domain models.
//!
//! Provides the data types consumed and produced by one simulation run.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Textbook term | Wire field |
//! |------------|---------------|------------|
//! | Process | PCB / job | `processes[]` |
//! | GanttEntry | Gantt chart bar | `gantt[]` |
//! | ScheduleResult | Schedule + metrics | response body |

mod gantt;
mod process;
mod result;

pub use gantt::{GanttEntry, GanttLabel, IDLE_LABEL};
pub use process::{Process, ProcessDescriptor};
pub use result::ScheduleResult;
