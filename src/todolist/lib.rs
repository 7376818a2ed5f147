//! # Todolist
//!
//! An in-memory todo list. Tasks are `(title, deadline)` pairs kept in two sorted buckets:
//! **active** and **completed**.
//!
//! ```
//! use chrono::NaiveDate;
//! use todolist::TaskList;
//!
//! let due = NaiveDate::from_ymd_opt(2030, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//!
//! let mut list = TaskList::new();
//! assert!(list.add("Write report", due).unwrap());
//! assert!(list.complete_task("Write report", due).unwrap());
//! assert!(list.contains_completed_task("Write report", due).unwrap());
//! assert!(list.add("Bad, title", due).is_err());
//! ```
//!
//! ## No I/O in the Core
//!
//! The list never reads input and never decides where output goes, with one exception:
//! [`TaskList::print_tasks`] and [`TaskList::print_completed_tasks`] write to stdout. Every
//! other rendering path takes a caller-supplied [`std::io::Write`] sink.
//!
//! ## Errors vs. Outcomes
//!
//! Invalid input is an error ([`TodoError::InvalidArgument`]). An operation that simply had no
//! effect returns `Ok(false)`.
//!
//! ## Logging
//!
//! Operations emit `debug`-level records through the [`log`] facade. The crate never installs a
//! logger.
//!
//! ## Module Overview
//!
//! - [`task_list`]: The `TaskList` container and its operations
//! - [`model`]: The `Task` value type, validation, and ordering
//! - [`config`]: Display and validation settings
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod model;
pub mod task_list;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;

pub use config::TaskListConfig;
pub use error::{Result, TodoError};
pub use model::{Bucket, Task};
pub use task_list::TaskList;
