//! # Task List: Active and Completed Tasks
//!
//! [`TaskList`] owns two ordered sets of [`Task`], one per [`Bucket`]. Both sets follow the
//! task ordering (deadline, then case-insensitive title), and both reject duplicates by the
//! same rule.
//!
//! ## Invariants
//!
//! - **Unique per bucket**: no two stored tasks in one bucket compare equal.
//! - **Disjoint buckets**: a task is never active and completed at the same time.
//!
//! ## Operations and Outcomes
//!
//! Every operation takes a raw `(title, deadline)` pair and builds a candidate task from it.
//! Two kinds of outcome are kept apart:
//!
//! - **Invalid input** (a comma in a title) is an `Err(TodoError::InvalidArgument)`. Nothing is
//!   touched.
//! - **No effect** (not found, duplicate, nothing to complete) is `Ok(false)`.
//!
//! | Operation | Looks in | Lands in |
//! |-----------|----------|----------|
//! | `add` | completed (removed from there) | active |
//! | `remove` | active, then completed | - |
//! | `modify_task` | active, then completed | active |
//! | `complete_task` | active | completed |
//!
//! `modify_task` is "remove the current task, then add the new one". Modifying a completed
//! task therefore reactivates it.

use chrono::{Local, NaiveDateTime};
use std::collections::BTreeSet;
use std::io::{self, Write};

use crate::config::TaskListConfig;
use crate::error::Result;
use crate::model::{validate_deadline, Bucket, Task};

/// A container that stores tasks and keeps them sorted.
#[derive(Debug, Default)]
pub struct TaskList {
    active: BTreeSet<Task>,
    completed: BTreeSet<Task>,
    config: TaskListConfig,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TaskListConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &TaskListConfig {
        &self.config
    }

    /// Adds a task to the active bucket.
    ///
    /// A matching completed task is moved back to active. Returns `false` only when the task
    /// was already active.
    pub fn add(&mut self, title: &str, deadline: NaiveDateTime) -> Result<bool> {
        let task = self.insertable(title, deadline)?;
        Ok(self.add_task(task))
    }

    /// Removes a task from whichever bucket holds it.
    pub fn remove(&mut self, title: &str, deadline: NaiveDateTime) -> Result<bool> {
        let task = Task::create(title, deadline)?;
        Ok(self.remove_task(&task))
    }

    /// Whether the task is active. Completed tasks are not considered.
    pub fn contains_task(&self, title: &str, deadline: NaiveDateTime) -> Result<bool> {
        let task = Task::create(title, deadline)?;
        Ok(self.active.contains(&task))
    }

    /// Whether the task is completed. Active tasks are not considered.
    pub fn contains_completed_task(&self, title: &str, deadline: NaiveDateTime) -> Result<bool> {
        let task = Task::create(title, deadline)?;
        Ok(self.completed.contains(&task))
    }

    /// Whether the task is in either bucket.
    pub fn contains(&self, title: &str, deadline: NaiveDateTime) -> Result<bool> {
        let task = Task::create(title, deadline)?;
        Ok(self.active.contains(&task) || self.completed.contains(&task))
    }

    /// Replaces the current task with a new one.
    ///
    /// Both pairs are validated before anything changes. If the current task is in neither
    /// bucket, nothing happens and `false` is returned. The new task always lands in active.
    pub fn modify_task(
        &mut self,
        current_title: &str,
        current_deadline: NaiveDateTime,
        new_title: &str,
        new_deadline: NaiveDateTime,
    ) -> Result<bool> {
        let current = Task::create(current_title, current_deadline)?;
        let replacement = self.insertable(new_title, new_deadline)?;

        if !self.remove_task(&current) {
            log::debug!("modify: no task matching {}", current);
            return Ok(false);
        }
        Ok(self.add_task(replacement))
    }

    /// Moves an active task to the completed bucket.
    pub fn complete_task(&mut self, title: &str, deadline: NaiveDateTime) -> Result<bool> {
        let task = Task::create(title, deadline)?;
        match self.active.take(&task) {
            Some(stored) => {
                log::debug!("completing {}", stored);
                Ok(self.completed.insert(stored))
            }
            None => {
                log::debug!("complete: {} is not active", task);
                Ok(false)
            }
        }
    }

    /// Active tasks in ascending order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks_in(Bucket::Active)
    }

    /// Completed tasks in ascending order.
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks_in(Bucket::Completed)
    }

    /// Tasks of one bucket in ascending order.
    pub fn tasks_in(&self, bucket: Bucket) -> impl Iterator<Item = &Task> {
        self.bucket(bucket).iter()
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn completed_len(&self) -> usize {
        self.completed.len()
    }

    /// True when both buckets are empty.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.completed.is_empty()
    }

    /// The printed line for a task, using the configured deadline format.
    pub fn render_line(&self, task: &Task) -> Result<String> {
        task.render(&self.config.deadline_format)
    }

    pub fn write_tasks<W: Write>(&self, out: &mut W) -> Result<()> {
        self.write_bucket(Bucket::Active, out)
    }

    pub fn write_completed_tasks<W: Write>(&self, out: &mut W) -> Result<()> {
        self.write_bucket(Bucket::Completed, out)
    }

    /// Prints active tasks to stdout, one per line.
    pub fn print_tasks(&self) {
        self.print_bucket(Bucket::Active);
    }

    /// Prints completed tasks to stdout, one per line.
    pub fn print_completed_tasks(&self) {
        self.print_bucket(Bucket::Completed);
    }

    fn bucket(&self, bucket: Bucket) -> &BTreeSet<Task> {
        match bucket {
            Bucket::Active => &self.active,
            Bucket::Completed => &self.completed,
        }
    }

    /// Builds a task that is about to be inserted. Only insertions check past deadlines.
    fn insertable(&self, title: &str, deadline: NaiveDateTime) -> Result<Task> {
        let task = Task::create(title, deadline)?;
        if self.config.reject_past_deadlines {
            validate_deadline(deadline, Local::now().naive_local())?;
        }
        Ok(task)
    }

    fn add_task(&mut self, task: Task) -> bool {
        let reactivated = self.completed.remove(&task);
        log::debug!("add {} (reactivated: {})", task, reactivated);
        let inserted = self.active.insert(task);
        reactivated || inserted
    }

    fn remove_task(&mut self, task: &Task) -> bool {
        let bucket = if self.active.remove(task) {
            Bucket::Active
        } else if self.completed.remove(task) {
            Bucket::Completed
        } else {
            log::debug!("remove: no task matching {}", task);
            return false;
        };
        log::debug!("removed {} from {}", task, bucket);
        true
    }

    fn write_bucket<W: Write>(&self, bucket: Bucket, out: &mut W) -> Result<()> {
        for task in self.bucket(bucket) {
            writeln!(out, "{}", self.render_line(task)?)?;
        }
        Ok(())
    }

    fn print_bucket(&self, bucket: Bucket) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.write_bucket(bucket, &mut handle) {
            log::warn!("failed to print {} tasks: {}", bucket, e);
        }
    }
}
