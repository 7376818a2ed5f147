//! Test fixtures for arranging task lists.

use crate::task_list::TaskList;
use chrono::{NaiveDate, NaiveDateTime};

/// Builds a deadline at the top of the given hour.
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .expect("valid fixture date")
}

pub struct TaskListFixture {
    pub list: TaskList,
}

impl Default for TaskListFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListFixture {
    pub fn new() -> Self {
        Self {
            list: TaskList::new(),
        }
    }

    pub fn with_task(mut self, title: &str, deadline: NaiveDateTime) -> Self {
        self.list.add(title, deadline).unwrap();
        self
    }

    pub fn with_completed_task(mut self, title: &str, deadline: NaiveDateTime) -> Self {
        self.list.add(title, deadline).unwrap();
        self.list.complete_task(title, deadline).unwrap();
        self
    }
}
