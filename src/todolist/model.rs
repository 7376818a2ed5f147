//! # Domain Model: Tasks and their Ordering
//!
//! A [`Task`] is an immutable `(title, deadline)` pair. Tasks are only ever produced through
//! validation, so the constructor is crate-private: callers hand raw titles and deadlines to
//! [`crate::task_list::TaskList`] and the list builds the candidate task itself.
//!
//! ## Validation
//!
//! - **Title**: must not contain a comma. The comma is the field separator of the textual line
//!   format (`"{title},{deadline}"`), so allowing it would make printed lines ambiguous.
//! - **Deadline**: any date and time is accepted. A past-deadline check exists
//!   ([`validate_deadline`]) but is only applied when the list's config asks for it.
//!
//! ## Identity and Ordering
//!
//! Equality and ordering are structural and agree with each other:
//!
//! 1. **Deadline**, ascending.
//! 2. **Title**, case-insensitive, ascending.
//!
//! Two tasks are equal exactly when both keys compare equal, so `"Buy milk"` and `"BUY MILK"`
//! due at the same instant are the same task. Because `Option<Task>` orders `None` first, a task
//! compared against the absence of a task always sorts as greater.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::fmt::{self, Write as _};

use crate::error::{Result, TodoError};

/// Separator between title and deadline in the textual line format.
pub const FIELD_SEPARATOR: char = ',';

/// Names the two collections a [`crate::task_list::TaskList`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Active,
    Completed,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Active => write!(f, "active"),
            Bucket::Completed => write!(f, "completed"),
        }
    }
}

/// The representation of a task item in a todo list.
#[derive(Debug, Clone)]
pub struct Task {
    title: String,
    deadline: NaiveDateTime,
}

impl Task {
    /// Creates a task after validating its title.
    ///
    /// Not public: the only way to obtain a `Task` from outside the crate is to read one back
    /// out of a list.
    pub(crate) fn create(title: &str, deadline: NaiveDateTime) -> Result<Self> {
        validate_title(title)?;
        Ok(Self {
            title: title.to_string(),
            deadline,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn deadline(&self) -> NaiveDateTime {
        self.deadline
    }

    /// Renders the line format using a custom `strftime` pattern for the deadline.
    ///
    /// Fails with `InvalidArgument` when the pattern is not a valid strftime pattern.
    pub fn render(&self, deadline_format: &str) -> Result<String> {
        let mut line = String::new();
        write!(
            line,
            "{}{}{}",
            self.title,
            FIELD_SEPARATOR,
            self.deadline.format(deadline_format)
        )
        .map_err(|_| invalid_format(deadline_format))?;
        Ok(line)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.title, FIELD_SEPARATOR, self.deadline)
    }
}

impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then_with(|| cmp_ignore_case(&self.title, &other.title))
    }
}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Task {}

/// Ordinal comparison over the uppercase-folded characters of both strings.
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_char).cmp(b.chars().map(fold_char))
}

/// Simple one-to-one uppercase mapping. Characters whose uppercase form expands to several
/// characters (`ß` to `SS`) are left as they are.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Rejects titles containing the field separator.
///
/// # Examples
/// ```
/// use todolist::model::validate_title;
///
/// assert!(validate_title("Water the plants").is_ok());
/// assert!(validate_title("").is_ok());
/// assert!(validate_title("eggs, milk").is_err());
/// ```
pub fn validate_title(title: &str) -> Result<()> {
    if title.contains(FIELD_SEPARATOR) {
        return Err(TodoError::InvalidArgument(
            "Title cannot contain a comma".to_string(),
        ));
    }
    Ok(())
}

/// Rejects strftime patterns chrono cannot format.
///
/// # Examples
/// ```
/// use todolist::model::validate_deadline_format;
///
/// assert!(validate_deadline_format("%Y-%m-%d %H:%M").is_ok());
/// assert!(validate_deadline_format("%Q").is_err());
/// ```
pub fn validate_deadline_format(deadline_format: &str) -> Result<()> {
    if StrftimeItems::new(deadline_format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid_format(deadline_format));
    }
    Ok(())
}

fn invalid_format(deadline_format: &str) -> TodoError {
    TodoError::InvalidArgument(format!("Invalid deadline format: {}", deadline_format))
}

/// Rejects deadlines strictly earlier than `now`.
pub fn validate_deadline(deadline: NaiveDateTime, now: NaiveDateTime) -> Result<()> {
    if deadline < now {
        return Err(TodoError::InvalidArgument(
            "Deadline cannot be in the past".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::at;

    #[test]
    fn test_create_valid_task() {
        let task = Task::create("Write report", at(2030, 1, 1, 9)).unwrap();
        assert_eq!(task.title(), "Write report");
        assert_eq!(task.deadline(), at(2030, 1, 1, 9));
    }

    #[test]
    fn test_create_rejects_comma() {
        let err = Task::create("Write, report", at(2030, 1, 1, 9)).unwrap_err();
        assert!(matches!(err, TodoError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid argument: Title cannot contain a comma");
    }

    #[test]
    fn test_create_accepts_past_deadline() {
        assert!(Task::create("Old", at(1999, 1, 1, 0)).is_ok());
    }

    #[test]
    fn test_display_format() {
        let task = Task::create("Pay rent", at(2030, 3, 1, 18)).unwrap();
        assert_eq!(task.to_string(), "Pay rent,2030-03-01 18:00:00");
    }

    #[test]
    fn test_render_custom_format() {
        let task = Task::create("Pay rent", at(2030, 3, 1, 18)).unwrap();
        assert_eq!(task.render("%d/%m/%Y").unwrap(), "Pay rent,01/03/2030");
    }

    #[test]
    fn test_render_invalid_format_is_error() {
        let task = Task::create("Pay rent", at(2030, 3, 1, 18)).unwrap();
        let err = task.render("%Q").unwrap_err();
        assert!(matches!(err, TodoError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Invalid argument: Invalid deadline format: %Q");
    }

    #[test]
    fn test_validate_deadline_format() {
        assert!(validate_deadline_format("%Y-%m-%d %H:%M:%S").is_ok());
        assert!(validate_deadline_format("due %d.%m.").is_ok());
        assert!(matches!(
            validate_deadline_format("%Y %Q"),
            Err(TodoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_orders_by_deadline_first() {
        let early = Task::create("Zebra", at(2030, 1, 1, 9)).unwrap();
        let late = Task::create("Apple", at(2030, 1, 2, 9)).unwrap();
        assert!(early < late);
    }

    #[test]
    fn test_ties_broken_by_title_ignoring_case() {
        let a = Task::create("apple", at(2030, 1, 1, 9)).unwrap();
        let b = Task::create("Banana", at(2030, 1, 1, 9)).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_equality_ignores_title_case() {
        let a = Task::create("Buy milk", at(2030, 1, 1, 9)).unwrap();
        let b = Task::create("BUY MILK", at(2030, 1, 1, 9)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_sharp_s_does_not_fold_to_double_s() {
        let sharp = Task::create("straße", at(2030, 1, 1, 9)).unwrap();
        let double = Task::create("STRASSE", at(2030, 1, 1, 9)).unwrap();
        assert_ne!(sharp, double);
        assert_ne!(
            Task::create("ß", at(2030, 1, 1, 9)).unwrap(),
            Task::create("SS", at(2030, 1, 1, 9)).unwrap()
        );
        assert_eq!(
            Task::create("Straße", at(2030, 1, 1, 9)).unwrap(),
            Task::create("STRAßE", at(2030, 1, 1, 9)).unwrap()
        );
    }

    #[test]
    fn test_different_deadline_not_equal() {
        let a = Task::create("Buy milk", at(2030, 1, 1, 9)).unwrap();
        let b = Task::create("Buy milk", at(2030, 1, 1, 10)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_task_sorts_after_absence() {
        let task = Task::create("Anything", at(2030, 1, 1, 9)).unwrap();
        assert!(Some(task) > None);
    }

    #[test]
    fn test_validate_deadline() {
        let now = at(2030, 6, 1, 12);
        assert!(validate_deadline(at(2030, 6, 1, 12), now).is_ok());
        assert!(validate_deadline(at(2031, 1, 1, 0), now).is_ok());
        assert!(matches!(
            validate_deadline(at(2030, 6, 1, 11), now),
            Err(TodoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bucket_display() {
        assert_eq!(Bucket::Active.to_string(), "active");
        assert_eq!(Bucket::Completed.to_string(), "completed");
    }
}
