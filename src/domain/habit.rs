/// Habit entity and its completion record
///
/// A habit is identified by its name and remembers every calendar day on
/// which it was marked done.

use std::collections::BTreeSet;
use chrono::NaiveDate;

/// A habit the user wants to do regularly
///
/// The name is fixed at creation. Done days form a set, so marking the same
/// day twice has no further effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    /// Display name and unique key within a tracker (e.g., "Exercise")
    name: String,
    /// Every day this habit was completed
    done_days: BTreeSet<NaiveDate>,
}

impl Habit {
    /// Create a habit with no completed days
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            done_days: BTreeSet::new(),
        }
    }

    /// The habit's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record a completion for `day`
    pub fn mark_done(&mut self, day: NaiveDate) {
        if self.done_days.insert(day) {
            tracing::debug!("Marked '{}' done on {}", self.name, day);
        }
    }

    /// Remove the completion for `day`, if there is one
    pub fn unmark_done(&mut self, day: NaiveDate) {
        if self.done_days.remove(&day) {
            tracing::debug!("Unmarked '{}' on {}", self.name, day);
        }
    }

    /// Check whether the habit was completed on `day`
    pub fn is_done(&self, day: NaiveDate) -> bool {
        self.done_days.contains(&day)
    }

    /// Number of distinct days this habit has been completed, across all time
    pub fn count_done(&self) -> usize {
        self.done_days.len()
    }
}
