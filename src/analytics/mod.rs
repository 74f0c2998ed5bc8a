/// Aggregate completion counts across a tracker
///
/// This module turns the tracker's per-habit records into the totals shown
/// to the user: how many habits exist, how many were done on a given day,
/// and how often each one has been done overall.

use chrono::NaiveDate;

use crate::domain::HabitTracker;

/// Total completions for one habit
#[derive(Debug, Clone, PartialEq)]
pub struct HabitTotal {
    pub name: String,
    pub done_today: bool,
    pub total_done: usize,
}

/// Totals for a tracker as seen from one day
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub day: NaiveDate,
    pub total_habits: usize,
    pub completed_on_day: usize,
    /// One entry per habit, in display order
    pub per_habit: Vec<HabitTotal>,
}

impl Summary {
    /// Compute totals for every habit in `tracker`, relative to `day`
    pub fn compute(tracker: &HabitTracker, day: NaiveDate) -> Self {
        let per_habit: Vec<HabitTotal> = tracker
            .get_all()
            .into_iter()
            .map(|habit| HabitTotal {
                name: habit.name().to_string(),
                done_today: habit.is_done(day),
                total_done: habit.count_done(),
            })
            .collect();

        let completed_on_day = per_habit.iter().filter(|h| h.done_today).count();

        Self {
            day,
            total_habits: per_habit.len(),
            completed_on_day,
            per_habit,
        }
    }
}
