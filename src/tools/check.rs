/// Tool for ticking a habit off for a day
///
/// This module implements the habit_check MCP tool. Like a checkbox, it sets
/// the completion state for one day to the given value.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::session::Session;
use crate::tools::{resolve_day, ToolError};

/// Parameters for checking or unchecking a habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CheckHabitParams {
    /// Exact name of the habit
    pub name: String,
    /// True to mark the day done, false to clear it
    pub done: bool,
    /// Day in YYYY-MM-DD format (defaults to today)
    pub date: Option<String>,
}

/// Response from checking a habit
#[derive(Debug)]
pub struct CheckHabitResponse {
    pub day: NaiveDate,
    pub done: bool,
    pub total_done: usize,
    pub message: String,
}

/// Set whether a habit was done on a day
pub fn check_habit(
    session: &mut Session,
    params: CheckHabitParams,
) -> Result<CheckHabitResponse, ToolError> {
    let day = resolve_day(session, params.date.as_deref())?;

    let habit = session
        .tracker_mut()
        .get_mut(&params.name)
        .ok_or_else(|| ToolError::HabitNotFound { name: params.name.clone() })?;

    if params.done {
        habit.mark_done(day);
    } else {
        habit.unmark_done(day);
    }

    let total_done = habit.count_done();
    let message = if params.done {
        format!("✅ '{}' done on {} ({} total)", habit.name(), day, total_done)
    } else {
        format!("⬜ '{}' not done on {} ({} total)", habit.name(), day, total_done)
    };

    Ok(CheckHabitResponse {
        day,
        done: habit.is_done(day),
        total_done,
        message,
    })
}
