/// Tool for listing habits with their state for a day
///
/// This module implements the habit_list MCP tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::analytics::{HabitTotal, Summary};
use crate::session::Session;
use crate::tools::{resolve_day, ToolError};

/// Parameters for listing habits
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListHabitsParams {
    /// Day in YYYY-MM-DD format (defaults to today)
    pub date: Option<String>,
}

/// Response from listing habits
#[derive(Debug)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitTotal>,
    pub message: String,
}

/// List every habit in display order with whether it was done on the day
pub fn list_habits(
    session: &Session,
    params: ListHabitsParams,
) -> Result<ListHabitsResponse, ToolError> {
    let day = resolve_day(session, params.date.as_deref())?;
    let summary = Summary::compute(session.tracker(), day);

    let message = if summary.per_habit.is_empty() {
        "No habits to track. Add some first.".to_string()
    } else {
        let lines = summary.per_habit.iter()
            .map(|h| format!("{} {}", if h.done_today { "[x]" } else { "[ ]" }, h.name))
            .collect::<Vec<_>>()
            .join("\n");
        format!("📋 **Habits for {}**\n\n{}", day, lines)
    };

    Ok(ListHabitsResponse {
        habits: summary.per_habit,
        message,
    })
}
