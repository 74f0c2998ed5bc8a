/// Tool for summarizing completion totals
///
/// This module implements the habit_summary MCP tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::analytics::Summary;
use crate::session::Session;
use crate::tools::{resolve_day, ToolError};

/// Parameters for the summary
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct SummaryParams {
    /// Day in YYYY-MM-DD format (defaults to today)
    pub date: Option<String>,
}

/// Summarize totals and render them for display
pub fn get_summary(
    session: &Session,
    params: SummaryParams,
) -> Result<(Summary, String), ToolError> {
    let day = resolve_day(session, params.date.as_deref())?;
    let summary = Summary::compute(session.tracker(), day);

    let mut message = format!(
        "📊 **Summary for {}**\n- Total habits: {}\n- Completed: {}",
        day, summary.total_habits, summary.completed_on_day
    );

    if !summary.per_habit.is_empty() {
        message.push_str("\n\nTotal completions per habit:");
        for habit in &summary.per_habit {
            message.push_str(&format!("\n- {}: {}", habit.name, habit.total_done));
        }
    }

    Ok((summary, message))
}
