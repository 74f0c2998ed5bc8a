/// Tool for removing habits
///
/// This module implements the habit_remove MCP tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::session::Session;
use crate::tools::ToolError;

/// Parameters for removing a habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RemoveHabitParams {
    /// Exact name of the habit to remove
    pub name: String,
}

/// Response from removing a habit
#[derive(Debug)]
pub struct RemoveHabitResponse {
    pub message: String,
}

/// Remove a habit and all of its completions
pub fn remove_habit(
    session: &mut Session,
    params: RemoveHabitParams,
) -> Result<RemoveHabitResponse, ToolError> {
    let tracker = session.tracker_mut();
    if !tracker.contains(&params.name) {
        return Err(ToolError::HabitNotFound { name: params.name });
    }

    tracker.remove(&params.name);

    Ok(RemoveHabitResponse {
        message: format!("🗑️ Removed habit '{}'", params.name),
    })
}
