/// Tool for adding habits
///
/// This module implements the habit_add MCP tool.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domain::validate_habit_name;
use crate::session::Session;
use crate::tools::ToolError;

/// Parameters for adding a habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddHabitParams {
    /// Name of the habit (e.g., "Exercise")
    pub name: String,
}

/// Response from adding a habit
#[derive(Debug)]
pub struct AddHabitResponse {
    /// False when the habit was already tracked
    pub added: bool,
    pub message: String,
}

/// Add a habit to the session's tracker
pub fn add_habit(
    session: &mut Session,
    params: AddHabitParams,
) -> Result<AddHabitResponse, ToolError> {
    let name = validate_habit_name(&params.name)?;

    let tracker = session.tracker_mut();
    if tracker.contains(name) {
        return Ok(AddHabitResponse {
            added: false,
            message: format!("'{}' is already tracked", name),
        });
    }

    tracker.add(name);

    Ok(AddHabitResponse {
        added: true,
        message: format!("✅ Added habit '{}'", name),
    })
}
