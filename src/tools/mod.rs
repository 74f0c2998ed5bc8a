/// MCP tools for habit management
///
/// Each tool corresponds to one control a user interacts with: adding a
/// habit, removing one, ticking it off for a day, and viewing the lists.
/// Tools validate input and report outcomes; the tracker itself stays silent.

pub mod add;
pub mod remove;
pub mod check;
pub mod list;
pub mod summary;

// Re-export tool functions for easy access
pub use add::*;
pub use remove::*;
pub use check::*;
pub use list::*;
pub use summary::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{parse_day, DomainError};
use crate::session::Session;

/// Errors reported back to the client as failed tool calls
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("No habit named '{name}'")]
    HabitNotFound { name: String },
}

/// Resolve an optional `YYYY-MM-DD` argument, defaulting to the session's today
fn resolve_day(session: &Session, date: Option<&str>) -> Result<NaiveDate, ToolError> {
    match date {
        Some(s) => Ok(parse_day(s)?),
        None => Ok(session.today()),
    }
}
