/// Public library interface for the Habit Tracker MCP server
///
/// This module exports the server implementation and the habit tracking
/// types so they can be used by other applications or tests.

use chrono::NaiveDate;
use thiserror::Error;

// Internal modules
mod domain;
mod session;
mod analytics;
pub mod tools;
pub mod mcp;

// Re-export public modules and types
pub use domain::*;
pub use session::{Session, SessionId};
pub use analytics::{HabitTotal, Summary};
pub use tools::ToolError;

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Habit tracker server holding the state of one client session
///
/// Nothing is persisted: habits live only as long as the session does.
pub struct HabitTrackerServer {
    session: Session,
}

impl HabitTrackerServer {
    /// Create a server with a fresh session
    ///
    /// `today` pins the day that "today" refers to; `None` follows the local clock.
    pub fn new(today: Option<NaiveDate>) -> Self {
        tracing::info!("Initializing Habit Tracker server");
        Self {
            session: Session::new(today),
        }
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method returns once stdin is closed.
    pub async fn run(self) -> Result<(), ServerError> {
        let session_id = self.session.id();
        tracing::info!(session = %session_id, "Starting MCP server...");

        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.serve(stdin, stdout).await?;

        let tracker = mcp_server.habit_tracker().session().tracker();
        tracing::info!(
            session = %session_id,
            "Session ended with {} habits (state discarded)",
            tracker.len()
        );
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}
