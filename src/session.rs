/// Per-connection session context
///
/// A session is created once when a client connects and is handed to every
/// tool call explicitly. It owns the tracker for the lifetime of the session.

use std::fmt;
use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::domain::HabitTracker;

/// Unique identifier for a session, used to tag log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// State held for one user for as long as they stay connected
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    tracker: HabitTracker,
    /// Fixed "today", when configured; otherwise the local calendar date is used
    pinned_today: Option<NaiveDate>,
}

impl Session {
    /// Start a session with an empty tracker
    pub fn new(pinned_today: Option<NaiveDate>) -> Self {
        let id = SessionId::new();
        tracing::info!(session = %id, "Session started");
        Self {
            id,
            tracker: HabitTracker::new(),
            pinned_today,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn tracker(&self) -> &HabitTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut HabitTracker {
        &mut self.tracker
    }

    /// The day that "today" refers to for this session
    pub fn today(&self) -> NaiveDate {
        self.pinned_today
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
