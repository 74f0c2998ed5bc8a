/// Domain module containing the core habit tracking model
///
/// This module defines the Habit and HabitTracker types plus the helpers the
/// tool layer uses to validate user input before it reaches them.

pub mod habit;
pub mod tracker;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use tracker::*;
pub use types::*;

use thiserror::Error;

/// Errors raised while validating input for the domain layer
#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
