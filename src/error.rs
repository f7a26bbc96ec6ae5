// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engine error types.

use crate::models::GoalStatus;

/// Errors surfaced by the nutrition and goal engine.
///
/// Unresolved catalog references are deliberately absent: they degrade to
/// flagged zero macros instead of failing a whole day's aggregation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Unknown meal slot: {0:?}")]
    UnknownMealSlot(String),

    #[error("Invalid serving basis: {0}")]
    InvalidServing(String),

    #[error("Invalid progress update: {0}")]
    InvalidProgressValue(String),

    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    #[error("Cannot change goal status from {from} to {to}")]
    InvalidTransition { from: GoalStatus, to: GoalStatus },

    #[error("Goal is {0} and no longer accepts progress updates")]
    GoalClosed(GoalStatus),

    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    #[error("Goal {goal_id} was modified concurrently (gave up after {retries} retries)")]
    VersionConflict { goal_id: String, retries: u32 },

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl EngineError {
    /// Whether the error came from validating caller input, as opposed to
    /// state or storage problems.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidQuantity(_)
                | EngineError::UnknownMealSlot(_)
                | EngineError::InvalidServing(_)
                | EngineError::InvalidProgressValue(_)
                | EngineError::InvalidGoal(_)
        )
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
