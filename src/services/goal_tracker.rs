// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal lifecycle: progress updates, percent complete, status and urgency.

use crate::config::EngineConfig;
use crate::db::GoalStore;
use crate::error::{EngineError, Result};
use crate::models::{Goal, GoalProgressUpdate, GoalStatus, NewGoal, Urgency};
use crate::time_utils::days_between;
use chrono::NaiveDate;

/// Applies progress updates and status changes to goals.
///
/// Every operation takes a goal snapshot and returns a new one; the input is
/// never modified.
#[derive(Debug, Clone)]
pub struct GoalProgressTracker {
    urgency_window_days: i64,
    max_update_retries: u32,
}

impl Default for GoalProgressTracker {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl GoalProgressTracker {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            urgency_window_days: config.urgency_window_days,
            max_update_retries: config.max_update_retries,
        }
    }

    /// Percent of the way from `initial` to `target`, clamped to 0..=100.
    ///
    /// Works for decreasing goals (weight loss) and increasing ones
    /// (strength). Equal initial and target values give 0.
    pub fn compute_progress(initial: f64, current: f64, target: f64) -> f64 {
        let progress = if target < initial {
            (initial - current) / (initial - target) * 100.0
        } else if target > initial {
            (current - initial) / (target - initial) * 100.0
        } else {
            return 0.0;
        };

        if progress.is_finite() {
            progress.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// Build a new active goal, completing it immediately if the current
    /// value already meets the target.
    pub fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        if new_goal.id.trim().is_empty() {
            return Err(EngineError::InvalidGoal("id must not be empty".to_string()));
        }

        let current_value = new_goal.current_value.unwrap_or(new_goal.initial_value);
        for (name, value) in [
            ("initial_value", new_goal.initial_value),
            ("target_value", new_goal.target_value),
            ("current_value", current_value),
        ] {
            if !value.is_finite() {
                return Err(EngineError::InvalidGoal(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }

        if let Some(target_date) = new_goal.target_date {
            if target_date < new_goal.start_date {
                return Err(EngineError::InvalidGoal(format!(
                    "target date {} is before start date {}",
                    target_date, new_goal.start_date
                )));
            }
        }

        let progress =
            Self::compute_progress(new_goal.initial_value, current_value, new_goal.target_value);
        let status = if progress >= 100.0 {
            GoalStatus::Completed
        } else {
            GoalStatus::Active
        };

        tracing::debug!(
            goal_id = %new_goal.id,
            goal_type = ?new_goal.goal_type,
            progress,
            status = %status,
            "Created goal"
        );

        Ok(Goal {
            id: new_goal.id,
            goal_type: new_goal.goal_type,
            initial_value: new_goal.initial_value,
            current_value,
            target_value: new_goal.target_value,
            unit: new_goal.unit,
            start_date: new_goal.start_date,
            target_date: new_goal.target_date,
            status,
            progress,
            history: Vec::new(),
            version: 0,
        })
    }

    /// Record a progress update and return the updated goal.
    ///
    /// The update becomes the goal's current value. Reaching 100% moves the
    /// goal to `Completed`.
    pub fn add_progress_update(&self, goal: &Goal, update: GoalProgressUpdate) -> Result<Goal> {
        if goal.status.is_terminal() {
            return Err(EngineError::GoalClosed(goal.status));
        }
        if !update.value.is_finite() {
            return Err(EngineError::InvalidProgressValue(format!(
                "value must be a finite number, got {}",
                update.value
            )));
        }

        let mut next = goal.clone();
        next.current_value = update.value;
        next.history.push(update);
        next.progress =
            Self::compute_progress(next.initial_value, next.current_value, next.target_value);
        next.version += 1;

        if next.progress >= 100.0 {
            next.status = GoalStatus::Completed;
            tracing::info!(
                goal_id = %next.id,
                current_value = next.current_value,
                target_value = next.target_value,
                "Goal completed"
            );
        }

        tracing::debug!(
            goal_id = %next.id,
            progress = next.progress,
            history_len = next.history.len(),
            version = next.version,
            "Applied progress update"
        );

        Ok(next)
    }

    /// Explicitly move a goal to `status`.
    ///
    /// Only active goals can change status. Asking an active goal to stay
    /// active returns it unchanged.
    pub fn change_status(&self, goal: &Goal, status: GoalStatus) -> Result<Goal> {
        if goal.status.is_terminal() {
            if goal.status == status {
                return Ok(goal.clone());
            }
            return Err(EngineError::InvalidTransition {
                from: goal.status,
                to: status,
            });
        }
        if status == GoalStatus::Active {
            return Ok(goal.clone());
        }

        let mut next = goal.clone();
        next.status = status;
        next.version += 1;

        tracing::info!(
            goal_id = %next.id,
            from = %goal.status,
            to = %status,
            "Goal status changed"
        );

        Ok(next)
    }

    /// Time left before `target_date`, as seen on `today`.
    pub fn urgency(&self, target_date: Option<NaiveDate>, today: NaiveDate) -> Urgency {
        let Some(target_date) = target_date else {
            return Urgency::InProgress;
        };

        match days_between(today, target_date) {
            d if d < 0 => Urgency::Overdue,
            0 => Urgency::DueToday,
            1 => Urgency::DueTomorrow,
            d if d < self.urgency_window_days => Urgency::DaysLeft(d),
            _ => Urgency::OnTrack,
        }
    }

    pub fn goal_urgency(&self, goal: &Goal, today: NaiveDate) -> Urgency {
        self.urgency(goal.target_date, today)
    }

    /// Create a goal and store it.
    pub fn register_goal<S: GoalStore + ?Sized>(
        &self,
        store: &S,
        new_goal: NewGoal,
    ) -> Result<Goal> {
        let goal = self.create_goal(new_goal)?;
        store.insert_goal(&goal)?;
        Ok(goal)
    }

    /// Load a goal, apply `update` and save it back.
    ///
    /// If another writer saved the goal in between, the update is re-applied
    /// to the fresh copy, up to `max_update_retries` times.
    pub fn submit_progress_update<S: GoalStore + ?Sized>(
        &self,
        store: &S,
        goal_id: &str,
        update: GoalProgressUpdate,
    ) -> Result<Goal> {
        for attempt in 0..=self.max_update_retries {
            let goal = store
                .load_goal(goal_id)?
                .ok_or_else(|| EngineError::GoalNotFound(goal_id.to_string()))?;

            let next = self.add_progress_update(&goal, update.clone())?;
            if store.save_goal_if_version(&next, goal.version)? {
                return Ok(next);
            }

            tracing::debug!(
                goal_id,
                attempt,
                stale_version = goal.version,
                "Progress update lost a race, retrying"
            );
        }

        tracing::warn!(
            goal_id,
            retries = self.max_update_retries,
            "Giving up on progress update after repeated conflicts"
        );
        Err(EngineError::VersionConflict {
            goal_id: goal_id.to_string(),
            retries: self.max_update_retries,
        })
    }
}
