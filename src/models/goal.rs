// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Athlete goals and their progress log.

use crate::error::{EngineError, Result};
use crate::time_utils::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// What kind of value a goal tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Weight,
    Strength,
    Measurement,
    Activity,
}

/// Goal lifecycle state. `Completed` and `Abandoned` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    Completed,
    Abandoned,
}

impl GoalStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GoalStatus::Active)
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalStatus::Active => f.write_str("active"),
            GoalStatus::Completed => f.write_str("completed"),
            GoalStatus::Abandoned => f.write_str("abandoned"),
        }
    }
}

/// One entry in a goal's append-only progress log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalProgressUpdate {
    pub value: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GoalProgressUpdate {
    /// Build an update, rejecting a non-finite value.
    pub fn new(value: f64, date: NaiveDate, notes: Option<String>) -> Result<Self> {
        if !value.is_finite() {
            return Err(EngineError::InvalidProgressValue(format!(
                "value must be a finite number, got {}",
                value
            )));
        }
        Ok(Self {
            value,
            date,
            notes: notes.filter(|n| !n.trim().is_empty()),
        })
    }
}

/// A number as submitted by a form: either JSON number or numeric text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

/// Unvalidated progress update as received from the presentation layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressUpdateInput {
    #[serde(default)]
    pub value: Option<RawNumber>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<ProgressUpdateInput> for GoalProgressUpdate {
    type Error = EngineError;

    fn try_from(input: ProgressUpdateInput) -> Result<Self> {
        let value = match input.value {
            Some(RawNumber::Number(v)) => v,
            Some(RawNumber::Text(text)) => text.trim().parse::<f64>().map_err(|_| {
                EngineError::InvalidProgressValue(format!("value {:?} is not a number", text))
            })?,
            None => {
                return Err(EngineError::InvalidProgressValue(
                    "value is required".to_string(),
                ))
            }
        };

        let raw_date = input
            .date
            .ok_or_else(|| EngineError::InvalidProgressValue("date is required".to_string()))?;
        let date = parse_date(&raw_date).ok_or_else(|| {
            EngineError::InvalidProgressValue(format!("date {:?} is not a valid date", raw_date))
        })?;

        GoalProgressUpdate::new(value, date, input.notes)
    }
}

/// A tracked athlete goal with its cached progress.
///
/// `current_value`, `progress` and `status` are only changed through the
/// goal tracker; `version` is bumped on every mutation so storage can detect
/// lost updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Goal {
    pub id: String,
    pub goal_type: GoalType,
    pub initial_value: f64,
    pub current_value: f64,
    pub target_value: f64,
    pub unit: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    pub status: GoalStatus,
    /// Percent complete, always within 0..=100
    pub progress: f64,
    #[serde(default)]
    pub history: Vec<GoalProgressUpdate>,
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub version: u64,
}

impl Goal {
    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }
}

/// Parameters for creating a goal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewGoal {
    pub id: String,
    pub goal_type: GoalType,
    pub initial_value: f64,
    pub target_value: f64,
    /// Defaults to `initial_value`
    #[serde(default)]
    pub current_value: Option<f64>,
    pub unit: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

/// Display classification of the time left before a goal's target date.
///
/// Independent of [`GoalStatus`]: an overdue goal is still active until
/// someone completes or abandons it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Urgency {
    InProgress,
    Overdue,
    DueToday,
    DueTomorrow,
    DaysLeft(i64),
    OnTrack,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::InProgress => f.write_str("in progress"),
            Urgency::Overdue => f.write_str("overdue"),
            Urgency::DueToday => f.write_str("due today"),
            Urgency::DueTomorrow => f.write_str("due tomorrow"),
            Urgency::DaysLeft(days) => write!(f, "{} days left", days),
            Urgency::OnTrack => f.write_str("on track"),
        }
    }
}

impl From<Urgency> for String {
    fn from(urgency: Urgency) -> String {
        urgency.to_string()
    }
}
