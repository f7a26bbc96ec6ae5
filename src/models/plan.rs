// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Instructor-assigned meal plans.

use crate::models::{LoggedEntry, NutritionTarget};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A multi-day meal plan with a shared daily target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MealPlan {
    pub id: String,
    #[serde(default)]
    pub target: NutritionTarget,
    pub days: Vec<PlanDay>,
}

/// One day of a plan. `consumed_at` on planned entries is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlanDay {
    /// 1-based day number within the plan
    pub day: u32,
    pub entries: Vec<LoggedEntry>,
}
