// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Nutrition targets attached to a plan or profile.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Daily macro targets. Any of them may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NutritionTarget {
    #[serde(default)]
    pub calorie_target: Option<f64>,
    #[serde(default)]
    pub protein_target: Option<f64>,
    #[serde(default)]
    pub carb_target: Option<f64>,
    #[serde(default)]
    pub fat_target: Option<f64>,
}

impl NutritionTarget {
    /// True when no target is set at all.
    pub fn is_empty(&self) -> bool {
        self.calorie_target.is_none()
            && self.protein_target.is_none()
            && self.carb_target.is_none()
            && self.fat_target.is_none()
    }
}
