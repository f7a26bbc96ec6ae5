// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Comparison of macro totals against nutrition targets.

use crate::db::ReferenceCatalog;
use crate::models::{Macros, MealPlan, NutritionTarget};
use crate::services::macro_calculator::MacroCalculator;
use crate::services::meal_aggregator::{DayTotals, MealAggregator};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One macro's total next to its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MacroComparison {
    pub total: f64,
    pub target: Option<f64>,
    /// Percent of target reached, within 0..=100
    pub percent: f64,
    /// Amount still to eat; `None` when there is no target
    pub remaining: Option<f64>,
}

/// All four macros compared independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlanComparisonResult {
    pub calories: MacroComparison,
    pub protein: MacroComparison,
    pub carbs: MacroComparison,
    pub fat: MacroComparison,
}

/// Comparison for a single plan day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DayComparison {
    pub day: u32,
    pub totals: DayTotals,
    pub comparison: PlanComparisonResult,
}

/// Comparison for a whole meal plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MealPlanComparison {
    pub plan_id: String,
    pub days: Vec<DayComparison>,
    /// Mean daily macros across all plan days
    pub daily_average: Macros,
    pub average_comparison: PlanComparisonResult,
    /// False when the plan sets no target at all, so percentages are
    /// meaningless
    pub has_targets: bool,
    pub unresolved_count: u32,
}

/// Compares totals against targets.
pub struct PlanComparator;

impl PlanComparator {
    /// Percent of `target` that `total` reaches, clamped to 0..=100.
    ///
    /// An unset, zero, negative or non-finite target gives 0.
    pub fn percent_of_target(total: f64, target: Option<f64>) -> f64 {
        match target {
            Some(t) if t.is_finite() && t > 0.0 && total.is_finite() => {
                (total / t * 100.0).clamp(0.0, 100.0)
            }
            _ => 0.0,
        }
    }

    /// What is left to reach `target`, never negative.
    pub fn remaining(total: f64, target: Option<f64>) -> Option<f64> {
        target
            .filter(|t| t.is_finite())
            .map(|t| (t - total).max(0.0))
    }

    pub fn compare_macro(total: f64, target: Option<f64>) -> MacroComparison {
        MacroComparison {
            total,
            target,
            percent: Self::percent_of_target(total, target),
            remaining: Self::remaining(total, target),
        }
    }

    /// Compare each macro with its own target; a missing target only
    /// affects that macro.
    pub fn compare(totals: &Macros, target: &NutritionTarget) -> PlanComparisonResult {
        PlanComparisonResult {
            calories: Self::compare_macro(totals.calories, target.calorie_target),
            protein: Self::compare_macro(totals.protein, target.protein_target),
            carbs: Self::compare_macro(totals.carbs, target.carb_target),
            fat: Self::compare_macro(totals.fat, target.fat_target),
        }
    }

    /// Normalize, aggregate and compare every day of `plan`.
    pub fn compare_plan<C: ReferenceCatalog + ?Sized>(
        plan: &MealPlan,
        catalog: &C,
    ) -> MealPlanComparison {
        let days: Vec<DayComparison> = plan
            .days
            .iter()
            .map(|plan_day| {
                let normalized = MacroCalculator::normalize_all(&plan_day.entries, catalog);
                let totals = MealAggregator::aggregate_by_day(&normalized);
                let comparison = Self::compare(&totals.macros, &plan.target);
                DayComparison {
                    day: plan_day.day,
                    totals,
                    comparison,
                }
            })
            .collect();

        let unresolved_count: u32 = days.iter().map(|d| d.totals.unresolved_count).sum();
        if unresolved_count > 0 {
            tracing::warn!(
                plan_id = %plan.id,
                unresolved_count,
                "Meal plan references missing catalog items"
            );
        }

        let daily_average = if days.is_empty() {
            Macros::ZERO
        } else {
            MealAggregator::sum_days(days.iter().map(|d| &d.totals))
                .scaled(1.0 / days.len() as f64)
        };

        let has_targets = !plan.target.is_empty();
        if !has_targets {
            tracing::debug!(plan_id = %plan.id, "Meal plan has no nutrition targets");
        }

        MealPlanComparison {
            plan_id: plan.id.clone(),
            average_comparison: Self::compare(&daily_average, &plan.target),
            days,
            daily_average,
            has_targets,
            unresolved_count,
        }
    }
}
