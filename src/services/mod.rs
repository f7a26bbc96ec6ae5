// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod goal_tracker;
pub mod macro_calculator;
pub mod meal_aggregator;
pub mod plan_comparator;

pub use goal_tracker::GoalProgressTracker;
pub use macro_calculator::{MacroCalculator, NormalizedEntry};
pub use meal_aggregator::{DayTotals, MealAggregator, MealTotals};
pub use plan_comparator::{
    DayComparison, MacroComparison, MealPlanComparison, PlanComparator, PlanComparisonResult,
};
