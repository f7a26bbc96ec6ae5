// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the engine.

pub mod entry;
pub mod goal;
pub mod macros;
pub mod plan;
pub mod reference;
pub mod target;

pub use entry::{LoggedEntry, MealSlot};
pub use goal::{
    Goal, GoalProgressUpdate, GoalStatus, GoalType, NewGoal, ProgressUpdateInput, RawNumber,
    Urgency,
};
pub use macros::{Macros, NormalizedMacros};
pub use plan::{MealPlan, PlanDay};
pub use reference::{Food, PositiveAmount, Recipe, ReferenceItem, ReferenceKind};
pub use target::NutritionTarget;
