// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use macrotrack::db::InMemoryCatalog;
use macrotrack::models::{
    GoalType, LoggedEntry, Macros, MealSlot, NewGoal, ReferenceItem, ReferenceKind,
};

/// Install the test subscriber so `RUST_LOG=debug cargo test` shows engine logs.
#[allow(dead_code)]
pub fn init() {
    macrotrack::telemetry::init_test_logging();
}

/// Catalog with a few foods (per 100 g) and a four-serving recipe.
#[allow(dead_code)]
pub fn test_catalog() -> InMemoryCatalog {
    [
        ReferenceItem::food("chicken", Macros::new(165.0, 31.0, 0.0, 3.6), 100.0)
            .expect("valid food")
            .with_name("Chicken breast"),
        ReferenceItem::food("rice", Macros::new(130.0, 2.7, 28.0, 0.3), 100.0)
            .expect("valid food")
            .with_name("White rice, cooked"),
        ReferenceItem::food("oats", Macros::new(389.0, 16.9, 66.3, 6.9), 100.0)
            .expect("valid food"),
        ReferenceItem::recipe("chili", Macros::new(1200.0, 96.0, 110.0, 40.0), 4.0)
            .expect("valid recipe")
            .with_name("Turkey chili"),
    ]
    .into_iter()
    .collect()
}

#[allow(dead_code)]
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(dead_code)]
pub fn food_entry(
    id: &str,
    food_id: &str,
    grams: f64,
    slot: MealSlot,
    consumed_at: DateTime<Utc>,
) -> LoggedEntry {
    LoggedEntry::new(id, ReferenceKind::Food, food_id, grams, slot, consumed_at)
        .expect("valid entry")
}

#[allow(dead_code)]
pub fn recipe_entry(
    id: &str,
    recipe_id: &str,
    servings: f64,
    slot: MealSlot,
    consumed_at: DateTime<Utc>,
) -> LoggedEntry {
    LoggedEntry::new(id, ReferenceKind::Recipe, recipe_id, servings, slot, consumed_at)
        .expect("valid entry")
}

#[allow(dead_code)]
pub fn weight_loss_goal(id: &str) -> NewGoal {
    NewGoal {
        id: id.to_string(),
        goal_type: GoalType::Weight,
        initial_value: 85.0,
        target_value: 75.0,
        current_value: None,
        unit: "kg".to_string(),
        start_date: date(2024, 1, 1),
        target_date: Some(date(2024, 6, 30)),
    }
}
