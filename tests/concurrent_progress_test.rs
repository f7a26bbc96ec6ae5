// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use macrotrack::db::{GoalStore, InMemoryGoalStore};
use macrotrack::models::{GoalProgressUpdate, GoalStatus, GoalType, NewGoal};
use macrotrack::services::GoalProgressTracker;
use macrotrack::EngineConfig;
use std::sync::Arc;

mod common;
use common::date;

const NUM_CONCURRENT_UPDATES: u64 = 16;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_progress_updates_are_not_lost() {
    // Every task loads the same goal, appends one update and saves with a
    // version check. If a stale read-modify-write were accepted, one of the
    // updates would disappear from the history.
    common::init();

    let config = EngineConfig {
        max_update_retries: 1000,
        ..EngineConfig::default()
    };
    let tracker = Arc::new(GoalProgressTracker::new(&config));
    let store = InMemoryGoalStore::new();

    tracker
        .register_goal(
            &store,
            NewGoal {
                id: "race".to_string(),
                goal_type: GoalType::Measurement,
                initial_value: 100.0,
                target_value: 0.0,
                current_value: None,
                unit: "cm".to_string(),
                start_date: date(2024, 1, 1),
                target_date: None,
            },
        )
        .expect("Failed to register goal");

    let mut handles = vec![];
    for i in 0..NUM_CONCURRENT_UPDATES {
        let tracker = tracker.clone();
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let update = GoalProgressUpdate::new(
                99.0 - i as f64,
                date(2024, 2, 1),
                Some(format!("update {}", i)),
            )?;
            tracker.submit_progress_update(&store, "race", update)
        }));
    }

    for handle in handles {
        handle
            .await
            .expect("Task join failed")
            .expect("Progress update failed");
    }

    let goal = store
        .load_goal("race")
        .expect("Failed to load goal")
        .expect("Goal missing");

    assert_eq!(
        goal.history.len() as u64,
        NUM_CONCURRENT_UPDATES,
        "Progress updates lost to a race"
    );
    assert_eq!(goal.version, NUM_CONCURRENT_UPDATES);
    assert_eq!(goal.status, GoalStatus::Active);

    let last = goal.history.last().expect("history is not empty");
    assert_eq!(goal.current_value, last.value);

    let mut notes: Vec<_> = goal
        .history
        .iter()
        .filter_map(|u| u.notes.clone())
        .collect();
    notes.sort();
    notes.dedup();
    assert_eq!(notes.len() as u64, NUM_CONCURRENT_UPDATES);
}
