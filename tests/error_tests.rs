// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use macrotrack::models::{GoalStatus, Macros, MealSlot, ReferenceItem};
use macrotrack::EngineError;

#[test]
fn test_validation_errors() {
    let err = ReferenceItem::food("f", Macros::new(100.0, 1.0, 1.0, 1.0), 0.0).unwrap_err();
    assert!(matches!(err, EngineError::InvalidServing(_)));
    assert!(err.is_validation_error());

    let err = ReferenceItem::recipe("r", Macros::new(-5.0, 1.0, 1.0, 1.0), 2.0).unwrap_err();
    assert!(err.is_validation_error());

    let err = "brunch".parse::<MealSlot>().unwrap_err();
    assert!(matches!(err, EngineError::UnknownMealSlot(ref s) if s == "brunch"));
    assert!(err.is_validation_error());
}

#[test]
fn test_state_errors_are_not_validation_errors() {
    let cases = [
        EngineError::GoalClosed(GoalStatus::Completed),
        EngineError::InvalidTransition {
            from: GoalStatus::Abandoned,
            to: GoalStatus::Active,
        },
        EngineError::GoalNotFound("g1".to_string()),
        EngineError::VersionConflict {
            goal_id: "g1".to_string(),
            retries: 5,
        },
        EngineError::from(anyhow::anyhow!("connection reset")),
    ];

    for err in cases {
        assert!(!err.is_validation_error(), "{} misclassified", err);
    }
}

#[test]
fn test_error_messages() {
    let err = EngineError::GoalClosed(GoalStatus::Abandoned);
    assert_eq!(
        err.to_string(),
        "Goal is abandoned and no longer accepts progress updates"
    );

    let err = EngineError::from(anyhow::anyhow!("connection reset"));
    assert_eq!(err.to_string(), "Storage error: connection reset");
}
