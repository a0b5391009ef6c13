use std::path::PathBuf;

use evening_core::{
    Catalog, DurationBucket, PlanEvening, PlanForm, PlannerBuilder, PlannerError,
};
use tempfile::TempDir;

/// Helper function to create a temporary directory and catalog path
fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let catalog_path = temp_dir.path().join("catalog.json");
    (temp_dir, catalog_path)
}

fn casual_params() -> PlanEvening {
    PlanEvening {
        category: "casual".to_string(),
        start: Some("2024-01-02T19:00".to_string()),
        budget: Some("100".to_string()),
        location: Some("Downtown".to_string()),
        activities: vec!["coffee".to_string(), "movie".to_string(), "park".to_string()],
        ..Default::default()
    }
}

#[test]
fn test_complete_planning_workflow() {
    let planner = PlannerBuilder::new()
        .builtin_only()
        .build()
        .expect("Failed to create planner");

    let itinerary = planner.plan(&casual_params()).expect("Failed to plan");

    assert_eq!(itinerary.entries.len(), 2);
    assert_eq!(itinerary.entries[0].activity_id, "movie");
    assert_eq!(itinerary.entries[0].time_label, "7:00 PM");
    assert_eq!(itinerary.entries[1].activity_id, "park");
    assert_eq!(itinerary.entries[1].time_label, "9:00 PM");
    assert!(itinerary.entries.iter().all(|e| e.budget == 50));
    assert_eq!(
        itinerary.tips,
        [
            "Focus on activities that encourage interaction",
            "Keep it relaxed and low-pressure",
            "Try something new together",
            "Be flexible with timing",
        ]
    );

    let output = itinerary.to_string();
    assert!(output.contains("### 7:00 PM: 🎬 Movie"));
    assert!(output.contains("📍 Downtown | 💰 Budget: $50 | 👔 Casual"));
    assert!(output.contains("## 💡 Tips for Your Casual"));
}

#[test]
fn test_plan_with_longer_duration() {
    let planner = PlannerBuilder::new().builtin_only().build().unwrap();
    let params = PlanEvening {
        duration: Some(DurationBucket::Long),
        ..casual_params()
    };

    let itinerary = planner.plan(&params).unwrap();
    assert_eq!(itinerary.entries.len(), 3);
    assert_eq!(itinerary.entries[2].activity_id, "coffee");
    assert_eq!(itinerary.entries[2].time_label, "11:00 PM");
    assert!(itinerary.entries.iter().all(|e| e.budget == 33));
}

#[test]
fn test_plan_validation_errors() {
    let planner = PlannerBuilder::new().builtin_only().build().unwrap();

    let missing = PlanEvening {
        budget: None,
        ..casual_params()
    };
    let err = planner.plan(&missing).unwrap_err();
    assert!(matches!(err, PlannerError::MissingField { .. }));
    assert!(err.is_validation());

    let none_selected = PlanEvening {
        activities: vec![],
        ..casual_params()
    };
    let err = planner.plan(&none_selected).unwrap_err();
    assert!(matches!(err, PlannerError::NoActivitiesSelected));

    let unknown = PlanEvening {
        category: "brunch".to_string(),
        ..casual_params()
    };
    let err = planner.plan(&unknown).unwrap_err();
    assert!(matches!(err, PlannerError::UnknownCategory { .. }));
    assert!(!err.is_validation());
}

#[test]
fn test_form_reset_after_planning() {
    let planner = PlannerBuilder::new().builtin_only().build().unwrap();
    let mut form = PlanForm::try_from(&casual_params()).unwrap();

    let first = planner.generate(&form.submit().unwrap()).unwrap();
    assert_eq!(first.entries.len(), 2);

    form.reset();
    assert!(form.selected().is_empty());
    assert_eq!(form.category, "first-date");
    assert!(matches!(
        form.submit(),
        Err(PlannerError::MissingField { .. })
    ));
}

#[test]
fn test_custom_catalog_file() {
    let (_temp_dir, catalog_path) = create_test_environment();
    std::fs::write(
        &catalog_path,
        r#"{
            "activities": [
                {"id": "karaoke", "icon": "🎤", "label": "Karaoke"},
                {"id": "dinner", "icon": "🍽️", "label": "Dinner"}
            ],
            "categories": [
                {"id": "romantic", "suggestions": ["dinner"], "tips": ["Sing a duet"]}
            ]
        }"#,
    )
    .unwrap();

    let planner = PlannerBuilder::new()
        .with_catalog_path(Some(&catalog_path))
        .build()
        .expect("Failed to load catalog");
    assert_eq!(planner.catalog().activities().len(), 2);

    let params = PlanEvening {
        category: "romantic".to_string(),
        start: Some("2024-02-14T20:00".to_string()),
        budget: Some("80".to_string()),
        location: Some("Midtown".to_string()),
        activities: vec!["dinner".to_string(), "karaoke".to_string()],
        ..Default::default()
    };
    let itinerary = planner.plan(&params).unwrap();

    assert_eq!(itinerary.entries[0].activity_id, "karaoke");
    assert_eq!(
        itinerary.entries[0].description,
        "Enjoy quality time together with this activity."
    );
    assert!(itinerary.entries[1]
        .description
        .contains("romantic restaurant"));
    assert_eq!(itinerary.tips, ["Sing a duet"]);
}

#[test]
fn test_missing_catalog_file() {
    let (_temp_dir, catalog_path) = create_test_environment();

    let err = PlannerBuilder::new()
        .with_catalog_path(Some(&catalog_path))
        .build()
        .unwrap_err();
    assert!(matches!(err, PlannerError::FileSystem { ref path, .. } if path == &catalog_path));
}

#[test]
fn test_builtin_catalog_round_trips_through_json() {
    let (_temp_dir, catalog_path) = create_test_environment();
    let json = serde_json::to_string_pretty(&Catalog::builtin()).unwrap();
    std::fs::write(&catalog_path, json).unwrap();

    let loaded = Catalog::from_path(&catalog_path).unwrap();
    assert_eq!(loaded, Catalog::builtin());
}
