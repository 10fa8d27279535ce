//! Integration tests for the reporting façade

mod common;

use common::{day, TestApp};
use fitness_tracker::services::{ChartKind, TracingChartRenderer};
use fitness_tracker_shared::{ChartStyle, Macros, TrackerError};

#[test]
fn test_recent_stats_snapshot() {
    let app = TestApp::seeded();
    let stats = app.state.reporting().view_recent_stats();

    assert_eq!(stats.workouts.total_workouts, 3);
    assert_eq!(stats.workouts.total_duration, 135.0);
    assert_eq!(stats.workouts.total_calories, 1200.0);
    assert_eq!(stats.nutrition.daily_calories, 870.0);
    assert_eq!(stats.nutrition.macros, Macros::new(54.0, 24.0, 90.0));
    assert_eq!(stats.health.as_ref().map(|w| w.weight), Some(79.4));
    assert_eq!(stats.goals.len(), 2);
}

#[test]
fn test_recent_stats_serializes_to_json() {
    let app = TestApp::seeded();
    let stats = app.state.reporting().view_recent_stats();

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["workouts"]["total_workouts"], 3);
    assert_eq!(json["goals"]["weight_loss"]["progress"], 2.0);
    assert_eq!(json["health"]["date"], "2024-03-03");
}

#[test]
fn test_snapshot_tracks_later_mutations() {
    let mut app = TestApp::seeded();
    app.state.workouts_mut().remove_workout(1).unwrap();
    app.state.health_mut().reset_metrics();

    let stats = app.state.reporting().view_recent_stats();
    assert_eq!(stats.workouts.total_workouts, 2);
    assert!(stats.health.is_none());
}

#[test]
fn test_weekly_summary_chart() {
    let app = TestApp::seeded();
    let chart = app.state.reporting().weekly_summary_chart().unwrap();

    assert_eq!(chart.style, ChartStyle::Bar);
    assert_eq!(chart.labels, vec![day(1).to_string(), day(2).to_string()]);
    assert_eq!(chart.values, vec![75.0, 60.0]);
    assert_eq!(chart.total(), 135.0);
}

#[test]
fn test_heart_rate_chart_labels_are_timestamps() {
    let app = TestApp::seeded();
    let chart = app.state.reporting().heart_rate_chart().unwrap();

    assert_eq!(chart.labels, vec!["2024-03-01 07:00:00", "2024-03-01 18:30:00"]);
    assert_eq!(chart.values, vec![60.0, 80.0]);
}

#[test]
fn test_empty_state_charts() {
    let app = TestApp::empty();
    let reporting = app.state.reporting();

    for kind in ChartKind::STANDARD.iter().filter(|k| **k != ChartKind::Macronutrients) {
        let err = reporting.build_chart(kind).unwrap_err();
        assert!(matches!(err, TrackerError::EmptyData(_)), "{} should be empty", kind);
    }
    assert!(reporting.macronutrient_chart().is_ok());
}

#[test]
fn test_render_every_standard_chart() {
    let app = TestApp::seeded();
    let reporting = app.state.reporting();
    let mut renderer = TracingChartRenderer::new();

    for kind in &ChartKind::STANDARD {
        reporting.render_chart(kind, &mut renderer).unwrap();
    }
    reporting
        .render_chart(&ChartKind::GoalProgress("weight_loss".to_string()), &mut renderer)
        .unwrap();

    assert_eq!(renderer.rendered().len(), ChartKind::STANDARD.len() + 1);
    assert_eq!(renderer.rendered()[6], "Goal Progress for weight_loss");

    reporting.reset_visualizations(&mut renderer);
    assert!(renderer.rendered().is_empty());
}

#[test]
fn test_goal_chart_for_unknown_goal() {
    let app = TestApp::seeded();
    let mut renderer = TracingChartRenderer::new();

    let err = app
        .state
        .reporting()
        .render_chart(&ChartKind::GoalProgress("sleep".to_string()), &mut renderer)
        .unwrap_err();
    assert!(err.is_notice());
    assert_eq!(err.code(), "INVALID_INPUT");
    assert!(renderer.rendered().is_empty());
}
