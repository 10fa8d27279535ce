//! Fitness Tracker demo
//!
//! Seeds a handful of records, then walks through the reporting layer:
//! - Recent stats snapshot logged as JSON
//! - Every chart handed to the tracing renderer
//! - One CSV file per data type in the configured export directory

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use fitness_tracker::{
    config::AppConfig,
    services::{ChartKind, DataType, TracingChartRenderer},
    state::AppState,
};
use fitness_tracker_shared::Macros;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        output_dir = %config.export.output_dir,
        "Starting Fitness Tracker"
    );

    let mut state = AppState::new(config);
    seed(&mut state, Local::now().date_naive())?;

    let reporting = state.reporting();

    let stats = reporting.view_recent_stats();
    info!(stats = %serde_json::to_string(&stats)?, "Recent stats");

    let mut renderer = TracingChartRenderer::new();
    let goal_chart = ChartKind::GoalProgress("weight_loss".to_string());
    for kind in ChartKind::STANDARD.iter().chain(std::iter::once(&goal_chart)) {
        // Failures are logged by the façade; a skipped chart is not fatal
        let _ = reporting.render_chart(kind, &mut renderer);
    }
    info!(charts = renderer.rendered().len(), "Charts rendered");
    reporting.reset_visualizations(&mut renderer);

    let writer = state.csv_writer();
    let mut exported = 0;
    for data_type in DataType::ALL {
        match reporting.export_data_csv(data_type.tag(), &writer) {
            Ok(_) => exported += 1,
            // Already logged by the façade
            Err(e) if e.is_notice() => {}
            Err(e) => return Err(e.into()),
        }
    }
    info!(exported, "Exports finished");

    info!("Done");
    Ok(())
}

/// Fill the trackers with a week of sample records ending on `today`
fn seed(state: &mut AppState, today: NaiveDate) -> Result<()> {
    let days_ago = |n: i64| today - Duration::days(n);

    let workouts = state.workouts_mut();
    workouts.add_workout("Morning Run", 30.0, 320.0, Some(days_ago(6)));
    workouts.add_workout("Strength Training", 45.0, 280.0, Some(days_ago(4)));
    workouts.add_workout("Yoga", 40.0, 150.0, Some(days_ago(4)));
    workouts.add_workout("Cycling", 60.0, 540.0, Some(days_ago(1)));

    let nutrition = state.nutrition_mut();
    nutrition.add_meal("Oatmeal", 350.0, Macros::new(12.0, 6.0, 60.0));
    nutrition.add_meal("Chicken Salad", 520.0, Macros::new(42.0, 18.0, 30.0));
    nutrition.add_meal("Salmon with Rice", 680.0, Macros::new(38.0, 22.0, 70.0));

    let health = state.health_mut();
    for (n, weight) in [(6, 82.4), (4, 82.0), (1, 81.5)] {
        health.log_weight(weight, days_ago(n));
    }
    health.log_height(1.80, days_ago(6));
    for (hour, rate) in [(7, 62.0), (12, 78.0), (18, 71.0)] {
        if let Some(time) = today.and_hms_opt(hour, 0, 0) {
            health.log_heart_rate(rate, time);
        }
    }

    let goals = state.goals_mut();
    goals.set_goal("weight_loss", 5.0);
    goals.update_goal_progress("weight_loss", 0.9)?;
    goals.set_deadline("weight_loss", today + Duration::days(60))?;
    goals.set_goal("weekly_minutes", 150.0);
    goals.update_goal_progress("weekly_minutes", 175.0)?;

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter().into());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.json_logs() {
        // JSON lines for log aggregation
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
