//! visit-report: print the patient visit aggregation report.
//!
//! Connects to the database named by `DATABASE_URL` and runs the fixed
//! Neurology visit report query. Read-only, no arguments.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use triage_server::config::Config;
use triage_server::db;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let pool = db::create_pool(&config.database_url).expect("Failed to create database pool");

    let rows = db::report::fetch_visit_report(&pool)
        .await
        .expect("Visit report query failed");

    if rows.is_empty() {
        println!("No qualifying visits.");
        return;
    }

    println!(
        "{:<24} {:>4}  {:<12} {:>8}",
        "name", "age", "visit_date", "symptoms"
    );
    for row in &rows {
        println!(
            "{:<24} {:>4}  {:<12} {:>8}",
            row.name,
            row.age,
            row.visit_date.to_string(),
            row.symptom_count
        );
    }
}
