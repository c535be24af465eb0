//! Event roster entry point.

use std::process::ExitCode;

use app::config::Config;
use app::error::AppError;
use app::{build_roster, telemetry};

fn run() -> Result<(), AppError> {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    telemetry::init_tracing(&config)?;
    tracing::debug!(?config, "configuration loaded");

    // 2. Build the roster and its views
    let roster = build_roster(&config)?;

    // 3. Report what the views show
    let event = roster.event_view.display();
    tracing::info!(
        event = %event.name,
        date = %event.date,
        venue = %event.venue,
        start_time = %event.start_time,
        "current event"
    );
    for row in roster.directory.rows() {
        tracing::info!(
            index = row.index,
            name = %row.name,
            attendance = %row.attendance,
            tags = ?row.tags,
            "person"
        );
    }
    tracing::info!(
        persons = roster.book.len(),
        present = roster.directory.present_count(),
        "roster ready"
    );

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("event-roster: {err}");
            ExitCode::FAILURE
        }
    }
}
