//! CLI entry point for the disc golf index tool.
//!
//! Scores recorded weather snapshots and reports a 1–5 index for how good a
//! day it is to play.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use discgolf_index::config::{LoggingConfig, ScoringConfig};
use discgolf_index::output::{print_json, print_pretty, summary};
use discgolf_index::scoring::ladder::{
    AIR_QUALITY_LADDER, PRECIPITATION_LADDER, TEMPERATURE_LADDER, WIND_LADDER,
};
use discgolf_index::source::{FileSource, Location, fetch_golf_index, fetch_snapshot};
use discgolf_index::{Activity, DiscGolf};
use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "discgolf-index")]
#[command(about = "Rate today's disc golf conditions from weather data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the index for one or more recorded weather snapshots
    Score {
        /// JSON snapshot files
        #[arg(value_name = "SNAPSHOT", required = true)]
        snapshots: Vec<String>,

        /// Postal code the snapshots were recorded for
        #[arg(short, long, default_value = "86001")]
        postal_code: String,

        /// Compare to the provider's existing ball golf index
        #[arg(short, long, default_value_t = false)]
        golf: bool,

        /// Also log the full report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Maximum number of snapshots scored at once
        #[arg(short, long, default_value_t = 4)]
        concurrency: usize,
    },
    /// Show the threshold ladders used for each category
    Ladders,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging(&LoggingConfig::from_env())?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            snapshots,
            postal_code,
            golf,
            json,
            concurrency,
        } => {
            score_snapshots(snapshots, &postal_code, golf, json, concurrency).await?;
        }
        Commands::Ladders => log_ladders(),
    }

    Ok(())
}

/// Colored stderr logging plus a JSON rolling log file.
fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let log_file_path = Path::new(&config.log_file_path);
    let log_dir = log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("discgolf_index.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

/// Scores every snapshot concurrently and fails if any of them failed.
#[tracing::instrument(skip(snapshots, golf, json), fields(snapshot_count = snapshots.len()))]
async fn score_snapshots(
    snapshots: Vec<String>,
    postal_code: &str,
    golf: bool,
    json: bool,
    concurrency: usize,
) -> Result<()> {
    let location = Location::postal_code(postal_code)?;
    let activity = Arc::new(DiscGolf::new(ScoringConfig::from_env()));
    let semaphore = Arc::new(tokio::sync::Semaphore::new(concurrency.max(1)));

    let mut tasks = Vec::with_capacity(snapshots.len());

    for path in snapshots {
        let sem = semaphore.clone();
        let activity = activity.clone();
        let location = location.clone();
        let source = FileSource::new(&path);

        let span = tracing::info_span!("score_snapshot", snapshot = %path);

        let task = tokio::spawn(
            async move {
                let _permit = sem.acquire().await?;
                score_one(activity.as_ref(), &source, &location, golf, json).await
            }
            .instrument(span),
        );

        tasks.push((path, task));
    }

    let total = tasks.len();
    let mut failed = 0usize;

    // Wait for all tasks to complete
    for (path, task) in tasks {
        match task.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                error!(snapshot = %path, error = ?e, "Snapshot scoring failed");
                failed += 1;
            }
            Err(e) => {
                error!(snapshot = %path, error = %e, "Scoring task did not complete");
                failed += 1;
            }
        }
    }

    info!(total, failed, "Finished scoring snapshots");

    if failed > 0 {
        anyhow::bail!("{failed} of {total} snapshots could not be scored");
    }
    Ok(())
}

async fn score_one(
    activity: &dyn Activity,
    source: &FileSource,
    location: &Location,
    golf: bool,
    json: bool,
) -> Result<()> {
    let started = Instant::now();

    let snapshot = fetch_snapshot(source, location).await?;
    let report = activity.compute_index(&snapshot).with_context(|| {
        format!(
            "no {} index for {}",
            activity.name(),
            source.path().display()
        )
    })?;

    info!(
        activity = activity.name(),
        index = report.index.value(),
        excluded = report.excluded.len(),
        "{}",
        summary(&report)
    );
    print_pretty(&report);
    if json {
        print_json(&report)?;
    }

    if golf {
        match fetch_golf_index(source, location).await {
            Ok(Some(index)) => info!(golf_index = index, "Existing golf index shows {index}"),
            Ok(None) => warn!("Golf index response has no current index"),
            Err(e) => warn!(error = %e, "Golf index unavailable"),
        }
    }

    let elapsed = started.elapsed();
    if elapsed.as_millis() > 500 {
        warn!(elapsed_secs = elapsed.as_secs_f64(), "Snapshot scoring was slow");
    }

    Ok(())
}

fn log_ladders() {
    for (max, score) in WIND_LADDER {
        info!(category = "wind", "<= {max} mph -> {score}");
    }
    info!(category = "wind", "otherwise -> 1");

    for (min, max, score) in TEMPERATURE_LADDER {
        info!(category = "temperature", "{min}..={max} F -> {score}");
    }
    info!(category = "temperature", "otherwise -> 1");

    for (max, score) in PRECIPITATION_LADDER {
        info!(category = "precipitation", "<= {max} in -> {score}");
    }
    info!(category = "precipitation", "> 1.3 in -> 1");
    info!(category = "precipitation", "missing -> 5");

    for (min, score) in AIR_QUALITY_LADDER {
        info!(category = "air quality", "> {min} AQI -> {score}");
    }
    info!(category = "air quality", "otherwise -> 5");
}
