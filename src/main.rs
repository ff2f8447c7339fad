//! # Starbase Bridge
//!
//! Bridge StarbaseSim rocket telemetry to render-ready dashboard view models.
//!
//! Reads newline-delimited JSON telemetry snapshots on stdin, projects each
//! into a booster/ship view-model frame, and writes one JSON frame per
//! snapshot to stdout. Transport and rendering live outside this process:
//! whatever tails the simulator feed pipes in, whatever draws the dashboard
//! reads the frames back out.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, Duration};
use tracing::{debug, info, warn};

use starbase_bridge::clock::MissionClock;
use starbase_bridge::config::Config;
use starbase_bridge::telemetry::projector::{project, TelemetryFrame};
use starbase_bridge::telemetry::record::decode_snapshot;

/// Emitted wrapper: one projected frame plus its clock readings.
#[derive(Debug, Serialize)]
struct EmittedFrame {
    /// Wall-clock time the frame was emitted, unix milliseconds
    timestamp_ms: i64,

    /// Mission clock display string at emission time
    mission_time: String,

    #[serde(flatten)]
    frame: TelemetryFrame,
}

/// Main entry point for the Starbase Bridge
///
/// Initializes logging and configuration, then runs the main loop:
///
/// 1. Each stdin line is one telemetry snapshot; it is decoded, projected
///    into a view-model frame and written to stdout as one JSON line.
///    Snapshots are applied strictly in arrival order and each frame fully
///    replaces the previous one.
/// 2. A configurable interval logs the mission clock.
/// 3. Ctrl+C (or the feed closing) shuts the loop down cleanly.
///
/// # Errors
///
/// Returns error if the configuration file cannot be loaded or stdin fails.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; frames go to stdout, diagnostics to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starbase Bridge v{} starting...", env!("CARGO_PKG_VERSION"));

    // Optional config file path as the only argument; defaults otherwise
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    let clock = MissionClock::new(config.mission.countdown_s);
    let started = std::time::Instant::now();
    let mut clock_interval = interval(Duration::from_millis(config.output.clock_interval_ms));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Reading telemetry snapshots from stdin");
    info!("Press Ctrl+C to exit");

    let mut frame_count: u64 = 0;

    // Main loop
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => {
                        let records = match decode_snapshot(&line) {
                            Ok(records) => records,
                            Err(e) => {
                                warn!("Dropping snapshot: {e}");
                                continue;
                            }
                        };

                        let emitted = EmittedFrame {
                            timestamp_ms: Utc::now().timestamp_millis(),
                            mission_time: clock.display(started.elapsed().as_secs() as i64),
                            frame: project(&records),
                        };

                        let json = if config.output.pretty {
                            serde_json::to_string_pretty(&emitted)?
                        } else {
                            serde_json::to_string(&emitted)?
                        };
                        println!("{json}");

                        frame_count += 1;
                        debug!("Projected frame {frame_count}");
                    }
                    None => {
                        info!("Telemetry feed closed, {frame_count} frames projected");
                        break;
                    }
                }
            }

            _ = clock_interval.tick() => {
                info!("{}", clock.display(started.elapsed().as_secs() as i64));
            }

            // Handle Ctrl+C for graceful shutdown
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                info!("Total frames projected: {frame_count}");
                break;
            }
        }
    }

    Ok(())
}
