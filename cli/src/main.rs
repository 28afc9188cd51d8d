//! tickboard: countdown-timer display driver.
//!
//! The real deployments feed the service from a wireless gadget link and a
//! message bus; this binary stands in for those transports by reading
//! decoded events as JSON lines on stdin, one envelope per line:
//!
//! ```text
//! {"source":"bus","type":"replace_all","timers":[{"id":"t1","expireTime":"2020-10-03T12:46:12-0600"}]}
//! {"source":"gadget","type":"set","id":"t2","expiry":1601750772.0}
//! {"source":"gadget","type":"delete","id":"t2"}
//! {"source":"gadget","type":"disconnected"}
//! ```

mod logging;
mod render;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Deserialize;
use tickboard_core::{epoch_now, AppConfig, SourceEvent, SourceId, TimerService};
use tokio::io::{AsyncBufReadExt, BufReader};

use render::ConsoleRenderer;

#[derive(Parser)]
#[command(version, about = "Countdown timer display driver")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the display service, reading event envelopes from stdin.
    Run,
    /// Seed a demo timer and watch it count down.
    Demo {
        /// Seconds until the demo timer expires.
        #[arg(short, long, default_value_t = 90)]
        seconds: u64,
    },
    /// Print the resolved configuration.
    Config,
}

/// One stdin line: which source spoke, and what it said.
#[derive(Debug, Deserialize)]
struct EventEnvelope {
    source: SourceId,
    #[serde(flatten)]
    event: SourceEvent,
}

fn build_service(config: &AppConfig) -> TimerService {
    let renderer = Arc::new(ConsoleRenderer::new(&config.display));
    TimerService::new(renderer, config.stale_grace_secs)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(config).await,
        Commands::Demo { seconds } => demo(config, seconds).await,
        Commands::Config => {
            println!("{config:#?}");
            Ok(())
        }
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let service = build_service(&config);
    tracing::info!("tickboard running, waiting for events on stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => match serde_json::from_str::<EventEnvelope>(&line) {
                        Ok(envelope) => service.handle_event(envelope.source, envelope.event),
                        Err(err) => tracing::warn!(error = %err, "ignoring malformed event line"),
                    },
                    None => {
                        tracing::info!("stdin closed");
                        break;
                    }
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!("interrupt received");
                break;
            }
        }
    }

    service.shutdown();
    // Let the refresh loop observe the signal and blank the display.
    tokio::time::sleep(Duration::from_millis(100)).await;
    Ok(())
}

async fn demo(config: AppConfig, seconds: u64) -> Result<(), Box<dyn std::error::Error>> {
    let service = build_service(&config);
    tracing::info!(seconds, "seeding demo timer");

    service.handle_event(
        SourceId::Bus,
        SourceEvent::Set {
            id: "demo".into(),
            expiry: epoch_now() + seconds as f64,
        },
    );

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    // The scheduler goes idle on its own once the timer ages past the
    // staleness grace window.
    loop {
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(500)) => {
                if !service.scheduler().is_running() {
                    break;
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!("interrupt received");
                break;
            }
        }
    }

    service.shutdown();
    tokio::time::sleep(Duration::from_millis(100)).await;
    Ok(())
}
