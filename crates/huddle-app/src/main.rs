//! Huddle replay client.
//!
//! # Usage
//!
//! ```bash
//! # Replay a recorded session at 60 fps
//! huddle --replay match.ndjson
//!
//! # Read messages from stdin with reproducible dice
//! tail -f match.ndjson | huddle --seed 42 --log-level debug
//! ```

use std::path::PathBuf;

use clap::Parser;
use huddle_app::{LogSceneDirector, LogSoundEngine, MainView, ReplayDriver, Runtime, RuntimeConfig};
use huddle_client::Controller;
use huddle_dice::{RollConfig, RollSynthesizer};
use rand::{SeedableRng, rngs::StdRng};
use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Huddle client
#[derive(Parser, Debug)]
#[command(name = "huddle")]
#[command(about = "Replay a Huddle server message stream through the client core")]
#[command(version)]
struct Args {
    /// NDJSON file of server messages (stdin if omitted)
    #[arg(short, long)]
    replay: Option<PathBuf>,

    /// Render ticks per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Frames per dice roll animation
    #[arg(long, default_value_t = RollConfig::DEFAULT_FRAME_COUNT)]
    frames: usize,

    /// Seed for dice animations (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    tracing::info!("Huddle client starting");

    let roll = RollConfig::new(args.frames, RollConfig::DEFAULT_FORCE)?.with_frame_rate(args.fps);
    let rng = match args.seed {
        Some(seed) => {
            tracing::info!(seed, "seeded dice");
            StdRng::seed_from_u64(seed)
        },
        None => StdRng::from_entropy(),
    };

    let view = MainView::new(RollSynthesizer::new(roll), rng);
    let config = RuntimeConfig::with_fps(args.fps);

    match args.replay {
        Some(path) => {
            tracing::info!(path = %path.display(), "replaying file");
            let file = tokio::fs::File::open(&path).await?;
            replay(BufReader::new(file), view, config).await
        },
        None => {
            tracing::info!("replaying stdin");
            replay(BufReader::new(tokio::io::stdin()), view, config).await
        },
    }
}

async fn replay<R>(reader: R, view: MainView, config: RuntimeConfig) -> Result<(), Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
{
    let driver = ReplayDriver::new(reader, config.tick_interval);
    let controller = Controller::new(Box::new(LogSoundEngine::default()), Box::new(LogSceneDirector));

    let summary = Runtime::new(driver, controller, view, config).run().await?;
    tracing::info!(?summary, "replay finished");
    Ok(())
}
