//! `touch-canvas` command line
//!
//! Replays a recorded pointer trace through the classifier and the painter,
//! printing each gesture as one JSON object per line and a summary at the end.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use touch_canvas::input::TraceReplay;
use touch_canvas::recorder::GestureTrace;
use touch_canvas::{AppConfig, CanvasApp};

/// Gesture recognition and sprite painting over recorded pointer traces
#[derive(Parser, Debug)]
#[command(name = "touch-canvas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a recorded trace and print the gestures it produces
    Replay {
        /// Trace file written by the recorder
        trace: PathBuf,

        /// Config file path (overrides the thresholds stored in the trace)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Sleep between samples to reproduce the recorded timing
        #[arg(long)]
        paced: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    touch_canvas::init_tracing();
    tracing::info!("Starting touch-canvas v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Commands::Replay {
            trace,
            config,
            paced,
        } => replay(trace, config, paced).await,
    }
}

async fn replay(trace_path: PathBuf, config_path: Option<PathBuf>, paced: bool) -> anyhow::Result<()> {
    let mut config = AppConfig::load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;
    let trace = GestureTrace::load(&trace_path)
        .with_context(|| format!("Failed to load trace {}", trace_path.display()))?;

    // Without an explicit config, replay with the thresholds it was recorded under
    if config_path.is_none() {
        if let Some(recorded) = trace.config {
            config.gesture = recorded;
        }
    }

    let mut app = CanvasApp::new(&config).context("Invalid configuration")?;
    let mut source = TraceReplay::new(trace.samples).paced(paced);
    let stats = app.run(&mut source).await;

    for event in app.events() {
        println!("{}", serde_json::to_string(&event)?);
    }

    let painted = app.painter().lock().owned_count();
    println!(
        "{}",
        serde_json::json!({ "summary": stats, "spritesOnCanvas": painted })
    );

    Ok(())
}
