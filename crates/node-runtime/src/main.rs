//! # Verifier Runtime
//!
//! Reads frames from stdin until EOF, verifies them, and writes one verdict
//! line per frame to stdout. Logs go to stderr.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialize logging with the configured filter
//! 3. Read frames from stdin, bounded per frame and in total
//! 4. Dispatch all frames, print verdicts in input order

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use verifier_runtime::{read_frames, Outcome, Pipeline, RuntimeConfig};

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env().context("Invalid runtime configuration")?;

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter {:?}", config.log_level))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!(?config, "configuration loaded");

    let frames = read_frames(
        io::stdin().lock(),
        config.max_frame_bytes,
        config.max_input_bytes,
    )
    .context("Malformed frame stream")?;
    let body_bytes: usize = frames.iter().map(|frame| frame.body.len()).sum();
    info!(frames = frames.len(), body_bytes, "input received");

    let pipeline = Pipeline::new(&config);
    let outcomes = pipeline.process_all(&frames);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for outcome in &outcomes {
        writeln!(out, "{outcome}").context("Failed to write verdict")?;
    }
    out.flush().context("Failed to flush stdout")?;

    let passed = outcomes.iter().filter(|o| **o == Outcome::Pass).count();
    info!(passed, total = outcomes.len(), "verification complete");

    Ok(())
}
