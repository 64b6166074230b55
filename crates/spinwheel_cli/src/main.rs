//! CLI entry point for headless onboarding spins.
//!
//! # Responsibility
//! - Walk the onboarding wizard from flags and spin the wheel without a UI.
//! - Drive time with fixed frames so output is deterministic under `--seed`.

use clap::Parser;
use spinwheel_core::{
    init_logging, tip_catalog, Category, OnboardingService, RngSliceSource, WheelConfig,
    WorkContext,
};
use std::error::Error;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "spinwheel", version, about = "Spin the wellness wheel from the terminal")]
struct Cli {
    /// Category chosen on step 2.
    #[arg(long, default_value = "Sleep")]
    category: String,

    /// Work context chosen on step 3 (`onshore|offshore`); omitted skips it.
    #[arg(long)]
    context: Option<String>,

    /// Seed for reproducible draws.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of consecutive spins.
    #[arg(long, default_value_t = 1)]
    spins: u32,

    /// Absolute directory for rolling log files; logging stays off without it.
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level used with `--log-dir`.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Simulated frame length in milliseconds.
    #[arg(long, default_value_t = 100)]
    frame_ms: u64,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("spinwheel: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(&cli.log_level, log_dir)?;
    }

    let category = Category::from_label(&cli.category)?;
    let context = cli
        .context
        .as_deref()
        .map(WorkContext::from_label)
        .transpose()?;
    let source = match cli.seed {
        Some(seed) => RngSliceSource::seeded(seed),
        None => RngSliceSource::from_entropy(),
    };

    let catalog = tip_catalog()?;
    let mut session = OnboardingService::new(catalog, WheelConfig::default(), source)?;
    session.next_step();
    session.choose_category(category);
    session.next_step();
    match context {
        Some(context) => session.choose_context(context),
        None => session.skip_context(),
    };

    let frame = Duration::from_millis(cli.frame_ms.max(1));
    for spin in 1..=cli.spins {
        session.spin()?;
        let outcome = loop {
            if let Some(outcome) = session.advance(frame)? {
                break outcome;
            }
        };
        println!(
            "spin={spin} chosen={} landed={} rotation={:.3} tip={}",
            outcome.chosen, outcome.landed, outcome.final_rotation_degrees, outcome.tip_text
        );
    }
    Ok(())
}
