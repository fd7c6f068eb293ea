//! Courseplan demo driver.
//!
//! Walks the wizard end to end from a JSON input file: loads courses,
//! breaks, and preferences, submits a generation request to the solver
//! service, and prints each candidate schedule with its CRN listing.
//!
//! # Usage
//!
//! ```bash
//! SOLVER_URL=http://localhost:9000/generate \
//!   cargo run --bin courseplan-wizard -- input.json
//! ```
//!
//! # Environment Variables
//!
//! - `SOLVER_URL`: Full URL of the solver's generation endpoint (required)
//! - `SOLVER_TIMEOUT_SECS`: Request timeout (default: 30)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use serde::Deserialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use courseplan::models::input::{BreakPeriod, Course, Preferences};
use courseplan::models::time::display_from_anchor;
use courseplan::services::crn::format_clipboard;
use courseplan::solver::{HttpSolverClient, SolverConfig};
use courseplan::wizard::{self, Wizard, WizardStep};

/// Input file shape: the state a user would have entered step by step.
#[derive(Debug, Deserialize)]
struct WizardInput {
    courses: Vec<Course>,
    #[serde(default)]
    breaks: Vec<BreakPeriod>,
    #[serde(default)]
    preferences: Preferences,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: courseplan-wizard <input.json>"))?;
    let input: WizardInput = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    info!(
        courses = input.courses.len(),
        breaks = input.breaks.len(),
        "loaded wizard input"
    );

    let config = SolverConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let client = HttpSolverClient::new(&config)?;

    let mut wizard = Wizard::new();
    wizard.courses = input.courses;
    wizard.breaks = input.breaks;
    wizard.preferences = input.preferences;
    wizard.advance();
    wizard.advance();

    wizard::generate(&mut wizard, &client).await;

    if wizard.step() != WizardStep::Results {
        if let Some(failure) = wizard.error() {
            anyhow::bail!("generation failed: {}", failure);
        }
        anyhow::bail!("generation did not produce results");
    }

    let total = wizard.carousel().len();
    info!(count = total, "schedules generated");

    for position in 0..total {
        println!("schedule {}/{}", position + 1, total);
        for event in wizard.carousel().current() {
            println!(
                "  {} {} - {}  [{}]",
                event.start.format("%a"),
                display_from_anchor(event.start),
                display_from_anchor(event.end),
                event.title,
            );
        }
        println!("  CRNs:");
        for line in format_clipboard(&wizard.current_crns()).lines() {
            println!("    {}", line);
        }
        wizard.carousel_mut().next();
    }

    Ok(())
}
