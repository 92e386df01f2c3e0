mod args;

use anyhow::Context;
use clap::Parser;
use cropkit::{init_logging_with, Config, CropSession, SessionEvent};
use std::path::Path;
use tracing::{info, warn};

use crate::args::Args;

fn read_events(path: &Path) -> anyhow::Result<Vec<SessionEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid event log {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging_with(args.log_format())?;
    info!("CropKit {} (built {})", cropkit::VERSION, cropkit::BUILD_DATE);

    let config = Config::load_or_default(args.config.as_deref())?;
    let events = read_events(&args.events)?;
    info!("Replaying {} events", events.len());

    let mut session = CropSession::new(config.session_options());
    match session.replay(&events)? {
        Some(region) => println!("{}", serde_json::to_string(&region)?),
        None => warn!("Event log never confirmed a crop"),
    }

    Ok(())
}
