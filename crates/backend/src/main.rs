use std::path::PathBuf;
use std::sync::Arc;

use backend::app::run_board;
use backend::shared::{config, logger, status_registry::STATUS_REGISTRY};

const USAGE: &str = "usage: status-board <records.csv> [config.toml]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(records_path) = args.next().map(PathBuf::from) else {
        anyhow::bail!(USAGE);
    };

    let loaded = match args.next() {
        Some(path) => config::load_config_from(&PathBuf::from(path))?,
        None => config::load_config()?,
    };

    logger::init(&loaded.config.logging)?;
    tracing::info!("Using configuration: {}", loaded.source);

    let board = run_board(&records_path, &loaded.config, Arc::clone(&STATUS_REGISTRY)).await?;

    println!("{}", serde_json::to_string_pretty(&board)?);
    Ok(())
}
