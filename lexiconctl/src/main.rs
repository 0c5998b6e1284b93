mod app;
mod cli;
mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let load = app::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Browse(args) => commands::browse(&load, args).await,
        Command::Favorite { action } => commands::favorite(&load, action).await,
        Command::Prefs { action } => commands::prefs(&load, action),
        Command::Config { action } => commands::config(&load, action),
    }
}
