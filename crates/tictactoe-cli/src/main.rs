//! Console tic-tac-toe for two players sharing a terminal.

use clap::Parser;
use std::io;
use tictactoe_core::Game;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod console;

use config::Config;
use console::Console;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout belongs to the board
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::parse();
    info!(?config, "Starting tic-tac-toe");

    let mut game = Game::new(config.size);
    {
        let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
        console.play(&mut game)?;
    }

    if config.json {
        println!("{}", game.to_json()?);
    }

    Ok(())
}
