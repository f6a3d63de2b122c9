#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Startup options, set once from the command line.
static STARTUP: OnceLock<Startup> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct Startup {
    /// Page key to open instead of the landing page
    pub page: Option<String>,
    /// Disable reveal, tilt, and cursor effects
    pub reduced_motion: bool,
}

/// Get the startup options (defaults when launched without args).
pub fn startup() -> Startup {
    STARTUP.get().cloned().unwrap_or_default()
}

/// The Eternal Codex - sacred archive of the Celestial Dominion
#[derive(Parser, Debug)]
#[command(name = "codex-desktop")]
#[command(about = "The Eternal Codex - fan wiki reader")]
struct Args {
    /// Page key to open at startup (e.g. "aurifex")
    #[arg(short, long)]
    page: Option<String>,

    /// Disable reveal animations and pointer effects
    #[arg(long)]
    reduced_motion: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let _ = STARTUP.set(Startup {
        page: args.page,
        reduced_motion: args.reduced_motion,
    });

    tracing::info!("Welcome to The Eternal Codex");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("The Eternal Codex")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 850.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
