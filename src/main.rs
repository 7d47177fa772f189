#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod pages;
mod templates;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portal_core::logging::init_logging;
use portal_core::{DisplayLocale, NavigationController, PortalConfig};

use crate::context::Startup;

/// Global startup state, set once before the window opens
static STARTUP: OnceLock<Startup> = OnceLock::new();

/// Get the startup state built from config and command line
pub fn get_startup() -> Option<Startup> {
    STARTUP.get().cloned()
}

/// Client Templates Portal - gated template gallery
#[derive(Parser, Debug)]
#[command(name = "templates-portal-desktop")]
#[command(about = "Client Templates Portal - browse curated website templates")]
struct Args {
    /// JSON config file (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Access code clients must enter
    #[arg(long, env = "PORTAL_ACCESS_CODE", hide_env_values = true)]
    access_code: Option<String>,

    /// Locale for dates (en, es)
    #[arg(short, long)]
    locale: Option<DisplayLocale>,

    /// Default log filter when RUST_LOG is not set
    #[arg(long)]
    log_level: Option<String>,
}

fn build_startup(args: Args) -> anyhow::Result<Startup> {
    let mut config =
        PortalConfig::load(args.config.as_deref()).context("failed to load configuration")?;

    if let Some(code) = args.access_code {
        config.access_code = Some(code);
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    config.validate().context("invalid configuration")?;

    let controller = NavigationController::new(
        config.access_gate()?,
        config.registry()?,
        config.location()?,
    );

    tracing::info!(
        "Portal ready with {} templates (locale {:?})",
        controller.registry().len(),
        config.locale
    );

    Ok(Startup { config, controller })
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let startup = match build_startup(args) {
        Ok(startup) => startup,
        Err(e) => {
            tracing::error!("Failed to start portal: {:#}", e);
            std::process::exit(1);
        }
    };

    // Store startup state globally
    let _ = STARTUP.set(startup);

    let window_width = 1280.0;
    let window_height = 900.0;

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Client Templates Portal")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
