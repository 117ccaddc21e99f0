//! filterpane - search filter panels in the terminal
//!
//! This is the binary entry point. Panel logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use filterpane_app::config::{init_config_dir, load_settings};
use filterpane_app::{AppState, SearchDomain};
use filterpane_core::prelude::*;
use filterpane_core::{logging, parse_assignment, SearchParams};

/// filterpane - search filter panels bound to a shared parameters object
#[derive(Parser, Debug)]
#[command(name = "filterpane")]
#[command(about = "Edit search filter parameters in the terminal", long_about = None)]
struct Args {
    /// Directory holding .filterpane/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Search panel to show (overrides the config file)
    #[arg(long, value_name = "photo|video")]
    panel: Option<SearchDomain>,

    /// Initial parameter, may be repeated
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Run in headless mode (edit script on stdin, JSON events on stdout)
    #[arg(long)]
    headless: bool,
}

fn parse_param(input: &str) -> Result<(String, String)> {
    parse_assignment(input).ok_or_else(|| Error::invalid_assignment(input))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Log to file, the terminal belongs to the UI
    logging::init()?;

    let dir = match args.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    if !dir.is_dir() {
        return Err(Error::NoDirectory { path: dir }.into());
    }

    if let Err(e) = init_config_dir(&dir) {
        warn!("Could not create default config: {}", e);
    }
    let settings = load_settings(&dir);
    let domain = args.panel.unwrap_or(settings.search.panel);

    let mut initial = settings.search.initial_params();
    initial.extend(args.params);
    let params = SearchParams::from_map(initial);

    info!(
        dir = %dir.display(),
        panel = %domain,
        params = params.len(),
        headless = args.headless,
        "filterpane starting"
    );

    let mut state = AppState::new(settings, domain, params)
        .context("Failed to mount search panel")?;

    let result = if args.headless {
        filterpane::run_headless(&mut state)
    } else {
        filterpane_tui::run(&mut state)
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("filterpane exiting");
    Ok(result?)
}
