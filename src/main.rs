//! mycodo-dash - Terminal dashboard shell for Mycodo
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use mycodo_app::config::{self, Settings};
use mycodo_core::prelude::*;

/// mycodo-dash - Terminal dashboard shell for Mycodo
#[derive(Parser, Debug)]
#[command(name = "mycodo-dash")]
#[command(about = "Terminal dashboard shell for Mycodo environmental monitoring", long_about = None)]
struct Args {
    /// Path to open at startup (overrides ui.initial_path)
    #[arg(long, value_name = "PATH")]
    path: Option<String>,

    /// Config file to load instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fill the dashboard panels with sample content
    #[arg(long)]
    demo: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let config_path = args.config.clone().unwrap_or_else(config::default_config_path);

    if args.init_config {
        if config::init_config_file(&config_path)? {
            println!("Wrote {}", config_path.display());
        } else {
            println!("{} already exists", config_path.display());
        }
        return Ok(());
    }

    // Log to file, the TUI owns stdout
    mycodo_core::logging::init()?;

    info!("Config: {}", config_path.display());

    let settings = load_settings(&args, &config_path)?;

    let result = mycodo_tui::run(settings, args.demo).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("mycodo-dash exiting");
    result
}

/// An explicit `--config` must load; the default location may be absent or
/// broken, in which case defaults are used.
fn load_settings(args: &Args, config_path: &std::path::Path) -> Result<Settings> {
    let mut settings = if args.config.is_some() {
        config::load_settings_from(config_path)?
    } else {
        config::load_settings(config_path)
    };

    if let Some(path) = &args.path {
        if !path.starts_with('/') {
            return Err(Error::config_invalid(format!(
                "--path must start with '/', got {:?}",
                path
            )));
        }
        settings.ui.initial_path = path.clone();
    }

    Ok(settings)
}
