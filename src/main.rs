//! NeuroVerse navigation preview - Entry Point

use clap::Parser;
use neuroverse_nav::config::SettleMode;
use neuroverse_nav::view::ColorConfig;
use std::path::PathBuf;
use tracing::info;

/// Terminal preview of the NeuroVerse site navigation
#[derive(Parser, Debug)]
#[command(name = "neuroverse-nav")]
#[command(version)]
#[command(about = "Preview the NeuroVerse navigation chrome in the terminal")]
pub struct Args {
    /// Route shown on startup (e.g. /industries/finance)
    #[arg(short, long)]
    pub route: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Behave as if framed by a parent page (announce route changes)
    #[arg(long)]
    pub embedded: bool,

    /// How the dropdown re-measures after the bar slides
    #[arg(long, value_enum)]
    pub settle: Option<SettleMode>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = neuroverse_nav::config::load_config_with_precedence(args.config.clone())?;
        let merged = neuroverse_nav::config::merge_config(config_file);
        let with_env = neuroverse_nav::config::apply_env_overrides(merged);
        // Flags only override when explicitly set.
        let embedded_override = args.embedded.then_some(true);
        neuroverse_nav::config::apply_cli_overrides(
            with_env,
            args.route.clone(),
            embedded_override,
            args.settle,
        )
        .validate()?
    };

    neuroverse_nav::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let color = ColorConfig::from_env_and_args(args.no_color);
    neuroverse_nav::view::run_preview(&config, color)?;

    Ok(())
}
