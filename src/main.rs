use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use tree_transfer::config::Settings;
use tree_transfer::models::load_source;
use tree_transfer::transfer::{generate, TreeTransfer};
use tree_transfer::ui::app::TuiApp;

#[derive(Parser, Debug)]
#[command(name = "tree-transfer")]
#[command(about = "Pick leaves of a JSON tree in a dual-pane terminal control")]
#[command(version)]
struct Args {
    /// JSON file holding the source hierarchy
    source: PathBuf,

    /// Key initially in the target set (repeatable)
    #[arg(short, long = "target")]
    targets: Vec<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Force the search boxes on
    #[arg(long)]
    search: bool,

    /// Count shown in the source header (defaults to the number of leaves)
    #[arg(long)]
    total: Option<usize>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: PathBuf, level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load settings
    let settings = Settings::load(args.config.as_deref())?;

    init_logging(
        args.log_file.clone().unwrap_or_else(Settings::default_log_path),
        &settings.log_level,
    )?;

    if args.config.is_none() {
        if let Err(e) = Settings::init_default(None) {
            tracing::warn!("Could not write default settings: {:#}", e);
        }
    }

    let source = load_source(&args.source, &settings.fields)
        .with_context(|| format!("loading {}", args.source.display()))?;
    if source.is_empty() {
        tracing::warn!("{} contains no items", args.source.display());
    }

    let mut props = settings.props();
    props.show_search |= args.search;
    props.source_total = args
        .total
        .unwrap_or_else(|| generate(&source, &[], "", false).leaf_keys.len());
    props.source = source;
    props.target = args.targets;

    tracing::info!(
        "Starting with {} source leaves, {} target keys",
        props.source_total,
        props.target.len()
    );

    let transfer = TreeTransfer::new(props);
    let target = {
        let mut tui = TuiApp::new(transfer, Duration::from_millis(settings.tick_rate_ms))?;
        tui.run()?
    };

    // Terminal is restored once the app is dropped
    println!("{}", serde_json::to_string(&target)?);
    Ok(())
}
