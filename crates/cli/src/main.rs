mod interactive;
mod notify;
mod render;
mod snapshot;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use board_core::logging::{init_logging, log_shutdown_info, log_startup_info};
use board_core::{AssetError, BoardConfig, BoardController, DataGenerator, IconSet, SortCriterion, TracingObserver};
use clap::{Parser, Subcommand};
use console::Term;

use snapshot::SnapshotFormat;

const APP_NAME: &str = "comment-board";

#[derive(Parser)]
#[command(name = "comment-board", version)]
#[command(about = "Browse, like, dislike and sort a board of generated comments")]
struct Cli {
    /// Directory holding like.png and dislike.png
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Seed for reproducible boards
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one board and print it without entering the interactive view
    Snapshot {
        /// Sort criterion: default, likes, dislikes, newest or oldest
        #[arg(long, default_value = "default")]
        sort: SortCriterion,

        #[arg(long, value_enum, default_value = "text")]
        format: SnapshotFormat,
    },
}

fn load_config(cli: &Cli) -> Result<BoardConfig> {
    let mut config = match &cli.config {
        Some(path) => BoardConfig::from_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => BoardConfig::default(),
    };

    config.apply_env().context("Invalid BOARD_* environment variable")?;

    if let Some(dir) = &cli.assets {
        config = config.with_assets_dir(dir);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(level) = &cli.log_level {
        config = config.with_log_level(level);
    }
    if let Some(file) = &cli.log_file {
        config.log = config.log.with_file(file);
    }
    if cli.json_logs {
        config.log.json_format = true;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// First existing candidate among the path as given, next to the
/// executable, and the crate's bundled assets.
fn resolve_assets_dir(dir: &Path) -> PathBuf {
    let mut candidates = vec![dir.to_path_buf()];
    if dir.is_relative() {
        if let Some(exe_dir) = std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
            candidates.push(exe_dir.join(dir));
        }
        candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"));
    }

    candidates
        .iter()
        .find(|candidate| candidate.is_dir())
        .cloned()
        .unwrap_or_else(|| dir.to_path_buf())
}

fn report_asset_errors(term: &Term, errors: &[AssetError], interactive: bool) -> Result<()> {
    for error in errors {
        if interactive {
            notify::show_error(term, &error.to_string())?;
        } else {
            eprintln!("Error! {}", error);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(&config.log).map_err(|e| anyhow!(e)).context("Failed to initialize logging")?;
    log_startup_info(APP_NAME, env!("CARGO_PKG_VERSION"));
    for (field, source) in config.config_sources() {
        if !source.is_default() {
            tracing::debug!(target: "board::config", field = %field, source = %source, "Config override");
        }
    }

    let term = Term::stdout();
    let interactive = cli.command.is_none();
    if interactive && !term.is_term() {
        bail!("The interactive board needs a terminal; use `{} snapshot` instead", APP_NAME);
    }

    let assets_dir = resolve_assets_dir(&config.assets_dir);
    let (icons, errors) = IconSet::load(&assets_dir);
    report_asset_errors(&term, &errors, interactive)?;

    let generator = match config.seed {
        Some(seed) => DataGenerator::seeded(config.generator.clone(), seed),
        None => DataGenerator::new(config.generator.clone()),
    };
    let mut board = BoardController::new(generator, icons);
    board.subscribe(Box::new(TracingObserver));

    match cli.command {
        Some(Commands::Snapshot { sort, format }) => {
            let output = snapshot::snapshot(&mut board, sort, format)?;
            println!("{}", output);
        }
        None => {
            let mut app = interactive::BoardApp::new(board);
            app.refresh();
            interactive::run(&term, &mut app)?;
        }
    }

    log_shutdown_info(APP_NAME);
    Ok(())
}
