//! aelist - Entry Point

use aelist::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    resolve_directories, DisplayMode,
};
use aelist::index::CandidateIndex;
use aelist::launch::launch_and_exit;
use aelist::model::AppError;
use aelist::state::{AppState, DisplaySettings};
use aelist::view::{self, LoopOutcome};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Search executables by name and launch the best match
#[derive(Parser, Debug)]
#[command(name = "aelist")]
#[command(version)]
#[command(about = "Search executables by substring and launch the best match")]
#[command(args_override_self = true)]
pub struct Args {
    /// Directories to scan (defaults to $PATH)
    pub directories: Vec<PathBuf>,

    /// Short display mode: banner, status line and prompt
    #[arg(short = 's', long, overrides_with_all = ["line", "long", "random"])]
    pub short: bool,

    /// Line display mode: status line and prompt only
    #[arg(short = 'l', long, overrides_with_all = ["short", "long", "random"])]
    pub line: bool,

    /// Long display mode: short layout plus a listing of matches
    #[arg(short = 'L', long, overrides_with_all = ["short", "line", "random"])]
    pub long: bool,

    /// Pick one of the display modes at random
    #[arg(short = 'r', long, overrides_with_all = ["short", "line", "long"])]
    pub random: bool,

    /// Rows in the long-mode listing
    #[arg(short = 'n', long = "prompts", value_parser = clap::value_parser!(u32).range(1..=(i32::MAX as i64)))]
    pub prompts: Option<u32>,

    /// Skip the "loaded N files" banner
    #[arg(short = 'S', long)]
    pub skip_banner: bool,

    /// Also scan $PATH when directories are given
    #[arg(short = 'P', long = "path")]
    pub include_path: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Display mode requested on the command line, if any.
    fn mode_override(&self) -> Option<DisplayMode> {
        if self.short {
            Some(DisplayMode::Short)
        } else if self.line {
            Some(DisplayMode::Line)
        } else if self.long {
            Some(DisplayMode::Long)
        } else if self.random {
            Some(DisplayMode::random())
        } else {
            None
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("aelist: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file)?;

    // Env and CLI never change the log path, so warnings from the remaining
    // steps already reach the log
    aelist::logging::init(&merged.log_file_path)?;

    let with_env = apply_env_overrides(merged);
    let config = apply_cli_overrides(
        with_env,
        args.mode_override(),
        args.prompts.map(|count| count as usize),
        args.skip_banner.then_some(true),
        args.include_path.then_some(true),
    )?;

    info!(config = ?config, "Configuration loaded and resolved");

    let path_env = std::env::var_os("PATH");
    let directories =
        resolve_directories(&args.directories, config.include_path, path_env.as_deref())?;
    let index = CandidateIndex::build(&directories)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

    let state = AppState::new(index, DisplaySettings::from(&config));

    match view::run(state, &interrupted)? {
        LoopOutcome::Launch(candidate) => launch_and_exit(candidate.as_ref()),
        LoopOutcome::Cancelled => {
            info!("Cancelled without launching");
            Ok(())
        }
    }
}
