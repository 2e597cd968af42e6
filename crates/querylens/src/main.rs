#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use clap::error::ErrorKind;
use querylens::cli::app::{Cli, Command, RuntimeArgs};
use querylens::cli::commands;
use querylens::config::{DB_PATH_ENV, MirrorPath};
use querylens::models::{CommandFailure, FailureClass};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME_FAILURE: i32 = 1;
const EXIT_USAGE_ERROR: i32 = 64;

const LOG_FILTER_ENV: &str = "QUERYLENS_LOG";

fn main() {
    init_tracing();
    std::process::exit(run());
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return exit_code_for_parse_error(error),
    };
    let command_name = command_name(&cli.command);
    info!(command = command_name, "starting");

    match execute(cli) {
        Ok(()) => {
            info!(command = command_name, exit_code = EXIT_SUCCESS, "completed");
            EXIT_SUCCESS
        }
        Err(failure) => {
            let exit_code = classify_runtime_error(&failure);
            if exit_code == FailureClass::Rejected.exit_code() {
                debug!(command = command_name, exit_code, "request rejected");
            } else {
                error!(command = command_name, exit_code, "failed");
            }
            eprintln!("{failure:#}");
            exit_code
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Catalog(args) => commands::catalog::run(&args),
        Command::Columns(args) => {
            let mirror = resolve_mirror_path(&cli.runtime)?;
            commands::columns::run(&args, &mirror)
        }
        Command::Render(args) => {
            let mirror = resolve_mirror_path(&cli.runtime)?;
            commands::render::run(&args, &mirror)
        }
    }
}

fn classify_runtime_error(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<CommandFailure>()
        .map_or(EXIT_RUNTIME_FAILURE, |failure| failure.class().exit_code())
}

fn exit_code_for_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            EXIT_SUCCESS
        }
        _ => {
            let _ = error.print();
            EXIT_USAGE_ERROR
        }
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Catalog(_) => "catalog",
        Command::Columns(_) => "columns",
        Command::Render(_) => "render",
    }
}

fn resolve_mirror_path(args: &RuntimeArgs) -> Result<MirrorPath> {
    let home_dir = match &args.home_dir {
        Some(path) => path.clone(),
        None => std::env::var_os("HOME")
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("HOME is not set; pass --home-dir"))?,
    };

    let cwd = match &args.cwd {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    let env_db_path = std::env::var_os(DB_PATH_ENV);
    querylens::config::resolve_mirror_path(
        &home_dir,
        &cwd,
        args.db_path.as_deref(),
        env_db_path.as_deref(),
    )
}
