use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands::{catalog::CatalogArgs, columns::ColumnsArgs, render::RenderArgs};

#[derive(Debug, Parser)]
#[command(
    name = "querylens",
    version,
    about = "Schema-adaptive SQL projection for dashboard listings"
)]
pub struct Cli {
    #[command(flatten)]
    pub runtime: RuntimeArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct RuntimeArgs {
    #[arg(long, global = true, value_name = "PATH")]
    pub home_dir: Option<PathBuf>,

    #[arg(long, global = true, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// SQLite mirror whose tables are introspected for live columns.
    #[arg(long = "db", global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the logical fields a domain knows about.
    Catalog(CatalogArgs),
    /// Show the live columns of a domain's table and which fields they support.
    Columns(ColumnsArgs),
    /// Render SELECT and ORDER BY fragments for a listing request.
    Render(RenderArgs),
}
