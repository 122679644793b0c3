//! CLI binary for shapecheck: structural checks over graph and tree documents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shapecheck_cli::commands::{self, DocumentKind, GraphArgs, TreeArgs};
use shapecheck_core::config::{ReportFormat, ShapecheckConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shapecheck", about = "Structural checks for graphs and trees")]
struct Cli {
    /// Project root holding `.shapecheck/config.toml` (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Output format: text or json (overrides config)
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run checks against a graph document
    Graph(GraphArgs),

    /// Run checks against a tree document
    Tree(TreeArgs),

    /// Print shape metrics of a document without checking anything
    Info {
        /// Graph or tree document (JSON)
        file: PathBuf,

        /// Document kind (auto-detected from the `root` key by default)
        #[arg(long, value_enum, default_value = "auto")]
        kind: DocumentKind,
    },
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;
    let config = ShapecheckConfig::load(&project_root)
        .with_context(|| format!("failed to load config under {}", project_root.display()))?;
    let format = match &cli.format {
        Some(f) => f.parse::<ReportFormat>()?,
        None => config.report.format,
    };

    let report = match &cli.command {
        Commands::Graph(args) => commands::check_graph(args, &config)?,
        Commands::Tree(args) => commands::check_tree(args, &config)?,
        Commands::Info { file, kind } => {
            println!("{}", commands::info(file, *kind, format)?);
            return Ok(());
        }
    };

    println!("{}", commands::render_report(&report, format)?);
    report.into_result()?;
    Ok(())
}
