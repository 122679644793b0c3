//! Subcommand implementations. Each returns its output instead of printing so
//! the binary stays a thin dispatcher.

use crate::input::{self, Document};
use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use shapecheck_check::{GraphChecker, Report, TreeChecker};
use shapecheck_core::config::{ReportFormat, ShapecheckConfig};
use shapecheck_core::tree::Tree;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphCheck {
    Connected,
    Acyclic,
    Cyclic,
    Tree,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeCheck {
    Binary,
    Symmetric,
    Full,
    NonEmpty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentKind {
    Auto,
    Graph,
    Tree,
}

#[derive(Debug, Clone, Args)]
pub struct GraphArgs {
    /// Graph document (JSON)
    pub file: PathBuf,

    /// Structural checks to run (defaults to connected + acyclic)
    #[arg(short, long = "check", value_enum)]
    pub checks: Vec<GraphCheck>,

    /// Require a path between two nodes, as FROM:TO (repeatable)
    #[arg(long = "path", value_parser = input::parse_endpoints)]
    pub paths: Vec<(String, String)>,

    /// Require no path between two nodes, as FROM:TO (repeatable)
    #[arg(long = "no-path", value_parser = input::parse_endpoints)]
    pub no_paths: Vec<(String, String)>,

    /// Expected node count
    #[arg(long)]
    pub nodes: Option<usize>,

    /// Expected edge count
    #[arg(long)]
    pub edges: Option<usize>,

    /// Expected number of connected components
    #[arg(long)]
    pub components: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub struct TreeArgs {
    /// Tree document (JSON)
    pub file: PathBuf,

    /// Structural checks to run (defaults to non-empty + binary)
    #[arg(short, long = "check", value_enum)]
    pub checks: Vec<TreeCheck>,

    /// Expected depth
    #[arg(long)]
    pub depth: Option<usize>,

    /// Expected leaf count
    #[arg(long)]
    pub leaves: Option<usize>,

    /// Expected diameter
    #[arg(long)]
    pub diameter: Option<usize>,

    /// Values that must appear in the tree (repeatable)
    #[arg(long)]
    pub contains: Vec<String>,
}

fn subject(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned())
}

pub fn check_graph(args: &GraphArgs, config: &ShapecheckConfig) -> Result<Report> {
    let graph = input::load_graph(&args.file)?;
    tracing::info!(
        file = %args.file.display(),
        nodes = graph.count_nodes(),
        edges = graph.count_edges(),
        "loaded graph"
    );

    let default_checks = [GraphCheck::Connected, GraphCheck::Acyclic];
    let checks = if args.checks.is_empty() {
        &default_checks[..]
    } else {
        &args.checks[..]
    };

    let mut checker = GraphChecker::new(&graph, subject(&args.file)).with_config(config);
    for check in checks {
        checker = match check {
            GraphCheck::Connected => checker.connected(),
            GraphCheck::Acyclic => checker.acyclic(),
            GraphCheck::Cyclic => checker.has_cycle(),
            GraphCheck::Tree => checker.tree(),
            GraphCheck::Binary => checker.binary_tree(),
        };
    }
    for (from, to) in &args.paths {
        checker = checker.path(from, to);
    }
    for (from, to) in &args.no_paths {
        checker = checker.no_path(from, to);
    }
    if let Some(n) = args.nodes {
        checker = checker.node_count(n);
    }
    if let Some(n) = args.edges {
        checker = checker.edge_count(n);
    }
    if let Some(n) = args.components {
        checker = checker.components(n);
    }
    Ok(checker.finish())
}

pub fn check_tree(args: &TreeArgs, config: &ShapecheckConfig) -> Result<Report> {
    let tree = input::load_tree(&args.file)?;
    tracing::info!(
        file = %args.file.display(),
        nodes = tree.count_nodes(),
        "loaded tree"
    );

    let default_checks = [TreeCheck::NonEmpty, TreeCheck::Binary];
    let checks = if args.checks.is_empty() {
        &default_checks[..]
    } else {
        &args.checks[..]
    };

    let mut checker = TreeChecker::new(&tree, subject(&args.file)).with_config(config);
    for check in checks {
        checker = match check {
            TreeCheck::Binary => checker.binary(),
            TreeCheck::Symmetric => checker.symmetric(),
            TreeCheck::Full => checker.full(),
            TreeCheck::NonEmpty => checker.non_empty(),
        };
    }
    if let Some(n) = args.depth {
        checker = checker.depth(n);
    }
    if let Some(n) = args.leaves {
        checker = checker.leaves(n);
    }
    if let Some(n) = args.diameter {
        checker = checker.diameter(n);
    }
    for value in &args.contains {
        checker = checker.contains(value);
    }
    Ok(checker.within_configured_depth().finish())
}

/// Render a report as aligned `PASS`/`FAIL` lines or as JSON.
pub fn render_report(report: &Report, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Text => {
            let mut out = String::new();
            for outcome in &report.outcomes {
                let status = if outcome.passed { "PASS" } else { "FAIL" };
                writeln!(out, "{status}  {}", outcome.message)?;
            }
            let failed = report.failures().count();
            write!(
                out,
                "{}: {} checks, {} failed",
                report.subject,
                report.outcomes.len(),
                failed
            )?;
            Ok(out)
        }
    }
}

/// Shape metrics of a tree document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
    pub nodes: usize,
    pub leaves: usize,
    pub depth: usize,
    pub diameter: usize,
    pub max_degree: usize,
    pub binary: bool,
    pub structurally_binary: bool,
    pub full: bool,
    pub symmetric: bool,
}

impl TreeSummary {
    pub fn of(tree: &Tree<String>) -> Self {
        Self {
            nodes: tree.count_nodes(),
            leaves: tree.count_leaves(),
            depth: tree.depth(),
            diameter: tree.diameter(),
            max_degree: tree.max_degree(),
            binary: tree.is_binary_tree(),
            structurally_binary: tree.is_structurally_binary(),
            full: tree.is_full(),
            symmetric: tree.is_symmetric(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Info {
    Graph(shapecheck_core::GraphSummary),
    Tree(TreeSummary),
}

fn load_info(path: &Path, kind: DocumentKind) -> Result<Info> {
    let info = match kind {
        DocumentKind::Graph => Info::Graph(input::load_graph(path)?.summary()),
        DocumentKind::Tree => Info::Tree(TreeSummary::of(&input::load_tree(path)?)),
        DocumentKind::Auto => match input::load_document(path)? {
            Document::Graph(doc) => Info::Graph(doc.into_graph().summary()),
            Document::Tree(doc) => Info::Tree(TreeSummary::of(&doc.into_tree()?)),
        },
    };
    Ok(info)
}

/// Summary of a document's shape, without running any checks.
pub fn info(path: &Path, kind: DocumentKind, format: ReportFormat) -> Result<String> {
    let info = load_info(path, kind)?;
    if format == ReportFormat::Json {
        return Ok(serde_json::to_string_pretty(&info)?);
    }

    let mut out = String::new();
    match info {
        Info::Graph(s) => {
            let kind = if s.directed { "directed" } else { "undirected" };
            writeln!(out, "Graph ({kind})")?;
            writeln!(out, "  Nodes:       {}", s.nodes)?;
            writeln!(out, "  Edges:       {}", s.edges)?;
            writeln!(out, "  Components:  {}", s.components)?;
            writeln!(out, "  Connected:   {}", s.connected)?;
            writeln!(out, "  Cycle:       {} (simple: {})", s.has_cycle, s.has_simple_cycle)?;
            write!(out, "  Tree:        {}", s.is_tree)?;
        }
        Info::Tree(s) => {
            writeln!(out, "Tree")?;
            writeln!(out, "  Nodes:       {}", s.nodes)?;
            writeln!(out, "  Leaves:      {}", s.leaves)?;
            writeln!(out, "  Depth:       {}", s.depth)?;
            writeln!(out, "  Diameter:    {}", s.diameter)?;
            writeln!(out, "  Max degree:  {}", s.max_degree)?;
            writeln!(
                out,
                "  Binary:      {} (structural: {})",
                s.binary, s.structurally_binary
            )?;
            writeln!(out, "  Full:        {}", s.full)?;
            write!(out, "  Symmetric:   {}", s.symmetric)?;
        }
    }
    Ok(out)
}

