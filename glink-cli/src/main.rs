//! glink CLI - build a fixed directed graph and export it as node-link JSON
//!
//! Writes `graph.json` in the working directory and, for the display
//! variants, prints the same document to stdout.

use clap::{CommandFactory, Parser, Subcommand};
use glink_core::fixture::Variant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::export::{ExportFlags, ExportOptions};
use commands::*;
use config::GlinkConfig;
use output::OutputFormat;

/// Parse a variant name (plain, styled, annotated)
fn parse_variant(s: &str) -> Result<Variant, String> {
    s.parse()
}

/// Fixed graph builder and node-link exporter.
#[derive(Parser)]
#[command(name = "glink")]
#[command(author, version)]
#[command(about = "Build a fixed directed graph and export it as node-link JSON")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  glink export                      Annotated graph to graph.json, echoed
  glink export --variant plain      Compact, no attributes, file only
  glink check graph.json            Verify a written document")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Report format (overrides config default; never affects exported JSON)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the graph, write it as node-link JSON, and optionally print it
    #[command(visible_alias = "e")]
    Export {
        /// Variant to export: plain, styled, annotated
        #[arg(long, value_parser = parse_variant)]
        variant: Option<Variant>,

        /// Output file path (default: graph.json)
        #[arg(short, long)]
        output: Option<String>,

        /// Render without any whitespace
        #[arg(long, conflicts_with = "indent")]
        compact: bool,

        /// Indent nested values by N spaces (0 = compact)
        #[arg(long, value_name = "N")]
        indent: Option<usize>,

        /// Print the document to stdout after writing it
        #[arg(long, conflicts_with = "no_print")]
        print: bool,

        /// Do not print the document
        #[arg(long)]
        no_print: bool,
    },

    /// Read a node-link file back and verify the graph it describes
    Check {
        /// File to check
        #[arg(default_value = "graph.json")]
        path: String,
    },

    /// List export variants and their profiles
    Variants,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .glinkrc.toml
    let config = GlinkConfig::load(std::path::Path::new("."));

    // Resolve report format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Export {
            variant,
            output,
            compact,
            indent,
            print,
            no_print,
        } => {
            let print = match (print, no_print) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let flags = ExportFlags {
                variant,
                output,
                compact,
                indent,
                print,
            };
            export::run(&ExportOptions::resolve(flags, &config))
        }
        Commands::Check { path } => check::run(&path, format),
        Commands::Variants => variants::run(format),
    }
}
