//! Export command - build the fixed graph and write it as node-link JSON
//!
//! Runs the whole pipeline once: build nodes, build edges, attach the
//! variant's attributes, convert, render, write, and optionally echo the
//! exact file content to stdout.

use crate::config::GlinkConfig;
use anyhow::{Context, Result};
use glink_core::exporter::{self, Layout, DEFAULT_OUTPUT};
use glink_core::fixture::{self, Variant};
use std::io::Write;
use std::path::PathBuf;

/// Fully resolved settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub variant: Variant,
    pub output: PathBuf,
    pub layout: Layout,
    pub echo: bool,
}

/// Command-line overrides, all optional.
#[derive(Debug, Default)]
pub struct ExportFlags {
    pub variant: Option<Variant>,
    pub output: Option<String>,
    pub compact: bool,
    pub indent: Option<usize>,
    pub print: Option<bool>,
}

fn layout_for_width(width: usize) -> Layout {
    if width == 0 {
        Layout::Compact
    } else {
        Layout::Indented(width)
    }
}

impl ExportOptions {
    /// Resolve settings: CLI flag > config > variant profile.
    pub fn resolve(flags: ExportFlags, config: &GlinkConfig) -> Self {
        let variant = flags.variant.unwrap_or_else(|| {
            config
                .default_variant()
                .and_then(|v| match v.parse() {
                    Ok(variant) => Some(variant),
                    Err(e) => {
                        tracing::warn!("Ignoring configured variant: {}", e);
                        None
                    }
                })
                .unwrap_or_default()
        });
        let profile = variant.profile();

        let layout = if flags.compact {
            Layout::Compact
        } else if let Some(width) = flags.indent.or(config.indent()) {
            layout_for_width(width)
        } else {
            profile.layout
        };

        let output = flags
            .output
            .or_else(|| config.output_path().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

        Self {
            variant,
            output: PathBuf::from(output),
            layout,
            echo: flags.print.or(config.print()).unwrap_or(profile.echo),
        }
    }
}

/// Run the export pipeline.
///
/// IO failures propagate to the caller; there is no retry.
pub fn run(options: &ExportOptions) -> Result<()> {
    tracing::debug!(
        variant = %options.variant,
        layout = %options.layout.describe(),
        echo = options.echo,
        "Starting export"
    );

    let graph = fixture::build(options.variant).context("Failed to build graph")?;
    let outcome = exporter::export_graph(&graph, options.layout, &options.output)
        .with_context(|| format!("Failed to write {}", options.output.display()))?;

    if options.echo {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(outcome.content.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}
