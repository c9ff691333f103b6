//! Variants command - list the export variants and their profiles

use crate::output::{Output, OutputFormat, TableDisplay};
use anyhow::Result;
use colored::Colorize;
use glink_core::fixture::Variant;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct VariantInfo {
    pub name: &'static str,
    pub attributes: Vec<&'static str>,
    pub layout: String,
    pub echo: bool,
}

impl From<Variant> for VariantInfo {
    fn from(variant: Variant) -> Self {
        let profile = variant.profile();
        Self {
            name: variant.as_str(),
            attributes: profile.attributes.keys().to_vec(),
            layout: profile.layout.describe(),
            echo: profile.echo,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantList {
    pub default: &'static str,
    pub variants: Vec<VariantInfo>,
}

impl TableDisplay for VariantList {
    fn to_table(&self) -> String {
        let mut lines = vec![format!(
            "{:<12} {:<28} {:<10} {}",
            "VARIANT".bold(),
            "ATTRIBUTES".bold(),
            "LAYOUT".bold(),
            "PRINT".bold()
        )];

        for info in &self.variants {
            let attributes = if info.attributes.is_empty() {
                "-".to_string()
            } else {
                info.attributes.join(",")
            };
            let marker = if info.name == self.default { " (default)" } else { "" };
            lines.push(format!(
                "{:<12} {:<28} {:<10} {}{}",
                info.name.cyan(),
                attributes,
                info.layout,
                if info.echo { "yes" } else { "no" },
                marker.dimmed()
            ));
        }

        lines.join("\n")
    }
}

pub fn list() -> VariantList {
    VariantList {
        default: Variant::default().as_str(),
        variants: Variant::ALL.into_iter().map(VariantInfo::from).collect(),
    }
}

pub fn run(format: OutputFormat) -> Result<()> {
    Output::new(list(), format).render()
}
