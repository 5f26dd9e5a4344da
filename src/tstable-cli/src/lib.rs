//! Command-line front end for tstable.

pub mod input;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tstable::{GridSpec, GridStyle, Table, TableConfig};

use crate::input::TableInput;

/// Render tables with line-drawing grids
#[derive(Debug, Parser)]
#[command(name = "tstable")]
#[command(about = "Render a table as aligned text with a line-drawing grid")]
#[command(version)]
pub struct Args {
    /// JSON file with `header` and `rows` (defaults to the Fellowship table)
    #[arg(short, long)]
    pub input: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Grid name, overrides the configuration
    #[arg(short, long)]
    pub grid: Option<GridStyle>,

    /// Spaces around each cell, overrides the configuration
    #[arg(short, long, allow_negative_numbers = true)]
    pub padding: Option<i64>,

    /// Column to sort rows by, overrides the configuration
    #[arg(short, long)]
    pub sort_by: Option<String>,

    /// Render the table once with every predefined grid
    #[arg(long)]
    pub list_grids: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Resolves the configuration file and command-line overrides.
    pub fn config(&self) -> Result<TableConfig> {
        let mut config = match &self.config {
            Some(path) => TableConfig::load(path)
                .with_context(|| format!("Failed to load config from {path}"))?,
            None => TableConfig::default(),
        };
        if let Some(style) = self.grid {
            config.grid = GridSpec::Named(style);
        }
        if let Some(padding) = self.padding {
            config.padding = padding;
        }
        if let Some(column) = &self.sort_by {
            config.sort_by = Some(column.clone());
        }
        Ok(config)
    }

    pub fn input(&self) -> Result<TableInput> {
        match &self.input {
            Some(path) => TableInput::load(path),
            None => Ok(TableInput::fellowship()),
        }
    }
}

/// Renders the output requested by `args`.
pub fn run(args: &Args) -> Result<String> {
    let input = args.input()?;
    let config = args.config()?;
    let mut table: Table = config
        .build(input.header, input.rows)
        .context("Failed to build table")?;
    info!(rows = table.len(), "table built");

    if !args.list_grids {
        return Ok(table.render()?);
    }
    let mut text = String::new();
    for style in GridStyle::ALL {
        table.set_grid(style.grid());
        text.push_str(style.name());
        text.push('\n');
        text.push_str(&table.render()?);
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("tstable").chain(argv.iter().copied()))
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = args(&["--grid", "rounded", "--padding", "1", "--sort-by", "Weapon"])
            .config()
            .unwrap();
        assert_eq!(config.grid, GridSpec::Named(GridStyle::Rounded));
        assert_eq!(config.padding, 1);
        assert_eq!(config.sort_by.as_deref(), Some("Weapon"));
    }

    #[test]
    fn test_negative_padding_is_parsed_and_rejected() {
        let args = args(&["--padding", "-1"]);
        assert_eq!(args.padding, Some(-1));
        assert!(run(&args).is_err());
    }

    #[test]
    fn test_unknown_grid_is_a_parse_error() {
        assert!(Args::try_parse_from(["tstable", "--grid", "sparkly"]).is_err());
    }

    #[test]
    fn test_list_grids_renders_every_grid() {
        let text = run(&args(&["--list-grids"])).unwrap();
        for style in GridStyle::ALL {
            assert!(text.lines().any(|line| line == style.name()));
        }
    }
}
