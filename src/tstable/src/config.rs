//! Table configuration.
//!
//! ```toml
//! padding = 1
//! sort_by = "Weapon"
//! grid = "rounded"
//! ```
//!
//! `grid` is either a predefined grid name or an inline table of glyphs:
//!
//! ```toml
//! [grid]
//! top_left = "╭"
//! border_horizontal = "┄"
//! border_vertical = "┆"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::TableError;
use crate::grid::{Grid, GridStyle};
use crate::table::{DEFAULT_PADDING, Table};

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML or unexpected field.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration was rejected by the table.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// A predefined grid name or a custom set of glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GridSpec {
    Named(GridStyle),
    Custom(Grid),
}

impl GridSpec {
    pub fn grid(&self) -> Grid {
        match self {
            GridSpec::Named(style) => style.grid(),
            GridSpec::Custom(grid) => *grid,
        }
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec::Named(GridStyle::default())
    }
}

/// Rendering settings of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Spaces around each cell. Negative values are rejected on apply.
    #[serde(default = "default_padding")]
    pub padding: i64,
    /// Column to sort rows by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub grid: GridSpec,
}

fn default_padding() -> i64 {
    DEFAULT_PADDING as i64
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            sort_by: None,
            grid: GridSpec::default(),
        }
    }
}

impl TableConfig {
    /// Parses a configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Applies padding, grid and sort column to `table`, in that order.
    pub fn apply(&self, table: &mut Table) -> Result<(), TableError> {
        table.set_padding(self.padding)?;
        table.set_grid(self.grid.grid());
        if let Some(column) = &self.sort_by {
            table.sort_by(column)?;
        }
        debug!(
            padding = self.padding,
            sort_by = ?self.sort_by,
            "table configuration applied"
        );
        Ok(())
    }

    /// Builds a configured table from a header and rows.
    pub fn build<H, R>(&self, header: H, rows: R) -> Result<Table, TableError>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: Into<String>,
    {
        let mut table = Table::new(header)?;
        for row in rows {
            table.add_row(row)?;
        }
        self.apply(&mut table)?;
        Ok(table)
    }
}
