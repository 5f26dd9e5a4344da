//! Registry of predefined grids by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Grid;
use crate::error::TableError;

/// Names of the predefined grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GridStyle {
    Empty,
    DoubleBorder,
    DoubleHorizontal,
    DoubleVertical,
    Double,
    Rounded,
    #[default]
    Simple,
    Bold,
    Interrupted,
    Dashed,
    Dotted,
}

impl GridStyle {
    /// Every predefined grid, in registry order.
    pub const ALL: [GridStyle; 11] = [
        GridStyle::Empty,
        GridStyle::DoubleBorder,
        GridStyle::DoubleHorizontal,
        GridStyle::DoubleVertical,
        GridStyle::Double,
        GridStyle::Rounded,
        GridStyle::Simple,
        GridStyle::Bold,
        GridStyle::Interrupted,
        GridStyle::Dashed,
        GridStyle::Dotted,
    ];

    /// Registry name of this style.
    pub fn name(self) -> &'static str {
        match self {
            GridStyle::Empty => "empty",
            GridStyle::DoubleBorder => "double-border",
            GridStyle::DoubleHorizontal => "double-horizontal",
            GridStyle::DoubleVertical => "double-vertical",
            GridStyle::Double => "double",
            GridStyle::Rounded => "rounded",
            GridStyle::Simple => "simple",
            GridStyle::Bold => "bold",
            GridStyle::Interrupted => "interrupted",
            GridStyle::Dashed => "dashed",
            GridStyle::Dotted => "dotted",
        }
    }

    /// The grid this style names.
    pub fn grid(self) -> Grid {
        match self {
            GridStyle::Empty => Grid::EMPTY,
            GridStyle::DoubleBorder => Grid::DOUBLE_BORDER,
            GridStyle::DoubleHorizontal => Grid::DOUBLE_HORIZONTAL,
            GridStyle::DoubleVertical => Grid::DOUBLE_VERTICAL,
            GridStyle::Double => Grid::DOUBLE,
            GridStyle::Rounded => Grid::ROUNDED,
            GridStyle::Simple => Grid::SIMPLE,
            GridStyle::Bold => Grid::BOLD,
            GridStyle::Interrupted => Grid::INTERRUPTED,
            GridStyle::Dashed => Grid::DASHED,
            GridStyle::Dotted => Grid::DOTTED,
        }
    }
}

impl fmt::Display for GridStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GridStyle {
    type Err = TableError;

    /// Accepts registry names (`double-border`), their CamelCase form with or
    /// without the `Grid` suffix (`DoubleBorderGrid`), and `none` for the
    /// empty grid. Matching ignores case, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let key = key.strip_suffix("grid").unwrap_or(&key);
        if key == "none" {
            return Ok(GridStyle::Empty);
        }
        GridStyle::ALL
            .into_iter()
            .find(|style| style.name().replace('-', "") == key)
            .ok_or_else(|| TableError::UnknownGrid(s.to_string()))
    }
}

impl TryFrom<String> for GridStyle {
    type Error = TableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GridStyle> for String {
    fn from(style: GridStyle) -> Self {
        style.name().to_string()
    }
}
