//! Table engine.
//!
//! A [`Table`] owns a fixed header and an append-only list of rows. Column
//! widths track the longest cell of every column, counted in codepoints.
//! Sorting and grid decoration are applied when the table is rendered.

mod render;
mod sort;

use std::fmt;

use tracing::trace;
use tstable_utils_printable::is_printable;

use crate::error::{Result, TableError};
use crate::grid::{Grid, GridStyle};

/// Padding of a new table.
pub const DEFAULT_PADDING: usize = 2;

/// Largest padding [`Table::set_padding`] accepts.
pub const MAX_PADDING: usize = 1024;

/// A table with header, rows and rendering settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    /// Width of each column in codepoints, header included.
    widths: Vec<usize>,
    /// Column index rows are sorted by.
    sort_key: usize,
    /// Spaces on both sides of every cell.
    padding: usize,
    grid: Grid,
}

fn char_count(s: &str) -> usize {
    s.chars().count()
}

impl Table {
    /// Creates a table with the given header.
    ///
    /// The new table is sorted by its first column, has padding
    /// [`DEFAULT_PADDING`] and uses [`Grid::SIMPLE`].
    ///
    /// Fails if the header is empty or contains non-printable characters.
    pub fn new<I, S>(header: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header: Vec<String> = header.into_iter().map(Into::into).collect();
        if header.is_empty() {
            return Err(TableError::Empty {
                op: "new",
                what: "header",
            });
        }
        if !is_printable(&header)? {
            return Err(TableError::NonPrintable {
                op: "new",
                what: "header",
            });
        }
        let widths = header.iter().map(|h| char_count(h)).collect();
        Ok(Self {
            header,
            rows: Vec::new(),
            widths,
            sort_key: 0,
            padding: DEFAULT_PADDING,
            grid: Grid::SIMPLE,
        })
    }

    /// Appends a row and widens columns to fit it.
    ///
    /// The row must have one cell per header column and only printable text.
    /// A rejected row leaves the table unchanged.
    pub fn add_row<I, S>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        if row.is_empty() {
            return Err(TableError::Empty {
                op: "add_row",
                what: "row",
            });
        }
        if row.len() != self.header.len() {
            return Err(TableError::ColumnCount {
                op: "add_row",
                expected: self.header.len(),
                actual: row.len(),
            });
        }
        if !is_printable(&row)? {
            return Err(TableError::NonPrintable {
                op: "add_row",
                what: "row",
            });
        }
        for (width, cell) in self.widths.iter_mut().zip(&row) {
            *width = (*width).max(char_count(cell));
        }
        self.rows.push(row);
        trace!(rows = self.rows.len(), widths = ?self.widths, "row added");
        Ok(())
    }

    /// Selects the column rows are ordered by when rendering.
    pub fn sort_by(&mut self, column: &str) -> Result<()> {
        let index = self
            .column_index(column)
            .ok_or_else(|| TableError::ColumnNotFound {
                op: "sort_by",
                name: column.to_string(),
            })?;
        self.sort_key = index;
        Ok(())
    }

    /// Sets the spaces surrounding every cell. Values below zero or above
    /// [`MAX_PADDING`] are rejected and leave the padding unchanged.
    pub fn set_padding(&mut self, padding: i64) -> Result<()> {
        let value = usize::try_from(padding).map_err(|_| TableError::NegativePadding {
            op: "set_padding",
            actual: padding,
        })?;
        if value > MAX_PADDING {
            return Err(TableError::PaddingTooLarge {
                op: "set_padding",
                actual: padding,
                max: MAX_PADDING,
            });
        }
        self.padding = value;
        Ok(())
    }

    /// Sets the grid the table is drawn with.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Sets one of the predefined grids by name.
    pub fn set_grid_by_name(&mut self, name: &str) -> Result<()> {
        let style: GridStyle = name.parse()?;
        self.grid = style.grid();
        Ok(())
    }

    /// Returns the index of the header column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn sort_key(&self) -> usize {
        self.sort_key
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render().map_err(|e| {
            tracing::warn!(error = %e, "cannot display table");
            fmt::Error
        })?;
        f.write_str(&text)
    }
}
