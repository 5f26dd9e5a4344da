//! Rendering tables to text.

use tracing::{debug, warn};

use super::{MAX_PADDING, Table};
use super::sort::sorted_rows;
use crate::error::{Result, TableError};
use crate::grid::Rule;

impl Table {
    /// Renders the table as a block of newline-terminated lines.
    ///
    /// Rows are ordered by the sort key column. Horizontal lines the grid
    /// draws nothing for are left out, and a table without rows has no
    /// header separator. On error no text is returned.
    pub fn render(&self) -> Result<String> {
        let spans = self
            .check_structure()
            .and_then(|()| self.spans())
            .inspect_err(|e| {
                warn!(error = %e, "table structure is inconsistent");
            })?;
        debug!(
            rows = self.rows.len(),
            columns = self.header.len(),
            padding = self.padding,
            empty_grid = self.grid.is_empty(),
            "rendering table"
        );

        let mut text = String::new();
        if let Some(line) = self.rule_line(Rule::Top, &spans) {
            text.push_str(&line);
        }
        text.push_str(&self.row_line(&self.header)?);
        if !self.rows.is_empty() {
            if let Some(line) = self.rule_line(Rule::Separator, &spans) {
                text.push_str(&line);
            }
        }
        for row in sorted_rows(&self.rows, self.sort_key) {
            text.push_str(&self.row_line(row)?);
        }
        if let Some(line) = self.rule_line(Rule::Bottom, &spans) {
            text.push_str(&line);
        }
        Ok(text)
    }

    fn check_structure(&self) -> Result<()> {
        if self.header.len() != self.widths.len() {
            return Err(TableError::WidthMismatch {
                columns: self.header.len(),
                widths: self.widths.len(),
            });
        }
        if let Some((row, cells)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != self.header.len())
        {
            return Err(TableError::RowMismatch {
                row,
                expected: self.header.len(),
                actual: cells.len(),
            });
        }
        if self.padding > MAX_PADDING {
            return Err(TableError::PaddingOutOfRange {
                padding: self.padding,
                max: MAX_PADDING,
            });
        }
        Ok(())
    }

    /// Characters each column occupies between two vertical glyphs.
    fn spans(&self) -> Result<Vec<usize>> {
        self.widths
            .iter()
            .enumerate()
            .map(|(column, &width)| {
                self.padding
                    .checked_mul(2)
                    .and_then(|margins| margins.checked_add(width))
                    .ok_or(TableError::WidthOverflow { column })
            })
            .collect()
    }

    /// Horizontal line, or `None` if the grid draws nothing for it.
    fn rule_line(&self, rule: Rule, spans: &[usize]) -> Option<String> {
        let glyphs = self.grid.rule(rule);
        if glyphs.is_empty() {
            return None;
        }
        let mut line = " ".repeat(self.padding);
        line.push_str(&glyphs.left);
        for (i, &span) in spans.iter().enumerate() {
            if i > 0 {
                line.push_str(&glyphs.junction);
            }
            line.push_str(&glyphs.fill.repeat(span));
        }
        line.push_str(&glyphs.right);
        line.push('\n');
        Some(line)
    }

    /// Header or data row with padded cells between vertical lines.
    fn row_line(&self, cells: &[String]) -> Result<String> {
        let border = self.grid.border();
        let inner = self.grid.inner();
        let margin = " ".repeat(self.padding);
        let last = cells.len().saturating_sub(1);

        let mut line = margin.clone();
        line.push_str(&border);
        for (column, (cell, &width)) in cells.iter().zip(&self.widths).enumerate() {
            let actual = cell.chars().count();
            let fill = width
                .checked_sub(actual)
                .ok_or(TableError::CellOverflow {
                    column,
                    width,
                    actual,
                })?;
            line.push_str(&margin);
            line.push_str(cell);
            line.push_str(&" ".repeat(fill));
            line.push_str(&margin);
            line.push_str(if column == last { &border } else { &inner });
        }
        line.push('\n');
        Ok(line)
    }
}
