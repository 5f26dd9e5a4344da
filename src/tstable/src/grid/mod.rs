//! Line-drawing grids for table rendering.
//!
//! A [`Grid`] holds the thirteen glyphs a table is drawn with. Any glyph may be
//! absent; absent glyphs render as nothing, and a grid without any glyph
//! renders a table as plain aligned columns.
//!
//! ```text
//! ┌───┬───┐  top_left, border_horizontal, top_tee, top_right
//! │ a │ b │  border_vertical, inner_vertical
//! ├───┼───┤  left_tee, inner_horizontal, inner_cross, right_tee
//! │ c │ d │
//! └───┴───┘  bottom_left, border_horizontal, bottom_tee, bottom_right
//! ```

mod presets;
mod style;

use serde::{Deserialize, Serialize};
use tstable_utils_printable::rune_to_printable;

pub use style::GridStyle;

/// The glyphs used to draw a table grid.
///
/// The header row is separated from the data rows by an inner horizontal line.
/// Data rows have no lines between them. Columns are divided by inner vertical
/// lines and the whole table is framed by the border glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Grid {
    /// Line between the header and the rows.
    pub inner_horizontal: Option<char>,
    /// Line at the top and bottom of the table.
    pub border_horizontal: Option<char>,
    /// Line between columns.
    pub inner_vertical: Option<char>,
    /// Line at the left and right side of the table.
    pub border_vertical: Option<char>,
    /// Crossing of the header separator and a column line.
    pub inner_cross: Option<char>,
    /// Left end of the header separator.
    pub left_tee: Option<char>,
    /// Right end of the header separator.
    pub right_tee: Option<char>,
    /// Column line meeting the top border.
    pub top_tee: Option<char>,
    /// Column line meeting the bottom border.
    pub bottom_tee: Option<char>,
    /// Upper left corner of the table.
    pub top_left: Option<char>,
    /// Lower left corner of the table.
    pub bottom_left: Option<char>,
    /// Upper right corner of the table.
    pub top_right: Option<char>,
    /// Lower right corner of the table.
    pub bottom_right: Option<char>,
}

/// A horizontal line of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Top border above the header.
    Top,
    /// Separator between header and rows.
    Separator,
    /// Bottom border below the last row.
    Bottom,
}

/// Printable glyphs of one horizontal line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleGlyphs {
    pub left: String,
    pub fill: String,
    pub junction: String,
    pub right: String,
}

impl RuleGlyphs {
    /// Returns true if the line would draw nothing.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
            && self.fill.is_empty()
            && self.junction.is_empty()
            && self.right.is_empty()
    }
}

/// Renders an optional glyph, dropping non-printable characters.
fn glyph(c: Option<char>) -> String {
    c.map(rune_to_printable).unwrap_or_default()
}

impl Grid {
    /// Builds a grid with every glyph set.
    ///
    /// Glyph order: inner horizontal, border horizontal, inner vertical,
    /// border vertical, inner cross, left tee, right tee, top tee, bottom tee,
    /// top left, bottom left, top right, bottom right.
    pub const fn from_glyphs(g: [char; 13]) -> Self {
        Self {
            inner_horizontal: Some(g[0]),
            border_horizontal: Some(g[1]),
            inner_vertical: Some(g[2]),
            border_vertical: Some(g[3]),
            inner_cross: Some(g[4]),
            left_tee: Some(g[5]),
            right_tee: Some(g[6]),
            top_tee: Some(g[7]),
            bottom_tee: Some(g[8]),
            top_left: Some(g[9]),
            bottom_left: Some(g[10]),
            top_right: Some(g[11]),
            bottom_right: Some(g[12]),
        }
    }

    /// Returns true if no glyph renders as a visible character.
    pub fn is_empty(&self) -> bool {
        [
            self.inner_horizontal,
            self.border_horizontal,
            self.inner_vertical,
            self.border_vertical,
            self.inner_cross,
            self.left_tee,
            self.right_tee,
            self.top_tee,
            self.bottom_tee,
            self.top_left,
            self.bottom_left,
            self.top_right,
            self.bottom_right,
        ]
        .into_iter()
        .all(|c| glyph(c).is_empty())
    }

    /// Returns the glyphs of the given horizontal line.
    pub fn rule(&self, rule: Rule) -> RuleGlyphs {
        let (left, fill, junction, right) = match rule {
            Rule::Top => (
                self.top_left,
                self.border_horizontal,
                self.top_tee,
                self.top_right,
            ),
            Rule::Separator => (
                self.left_tee,
                self.inner_horizontal,
                self.inner_cross,
                self.right_tee,
            ),
            Rule::Bottom => (
                self.bottom_left,
                self.border_horizontal,
                self.bottom_tee,
                self.bottom_right,
            ),
        };
        RuleGlyphs {
            left: glyph(left),
            fill: glyph(fill),
            junction: glyph(junction),
            right: glyph(right),
        }
    }

    /// Glyph at the left and right edge of a row.
    pub fn border(&self) -> String {
        glyph(self.border_vertical)
    }

    /// Glyph between two cells of a row.
    pub fn inner(&self) -> String {
        glyph(self.inner_vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_draws_nothing() {
        assert!(Grid::EMPTY.is_empty());
        assert!(Grid::default().is_empty());
        for rule in [Rule::Top, Rule::Separator, Rule::Bottom] {
            assert!(Grid::EMPTY.rule(rule).is_empty());
        }
        assert_eq!(Grid::EMPTY.border(), "");
        assert_eq!(Grid::EMPTY.inner(), "");
    }

    #[test]
    fn test_simple_rules() {
        let top = Grid::SIMPLE.rule(Rule::Top);
        assert_eq!(top.left, "┌");
        assert_eq!(top.fill, "─");
        assert_eq!(top.junction, "┬");
        assert_eq!(top.right, "┐");

        let sep = Grid::SIMPLE.rule(Rule::Separator);
        assert_eq!(sep.left, "├");
        assert_eq!(sep.junction, "┼");
        assert_eq!(sep.right, "┤");

        let bottom = Grid::SIMPLE.rule(Rule::Bottom);
        assert_eq!(bottom.left, "└");
        assert_eq!(bottom.junction, "┴");
        assert_eq!(bottom.right, "┘");
    }

    #[test]
    fn test_separator_uses_inner_horizontal() {
        assert_eq!(Grid::DOUBLE_BORDER.rule(Rule::Separator).fill, "─");
        assert_eq!(Grid::DOUBLE_BORDER.rule(Rule::Top).fill, "═");
        assert_eq!(Grid::DOUBLE_BORDER.border(), "║");
        assert_eq!(Grid::DOUBLE_BORDER.inner(), "│");
    }

    #[test]
    fn test_non_printable_glyphs_are_dropped() {
        let grid = Grid {
            border_vertical: Some('\n'),
            inner_vertical: Some('\u{200B}'),
            ..Grid::default()
        };
        assert!(grid.is_empty());
        assert_eq!(grid.border(), "");
    }

    #[test]
    fn test_partial_grid() {
        let grid = Grid {
            inner_vertical: Some('|'),
            ..Grid::default()
        };
        assert!(!grid.is_empty());
        assert!(grid.rule(Rule::Top).is_empty());
        assert_eq!(grid.inner(), "|");
    }

    #[test]
    fn test_from_glyphs_order() {
        let grid = Grid::from_glyphs([
            'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
        ]);
        assert_eq!(grid.inner_horizontal, Some('a'));
        assert_eq!(grid.border_vertical, Some('d'));
        assert_eq!(grid.bottom_tee, Some('i'));
        assert_eq!(grid.bottom_right, Some('m'));
    }
}
