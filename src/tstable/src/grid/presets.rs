//! Predefined grids.

use super::Grid;

impl Grid {
    /// No grid. Tables render as aligned columns only.
    pub const EMPTY: Self = Self {
        inner_horizontal: None,
        border_horizontal: None,
        inner_vertical: None,
        border_vertical: None,
        inner_cross: None,
        left_tee: None,
        right_tee: None,
        top_tee: None,
        bottom_tee: None,
        top_left: None,
        bottom_left: None,
        top_right: None,
        bottom_right: None,
    };

    /// Double-lined border, single-lined inside.
    /// ```text
    /// ╔═══╤═══╗
    /// ║ a │ b ║
    /// ╟───┼───╢
    /// ╚═══╧═══╝
    /// ```
    pub const DOUBLE_BORDER: Self = Self::from_glyphs([
        '─', '═', '│', '║', '┼', '╟', '╢', '╤', '╧', '╔', '╚', '╗', '╝',
    ]);

    /// Double-lined horizontal lines.
    /// ```text
    /// ╒═══╤═══╕
    /// │ a │ b │
    /// ╞═══╪═══╡
    /// ╘═══╧═══╛
    /// ```
    pub const DOUBLE_HORIZONTAL: Self = Self::from_glyphs([
        '═', '═', '│', '│', '╪', '╞', '╡', '╤', '╧', '╒', '╘', '╕', '╛',
    ]);

    /// Double-lined vertical lines.
    /// ```text
    /// ╓───╥───╖
    /// ║ a ║ b ║
    /// ╟───╫───╢
    /// ╙───╨───╜
    /// ```
    pub const DOUBLE_VERTICAL: Self = Self::from_glyphs([
        '─', '─', '║', '║', '╫', '╟', '╢', '╥', '╨', '╓', '╙', '╖', '╜',
    ]);

    /// Double-lined everywhere.
    /// ```text
    /// ╔═══╦═══╗
    /// ║ a ║ b ║
    /// ╠═══╬═══╣
    /// ╚═══╩═══╝
    /// ```
    pub const DOUBLE: Self = Self::from_glyphs([
        '═', '═', '║', '║', '╬', '╠', '╣', '╦', '╩', '╔', '╚', '╗', '╝',
    ]);

    /// Single lines with rounded corners.
    /// ```text
    /// ╭───┬───╮
    /// │ a │ b │
    /// ├───┼───┤
    /// ╰───┴───╯
    /// ```
    pub const ROUNDED: Self = Self::from_glyphs([
        '─', '─', '│', '│', '┼', '├', '┤', '┬', '┴', '╭', '╰', '╮', '╯',
    ]);

    /// Single lines. The default grid of a new table.
    /// ```text
    /// ┌───┬───┐
    /// │ a │ b │
    /// ├───┼───┤
    /// └───┴───┘
    /// ```
    pub const SIMPLE: Self = Self::from_glyphs([
        '─', '─', '│', '│', '┼', '├', '┤', '┬', '┴', '┌', '└', '┐', '┘',
    ]);

    /// Heavy border, light inside.
    /// ```text
    /// ┏━━━┯━━━┓
    /// ┃ a │ b ┃
    /// ┠───┼───┨
    /// ┗━━━┷━━━┛
    /// ```
    pub const BOLD: Self = Self::from_glyphs([
        '─', '━', '│', '┃', '┼', '┠', '┨', '┯', '┷', '┏', '┗', '┓', '┛',
    ]);

    /// Double-dash lines with a heavy frame.
    pub const INTERRUPTED: Self = Self::from_glyphs([
        '╌', '╍', '╎', '╏', '┼', '┠', '┨', '┯', '┷', '┏', '┗', '┓', '┛',
    ]);

    /// Triple-dash lines with a heavy frame.
    pub const DASHED: Self = Self::from_glyphs([
        '┄', '┅', '┆', '┇', '┼', '┠', '┨', '┯', '┷', '┏', '┗', '┓', '┛',
    ]);

    /// Quadruple-dash lines with a heavy frame.
    pub const DOTTED: Self = Self::from_glyphs([
        '┈', '┉', '┊', '┋', '┼', '┠', '┨', '┯', '┷', '┏', '┗', '┓', '┛',
    ]);
}
