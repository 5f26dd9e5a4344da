//! Error types for tstable.

use thiserror::Error;
use tstable_utils_printable::PrintableError;

/// Coarse classification of a [`TableError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed construction or mutation argument.
    InvalidInput,
    /// A named column or grid does not exist.
    NotFound,
    /// Internal invariant violation detected while rendering.
    Structural,
}

/// Table error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Header or row has no cells.
    #[error("{op}: {what} must not be empty")]
    Empty {
        op: &'static str,
        what: &'static str,
    },

    /// Header or row contains non-printable characters.
    #[error("{op}: {what} contains non-printable characters")]
    NonPrintable {
        op: &'static str,
        what: &'static str,
    },

    /// Row arity does not match the header.
    #[error("{op}: expected {expected} columns, got {actual}")]
    ColumnCount {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Padding below zero.
    #[error("{op}: padding must be at least 0, got {actual}")]
    NegativePadding { op: &'static str, actual: i64 },

    /// Padding above the supported maximum.
    #[error("{op}: padding must be at most {max}, got {actual}")]
    PaddingTooLarge {
        op: &'static str,
        actual: i64,
        max: usize,
    },

    /// Header or row failed the printable check.
    #[error(transparent)]
    Printable(#[from] PrintableError),

    /// Column name not present in the header.
    #[error("{op}: column '{name}' not found")]
    ColumnNotFound { op: &'static str, name: String },

    /// Grid name not present in the registry.
    #[error("unknown grid '{0}'")]
    UnknownGrid(String),

    /// Header length and width array length differ.
    #[error("render: {columns} columns but {widths} column widths")]
    WidthMismatch { columns: usize, widths: usize },

    /// A stored row does not match the header length.
    #[error("render: row {row} has {actual} columns, expected {expected}")]
    RowMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Stored padding exceeds the supported maximum.
    #[error("render: padding {padding} exceeds the maximum of {max}")]
    PaddingOutOfRange { padding: usize, max: usize },

    /// A column's line width does not fit in `usize`.
    #[error("render: width of column {column} overflows")]
    WidthOverflow { column: usize },

    /// A cell is wider than its column.
    #[error("render: column {column} is {width} wide but a cell has {actual} characters")]
    CellOverflow {
        column: usize,
        width: usize,
        actual: usize,
    },
}

impl TableError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::Empty { .. }
            | TableError::NonPrintable { .. }
            | TableError::ColumnCount { .. }
            | TableError::NegativePadding { .. }
            | TableError::PaddingTooLarge { .. }
            | TableError::Printable(_) => ErrorKind::InvalidInput,
            TableError::ColumnNotFound { .. } | TableError::UnknownGrid(_) => ErrorKind::NotFound,
            TableError::WidthMismatch { .. }
            | TableError::RowMismatch { .. }
            | TableError::PaddingOutOfRange { .. }
            | TableError::WidthOverflow { .. }
            | TableError::CellOverflow { .. } => ErrorKind::Structural,
        }
    }

    /// Check if this error was caused by a malformed argument.
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    /// Check if this error is an internal invariant violation.
    pub fn is_structural(&self) -> bool {
        self.kind() == ErrorKind::Structural
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
