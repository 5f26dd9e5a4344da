//! Aligned text tables with pluggable line-drawing grids.
//!
//! ```text
//!   ┌─────────────────────┬────────────────────────────────┬────────────────┐
//!   │  Fellowship member  │  Title                         │  Weapon        │
//!   ├─────────────────────┼────────────────────────────────┼────────────────┤
//!   │  Gimli              │  Lord of the Glittering Caves  │  Axe           │
//!   │  Gandalf            │  The Grey                      │  Wizard staff  │
//!   └─────────────────────┴────────────────────────────────┴────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tstable::{Grid, Table};
//!
//! let mut table = Table::new(["Fellowship member", "Title", "Weapon"])?;
//! table.add_row(["Gandalf", "The Grey", "Wizard staff"])?;
//! table.add_row(["Gimli", "Lord of the Glittering Caves", "Axe"])?;
//! table.sort_by("Weapon")?;
//! table.set_grid(Grid::ROUNDED);
//! print!("{}", table.render()?);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod table;

pub use config::{ConfigError, GridSpec, TableConfig};
pub use error::{ErrorKind, Result, TableError};
pub use grid::{Grid, GridStyle, Rule, RuleGlyphs};
pub use table::{DEFAULT_PADDING, MAX_PADDING, Table};
