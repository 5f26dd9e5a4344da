//! Table input files.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Header and rows of a table, as read from JSON.
///
/// ```json
/// { "header": ["Name", "Weapon"], "rows": [["Gandalf", "Staff"]] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInput {
    pub header: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl TableInput {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// The sample table shown when no input file is given.
    pub fn fellowship() -> Self {
        let row = |cells: [&str; 3]| Vec::from(cells.map(String::from));
        Self {
            header: row(["Fellowship member", "Title", "Weapon"]),
            rows: vec![
                row(["Gandalf", "The Grey", "Wizard staff"]),
                row(["Aragorn", "King of Gondor", "Sword"]),
                row(["Legolas", "Prince of the Woodland Realm", "Bow"]),
                row(["Gimli", "Lord of the Glittering Caves", "Axe"]),
                row(["Boromir", "Captain of the White Tower", "Sword"]),
            ],
        }
    }
}
