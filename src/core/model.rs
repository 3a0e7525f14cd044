//! Table and column model
//!
//! Value types describing one source CSV and the per-column rendering rules.
//! Both are built fully by the configuration loader and consumed read-only by
//! the renderer.

use std::path::PathBuf;

/// Rendering and conversion rules for one CSV field position
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescription {
    /// Display string for the column header
    pub label: String,
    /// Whether values in this column are parsed and rounded as numbers
    pub numerical: bool,
    /// Rounding precision for numerical columns, in significant figures
    pub significant_digits: u32,
    /// Reserved flag for value conversion; accepted but not consulted
    pub convert: bool,
    /// Whether the column appears in the output at all
    pub render: bool,
}

impl Default for ColumnDescription {
    fn default() -> Self {
        ColumnDescription {
            label: String::new(),
            numerical: true,
            significant_digits: 3,
            convert: true,
            render: true,
        }
    }
}

/// One CSV source plus its ordered column rules and border options
///
/// The order of `column_descriptions` is significant: each CSV record is
/// consumed positionally against this sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDescription {
    /// Resolved path to the source CSV (workdir joined with filename)
    pub path: PathBuf,
    /// Whether the table has a full grid border
    pub border: bool,
    /// Whether a rule line follows the header row
    pub header_hline: bool,
    /// Whether a rule line follows every data row
    pub row_hline: bool,
    /// Ordered column rules, one per CSV field position
    pub column_descriptions: Vec<ColumnDescription>,
}

impl TableDescription {
    /// Create a description with default border options and no columns
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TableDescription {
            path: path.into(),
            border: true,
            header_hline: true,
            row_hline: false,
            column_descriptions: Vec::new(),
        }
    }

    /// Number of declared columns
    pub fn col_count(&self) -> usize {
        self.column_descriptions.len()
    }

    /// Number of columns that appear in the output
    pub fn rendered_col_count(&self) -> usize {
        self.column_descriptions
            .iter()
            .filter(|c| c.render)
            .count()
    }
}
