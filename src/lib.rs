//! # textab
//!
//! CSV to LaTeX table generator driven by a declarative YAML description.
//!
//! ## Features
//!
//! - **Declarative**: one YAML description lists the CSV files to process and
//!   how to render each column (label, numeric formatting, inclusion)
//! - **Locale-Aware**: numerical fields parse under an explicit decimal
//!   format, no process-wide locale state
//! - **Significant Figures**: numerical columns round to a configurable
//!   number of significant digits
//! - **Complete Fragments**: output is a ready-to-include `table` environment
//!   with caption and label derived from the CSV file name
//! - **Encodings**: CSV files decode via any `encoding_rs` label
//!
//! ## Usage Examples
//!
//! ### Numeric parsing and rounding
//!
//! ```rust
//! use textab::{parse_decimal, round_sig, DecimalFormat};
//!
//! let format = DecimalFormat::comma();
//! let value = parse_decimal("1.234,5", &format).unwrap();
//! assert_eq!(value, 1234.5);
//! assert_eq!(round_sig(value, 2), 1200.0);
//! ```
//!
//! ### Loading a conversion description
//!
//! ```rust
//! let description = r#"
//! workdir: results
//! tables:
//!   - timings.csv:
//!       columns:
//!         - label: Mean
//!           significant_digits: 2
//!         - label: Host
//!           numerical: false
//! "#;
//!
//! let tables = textab::parse_description_str(description).unwrap();
//! assert_eq!(tables[0].col_count(), 2);
//! ```

/// Core pipeline modules
pub mod core;

/// Utility modules
pub mod utils;

// Re-export the pipeline surface
pub use crate::core::config::{parse_description, parse_description_str};
pub use crate::core::model::{ColumnDescription, TableDescription};
pub use crate::core::numeric::{format_value, parse_decimal, round_sig, DecimalFormat};
pub use crate::core::render::{convert_description, render_table, RenderOptions, RenderedTable};

// Re-export utilities
pub use crate::utils::error::{TableError, TableResult};
