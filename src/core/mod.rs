//! Core pipeline modules
//!
//! This module contains the table-generation pipeline:
//! - `config`: conversion-description loader
//! - `model`: table and column descriptions
//! - `numeric`: decimal parsing and significant-figure rounding
//! - `render`: CSV to LaTeX table renderer

pub mod config;
pub mod model;
pub mod numeric;
pub mod render;

// Re-export main types and functions
pub use config::{parse_description, parse_description_str};
pub use model::{ColumnDescription, TableDescription};
pub use numeric::{format_value, parse_decimal, round_sig, DecimalFormat};
pub use render::{convert_description, render_table, RenderOptions, RenderedTable};
