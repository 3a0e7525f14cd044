//! Configuration loader
//!
//! Parses the YAML conversion description into an ordered sequence of
//! [`TableDescription`] values. Column options merge field-by-field into a
//! fixed set of recognized names; unknown keys are rejected rather than
//! silently admitted. No CSV file-system access happens here.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::model::{ColumnDescription, TableDescription};
use crate::utils::error::{TableError, TableResult};

/// Raw YAML shape of the conversion description
///
/// ```yaml
/// workdir: results
/// tables:
///   - run_a.csv:
///       columns:
///         - label: Mean
///           significant_digits: 2
///         - label: Comment
///           numerical: false
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDescription {
    workdir: String,
    tables: Vec<BTreeMap<String, RawTable>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    columns: Option<Vec<RawColumn>>,
    border: Option<bool>,
    header_hline: Option<bool>,
    row_hline: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawColumn {
    label: Option<String>,
    numerical: Option<bool>,
    significant_digits: Option<u32>,
    convert: Option<bool>,
    render: Option<bool>,
}

/// Read and parse a conversion description file
pub fn parse_description(path: &Path) -> TableResult<Vec<TableDescription>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        TableError::io(format!(
            "failed to read description {}: {}",
            path.display(),
            e
        ))
    })?;
    parse_description_str(&contents)
}

/// Parse a conversion description from a string
pub fn parse_description_str(contents: &str) -> TableResult<Vec<TableDescription>> {
    let raw: RawDescription =
        serde_yaml::from_str(contents).map_err(|e| TableError::config(e.to_string()))?;

    let workdir = Path::new(&raw.workdir);
    let mut descriptions = Vec::with_capacity(raw.tables.len());

    for entry in &raw.tables {
        let mut keys = entry.iter();
        let (filename, table) = match (keys.next(), keys.next()) {
            (Some(kv), None) => kv,
            _ => {
                return Err(TableError::config(
                    "each table entry must map exactly one filename to its options",
                ))
            }
        };

        let columns = table.columns.as_ref().ok_or_else(|| {
            TableError::config(format!("table '{}' is missing the `columns` list", filename))
        })?;

        let mut td = TableDescription::new(workdir.join(filename));
        if let Some(border) = table.border {
            td.border = border;
        }
        if let Some(header_hline) = table.header_hline {
            td.header_hline = header_hline;
        }
        if let Some(row_hline) = table.row_hline {
            td.row_hline = row_hline;
        }

        for (col_i, raw_col) in columns.iter().enumerate() {
            td.column_descriptions
                .push(build_column(raw_col, col_i, filename)?);
        }

        descriptions.push(td);
    }

    Ok(descriptions)
}

/// Merge one column-option mapping into the defaults
fn build_column(raw: &RawColumn, col_i: usize, filename: &str) -> TableResult<ColumnDescription> {
    let mut col = ColumnDescription::default();

    if let Some(ref label) = raw.label {
        col.label = label.clone();
    }
    if let Some(numerical) = raw.numerical {
        col.numerical = numerical;
    }
    if let Some(sig) = raw.significant_digits {
        if sig == 0 {
            return Err(TableError::config(format!(
                "column {} of table '{}': significant_digits must be at least 1",
                col_i, filename
            )));
        }
        col.significant_digits = sig;
    }
    if let Some(convert) = raw.convert {
        col.convert = convert;
    }
    if let Some(render) = raw.render {
        col.render = render;
    }

    Ok(col)
}
