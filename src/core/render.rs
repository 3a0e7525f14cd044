//! Table renderer
//!
//! Consumes one [`TableDescription`], reads the associated CSV and produces a
//! complete LaTeX table fragment. The renderer writes no files; the returned
//! string is handed to the caller's writer.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::core::config;
use crate::core::model::TableDescription;
use crate::core::numeric::{format_value, parse_decimal, round_sig, DecimalFormat};
use crate::utils::error::{TableError, TableResult};

/// Global CSV parsing parameters, shared by every table of a run
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Character encoding label for the CSV files (e.g. `utf-8`, `latin1`)
    pub encoding: String,
    /// CSV field delimiter
    pub delimiter: u8,
    /// CSV quote character
    pub quote: u8,
    /// Discard the first record of every CSV
    pub skip_header: bool,
    /// Numeric convention for numerical columns
    pub decimal: DecimalFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            encoding: "utf-8".to_string(),
            delimiter: b';',
            quote: b'"',
            skip_header: false,
            decimal: DecimalFormat::default(),
        }
    }
}

/// One rendered table fragment plus the CSV it came from
#[derive(Debug, Clone)]
pub struct RenderedTable {
    /// Path of the source CSV, as resolved by the configuration loader
    pub source: PathBuf,
    /// The LaTeX fragment
    pub content: String,
}

/// Load a conversion description and render every table it names, in order
///
/// The first failing table aborts the run; nothing is returned for it or any
/// table after it.
pub fn convert_description(
    path: &Path,
    options: &RenderOptions,
) -> TableResult<Vec<RenderedTable>> {
    let tables = config::parse_description(path)?;
    let mut rendered = Vec::with_capacity(tables.len());
    for td in &tables {
        rendered.push(RenderedTable {
            source: td.path.clone(),
            content: render_table(td, options)?,
        });
    }
    Ok(rendered)
}

/// Render one table description to a LaTeX fragment
pub fn render_table(td: &TableDescription, options: &RenderOptions) -> TableResult<String> {
    let encoding = Encoding::for_label(options.encoding.as_bytes()).ok_or_else(|| {
        TableError::config(format!("unknown encoding label '{}'", options.encoding))
    })?;

    if td.rendered_col_count() == 0 {
        return Err(TableError::config(format!(
            "table {} has no renderable columns",
            td.path.display()
        )));
    }

    let bytes = fs::read(&td.path)
        .map_err(|e| TableError::io(format!("failed to read {}: {}", td.path.display(), e)))?;
    let (text, _, _) = encoding.decode(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    if options.skip_header {
        if let Some(first) = records.next() {
            first.map_err(|e| csv_read_error(&td.path, &e))?;
        }
    }

    let mut rows = String::new();
    for (row_i, record) in records.enumerate() {
        let record = record.map_err(|e| csv_read_error(&td.path, &e))?;
        rows.push_str(&render_row(td, &record, row_i, options)?);
    }

    Ok(assemble_fragment(td, &rows))
}

fn csv_read_error(path: &Path, err: &csv::Error) -> TableError {
    TableError::io(format!("failed to read {}: {}", path.display(), err))
}

/// Render one data record against the table's column sequence
fn render_row(
    td: &TableDescription,
    record: &csv::StringRecord,
    row_i: usize,
    options: &RenderOptions,
) -> TableResult<String> {
    let mut cells = Vec::with_capacity(td.rendered_col_count());

    for (col_i, col) in td.column_descriptions.iter().enumerate() {
        let field = record
            .get(col_i)
            .ok_or_else(|| TableError::structure(col_i, row_i, &td.path))?;

        if !col.render {
            continue;
        }

        if col.numerical {
            // An empty field counts as zero, not as a conversion error
            let value = if field.is_empty() {
                0.0
            } else {
                parse_decimal(field, &options.decimal)
                    .ok_or_else(|| TableError::conversion(field, col_i, row_i, &td.path))?
            };
            cells.push(format_value(round_sig(value, col.significant_digits)));
        } else {
            cells.push(field.to_string());
        }
    }

    let mut row = format!("        {} \\\\\n", cells.join(" & "));
    if td.row_hline {
        row.push_str("        \\hline\n");
    }
    Ok(row)
}

/// Assemble the complete fragment around the rendered data rows
fn assemble_fragment(td: &TableDescription, rows: &str) -> String {
    let rendered = td.rendered_col_count();
    let col_spec = if td.border {
        let mut spec = "|l".repeat(rendered);
        spec.push('|');
        spec
    } else {
        "l".repeat(rendered)
    };

    let labels: Vec<&str> = td
        .column_descriptions
        .iter()
        .filter(|c| c.render)
        .map(|c| c.label.as_str())
        .collect();

    let file_name = td
        .path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("table");
    let stem = td
        .path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table");
    let caption = stem.replace('_', " ");

    let mut out = String::new();
    out.push_str("\\begin{table}[H]\n");
    out.push_str("    \\centering\n");
    out.push_str(&format!("    \\begin{{tabular}}{{{}}}\n", col_spec));
    if td.border {
        out.push_str("        \\hline\n");
    }
    out.push_str(&format!("        {} \\\\\n", labels.join(" & ")));
    if td.header_hline {
        out.push_str("        \\hline\n");
    }
    out.push_str(rows);
    if td.border {
        out.push_str("        \\hline\n");
    }
    out.push_str("    \\end{tabular}\n");
    out.push_str(&format!("    \\caption{{{}}}\n", caption));
    out.push_str(&format!("    \\label{{table:{}}}\n", file_name));
    out.push_str("\\end{table}\n");
    out
}
