//! Integration tests for the full description → LaTeX pipeline

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use textab::{
    convert_description, render_table, DecimalFormat, RenderOptions, TableError,
};

fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "textab-it-{}-{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn point_options() -> RenderOptions {
    RenderOptions {
        decimal: DecimalFormat::point(),
        ..Default::default()
    }
}

// ============================================================================
// Full Pipeline
// ============================================================================

#[test]
fn test_two_column_table_end_to_end() {
    let dir = fixture_dir("worked-example");
    fs::write(dir.join("data.csv"), "1234.5;hello\n0;world\n").unwrap();

    let description = format!(
        "\
workdir: \"{}\"
tables:
  - data.csv:
      columns:
        - label: A
          significant_digits: 2
        - label: B
          numerical: false
",
        dir.display()
    );
    let description_path = dir.join("tables.yml");
    fs::write(&description_path, description).unwrap();

    let rendered = convert_description(&description_path, &point_options()).unwrap();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].source, dir.join("data.csv"));

    let expected = "\
\\begin{table}[H]
    \\centering
    \\begin{tabular}{|l|l|}
        \\hline
        A & B \\\\
        \\hline
        1200 & hello \\\\
        0.0 & world \\\\
        \\hline
    \\end{tabular}
    \\caption{data}
    \\label{table:data.csv}
\\end{table}
";
    assert_eq!(rendered[0].content, expected);
}

#[test]
fn test_tables_render_in_description_order() {
    let dir = fixture_dir("order");
    fs::write(dir.join("second.csv"), "2\n").unwrap();
    fs::write(dir.join("first.csv"), "1\n").unwrap();

    let description = format!(
        "\
workdir: \"{}\"
tables:
  - second.csv:
      columns:
        - label: N
  - first.csv:
      columns:
        - label: N
",
        dir.display()
    );
    let description_path = dir.join("tables.yml");
    fs::write(&description_path, description).unwrap();

    let rendered = convert_description(&description_path, &point_options()).unwrap();
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].source, dir.join("second.csv"));
    assert_eq!(rendered[1].source, dir.join("first.csv"));
    assert!(rendered[0].content.contains("\\caption{second}"));
    assert!(rendered[1].content.contains("\\caption{first}"));
}

#[test]
fn test_skip_header_reduces_row_count_by_one() {
    let dir = fixture_dir("skip-header");
    fs::write(dir.join("data.csv"), "Header\none\ntwo\nthree\n").unwrap();

    let description = format!(
        "\
workdir: \"{}\"
tables:
  - data.csv:
      columns:
        - label: Word
          numerical: false
",
        dir.display()
    );
    let description_path = dir.join("tables.yml");
    fs::write(&description_path, description).unwrap();

    let options = RenderOptions {
        skip_header: true,
        ..point_options()
    };
    let rendered = convert_description(&description_path, &options).unwrap();
    let content = &rendered[0].content;

    assert!(!content.contains("Header"));
    // Header row + 3 data rows = 4 row terminators
    assert_eq!(content.matches(" \\\\\n").count(), 4);
}

#[test]
fn test_round_trip_of_raw_fields() {
    let dir = fixture_dir("round-trip");
    fs::write(dir.join("raw.csv"), "x 1;y,2\n  z  ;w.4\n").unwrap();

    let description = format!(
        "\
workdir: \"{}\"
tables:
  - raw.csv:
      columns:
        - label: Left
          numerical: false
        - label: Right
          numerical: false
",
        dir.display()
    );
    let description_path = dir.join("tables.yml");
    fs::write(&description_path, description).unwrap();

    let rendered = convert_description(&description_path, &point_options()).unwrap();
    let content = &rendered[0].content;

    assert!(content.contains("        x 1 & y,2 \\\\\n"));
    assert!(content.contains("          z   & w.4 \\\\\n"));
}

// ============================================================================
// Failure Semantics
// ============================================================================

#[test]
fn test_missing_csv_aborts_run() {
    let dir = fixture_dir("missing-csv");
    let description = format!(
        "\
workdir: \"{}\"
tables:
  - absent.csv:
      columns:
        - label: A
",
        dir.display()
    );
    let description_path = dir.join("tables.yml");
    fs::write(&description_path, description).unwrap();

    let err = convert_description(&description_path, &point_options()).unwrap_err();
    assert!(matches!(err, TableError::Io { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn test_failing_table_aborts_before_later_tables() {
    let dir = fixture_dir("eager-abort");
    fs::write(dir.join("bad.csv"), "not-a-number\n").unwrap();
    fs::write(dir.join("good.csv"), "5\n").unwrap();

    let description = format!(
        "\
workdir: \"{}\"
tables:
  - bad.csv:
      columns:
        - label: V
  - good.csv:
      columns:
        - label: V
",
        dir.display()
    );
    let description_path = dir.join("tables.yml");
    fs::write(&description_path, description).unwrap();

    let err = convert_description(&description_path, &point_options()).unwrap_err();
    match err {
        TableError::Conversion { value, row, column, .. } => {
            assert_eq!(value, "not-a-number");
            assert_eq!(row, 0);
            assert_eq!(column, 0);
        }
        other => panic!("expected conversion error, got {}", other),
    }
}

#[test]
fn test_short_row_error_names_row_and_column() {
    let dir = fixture_dir("short-row");
    let csv_path = dir.join("data.csv");
    fs::write(&csv_path, "1;2\n3;4\n5\n").unwrap();

    let description = format!(
        "\
workdir: \"{}\"
tables:
  - data.csv:
      columns:
        - label: A
        - label: B
",
        dir.display()
    );
    let description_path = dir.join("tables.yml");
    fs::write(&description_path, description).unwrap();

    let err = convert_description(&description_path, &point_options()).unwrap_err();
    match err {
        TableError::Structure { column, row, path } => {
            assert_eq!(column, 1);
            assert_eq!(row, 2);
            assert_eq!(path, csv_path);
        }
        other => panic!("expected structure error, got {}", other),
    }
}

// ============================================================================
// Numeric Conventions
// ============================================================================

#[test]
fn test_german_locale_values_round_to_significant_digits() {
    let dir = fixture_dir("german");
    fs::write(dir.join("messung.csv"), "1.234,56;0,004567\n;1,5\n").unwrap();

    let description = format!(
        "\
workdir: \"{}\"
tables:
  - messung.csv:
      columns:
        - label: Gro\u{df}
          significant_digits: 3
        - label: Klein
          significant_digits: 2
",
        dir.display()
    );
    let description_path = dir.join("tables.yml");
    fs::write(&description_path, description).unwrap();

    // Default options carry the comma-decimal convention
    let rendered = convert_description(&description_path, &RenderOptions::default()).unwrap();
    let content = &rendered[0].content;

    assert!(content.contains("        1230 & 0.0046 \\\\\n"));
    assert!(content.contains("        0.0 & 1.5 \\\\\n"));
}

#[test]
fn test_quoted_fields_respect_quote_char() {
    let dir = fixture_dir("quoting");
    fs::write(dir.join("data.csv"), "\"semi;colon\";plain\n").unwrap();

    let description = format!(
        "\
workdir: \"{}\"
tables:
  - data.csv:
      columns:
        - label: A
          numerical: false
        - label: B
          numerical: false
",
        dir.display()
    );
    let description_path = dir.join("tables.yml");
    fs::write(&description_path, description).unwrap();

    let rendered = convert_description(&description_path, &point_options()).unwrap();
    assert!(rendered[0].content.contains("        semi;colon & plain \\\\\n"));
}

// ============================================================================
// Renderer Surface
// ============================================================================

#[test]
fn test_render_table_directly() {
    use textab::{ColumnDescription, TableDescription};

    let dir = fixture_dir("direct");
    let csv_path = dir.join("direct.csv");
    fs::write(&csv_path, "42\n").unwrap();

    let mut td = TableDescription::new(csv_path);
    td.column_descriptions = vec![ColumnDescription {
        label: "Answer".to_string(),
        significant_digits: 2,
        ..Default::default()
    }];

    let content = render_table(&td, &point_options()).unwrap();
    assert!(content.contains("        Answer \\\\\n"));
    assert!(content.contains("        42 \\\\\n"));
}
