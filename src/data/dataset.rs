//! Loading training sets from disk.
//!
//! Two formats are accepted:
//! - JSON: an array of `{"input": <f64>, "label": 0|1}` objects. Entries are
//!   numbered from 1 in error messages.
//! - CSV:  UTF-8 rows of `input,label`. A first row with any non-numeric cell
//!   is treated as a header and skipped only when none of its cells is a
//!   number; any other first row is data. Blank lines are ignored.
//!
//! An empty file yields an empty set; `train` is the one that rejects it.
use std::path::Path;

use serde::Deserialize;

use crate::data::example::{Label, TrainingExample};
use crate::error::{PerceptronError, Result};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Loads a dataset, choosing the parser from the file extension
/// (`.csv` is CSV, anything else is JSON).
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingExample>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let text = std::fs::read_to_string(path)?;
    let examples = if is_csv { parse_csv(&text)? } else { parse_json(&text)? };

    log::debug!("loaded {} examples from {}", examples.len(), path.display());
    Ok(examples)
}

/// Parses a JSON array of examples.
///
/// Malformed JSON or missing fields fail with `Json`; a label outside
/// `{0, 1}` fails with `InvalidExample` naming the entry.
pub fn parse_json(text: &str) -> Result<Vec<TrainingExample>> {
    let rows: Vec<JsonRow> = serde_json::from_str(text)?;
    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| row.into_example().map_err(|e| at_row(e, idx + 1)))
        .collect()
}

pub fn parse_csv(text: &str) -> Result<Vec<TrainingExample>> {
    let mut lines = text.lines().enumerate().peekable();

    if let Some((_, first)) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    let mut examples = Vec::new();
    for (idx, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        examples.push(parse_row(line, idx + 1)?);
    }
    Ok(examples)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct JsonRow {
    input: f64,
    label: i64,
}

impl JsonRow {
    fn into_example(self) -> Result<TrainingExample> {
        let raw = u8::try_from(self.label).map_err(|_| {
            PerceptronError::InvalidExample(format!("label must be 0 or 1, got {}", self.label))
        })?;
        TrainingExample::new(self.input, Label::try_from(raw)?)
    }
}

/// A header has no numeric cell at all, e.g. `input,label`.
fn is_header(line: &str) -> bool {
    line.split(',').all(|c| c.trim().parse::<f64>().is_err())
}

fn parse_row(line: &str, row_num: usize) -> Result<TrainingExample> {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();
    if cells.len() != 2 {
        return Err(PerceptronError::InvalidExample(format!(
            "row {}: expected 2 columns (input,label), got {}",
            row_num,
            cells.len()
        )));
    }

    let input: f64 = cells[0].parse().map_err(|_| {
        PerceptronError::InvalidExample(format!(
            "row {}: '{}' is not a valid number",
            row_num, cells[0]
        ))
    })?;
    let raw_label: u8 = cells[1].parse().map_err(|_| {
        PerceptronError::InvalidExample(format!(
            "row {}: label '{}' is not 0 or 1",
            row_num, cells[1]
        ))
    })?;
    let label = Label::try_from(raw_label).map_err(|e| at_row(e, row_num))?;

    TrainingExample::new(input, label).map_err(|e| at_row(e, row_num))
}

fn at_row(err: PerceptronError, row_num: usize) -> PerceptronError {
    match err {
        PerceptronError::InvalidExample(msg) => {
            PerceptronError::InvalidExample(format!("row {row_num}: {msg}"))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn csv_with_header() {
        let data = parse_csv("raining,umbrella\n1,1\n\n0,0\n").unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].label(), Label::One);
        assert_eq!(data[1].input(), 0.0);
    }

    #[test]
    fn csv_without_header() {
        let data = parse_csv("0.5, 1\n-0.5, 0").unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1].input(), -0.5);
    }

    #[test]
    fn csv_errors_name_the_row() {
        let err = parse_csv("input,label\n1,1\n1,2\n").unwrap_err();
        assert!(err.to_string().contains("row 3"), "{err}");

        let err = parse_csv("1,1,1\n").unwrap_err();
        assert!(err.to_string().contains("expected 2 columns"), "{err}");
    }

    #[test]
    fn typo_in_first_row_is_an_error() {
        let err = parse_csv("1o,1\n0,0\n").unwrap_err();
        assert!(matches!(err, PerceptronError::InvalidExample(_)));
        assert!(err.to_string().contains("row 1"), "{err}");
    }

    #[test]
    fn json_array() {
        let data = parse_json(r#"[{"input": 1.0, "label": 1}, {"input": 0.0, "label": 0}]"#).unwrap();
        assert_eq!(data.len(), 2);
        assert!(matches!(parse_json(r#"[{"input": 1.0}]"#), Err(PerceptronError::Json(_))));
    }

    #[test]
    fn json_label_out_of_range_names_the_entry() {
        for bad in ["2", "-1", "300"] {
            let text = format!(r#"[{{"input": 1.0, "label": 1}}, {{"input": 0.0, "label": {bad}}}]"#);
            let err = parse_json(&text).unwrap_err();
            assert!(matches!(err, PerceptronError::InvalidExample(_)), "{bad}: {err:?}");
            assert!(err.to_string().contains("row 2"), "{err}");
        }
    }

    #[test]
    fn load_picks_parser_by_extension() {
        let mut csv = NamedTempFile::with_suffix(".csv").unwrap();
        write!(csv, "1,1\n0,0\n").unwrap();
        assert_eq!(load(csv.path()).unwrap().len(), 2);

        let mut json = NamedTempFile::with_suffix(".json").unwrap();
        write!(json, r#"[{{"input": 0.25, "label": 1}}]"#).unwrap();
        assert_eq!(load(json.path()).unwrap()[0].input(), 0.25);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(load(&missing), Err(PerceptronError::Io(_))));
    }
}
