use crate::error::{CrateError, Result};
use log::warn;
use std::path::Path;

// One column of the wide input file after reshaping into long form.
#[derive(Debug, Clone, PartialEq)]
pub struct LineageCount {
    pub lineage: String,
    pub raw_count: String,
    pub read_count: Option<f64>,
}

/// Coerces a read-count cell to a number. Empty, non-numeric, non-finite and
/// negative values are treated as missing.
pub fn coerce_read_count(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|count| count.is_finite() && *count >= 0.0)
}

/// Why a cell was coerced to missing, for diagnostics.
pub fn missing_count_reason(raw: &str) -> &'static str {
    match raw.trim().parse::<f64>() {
        Ok(count) if !count.is_finite() => "is not a finite number",
        Ok(count) if count < 0.0 => "is negative",
        Ok(_) => "is valid",
        Err(_) => "is not numeric",
    }
}

// Loads a single-sample wide CSV: the header row holds lineage strings and the
// first data row holds the matching read counts. The first column is a
// placeholder (e.g. "subseq") and is dropped.
pub fn load_lineage_counts(file_path: &Path) -> Result<Vec<LineageCount>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let headers = reader.headers()?.clone();

    if headers.len() < 2 {
        return Err(CrateError::MalformedInput {
            path: file_path.to_path_buf(),
            reason: "header row has no lineage columns".to_string(),
        });
    }

    let mut records = reader.records();
    let counts = match records.next() {
        Some(result) => result?,
        None => {
            return Err(CrateError::MalformedInput {
                path: file_path.to_path_buf(),
                reason: "no read-count row after the header".to_string(),
            });
        }
    };

    let mut extra_rows = 0;
    for result in records {
        result?;
        extra_rows += 1;
    }
    if extra_rows > 0 {
        warn!(
            "{:?} holds {} additional data row(s); only the first sample row is used.",
            file_path, extra_rows
        );
    }

    let rows = headers
        .iter()
        .zip(counts.iter())
        .skip(1)
        .map(|(lineage, raw)| LineageCount {
            lineage: lineage.to_string(),
            raw_count: raw.to_string(),
            read_count: coerce_read_count(raw),
        })
        .collect();

    Ok(rows)
}
