//! Relative-abundance computation over parsed lineage counts.
use crate::csv_handler::{LineageCount, missing_count_reason};
use crate::taxon::lineage::parse_organism_name;
use crate::taxon::normalizer::display_name;
use log::{debug, warn};

/// A lineage column whose genus and species were both found.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonRecord {
    pub organism_name: String,
    pub read_count: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbundanceRow {
    pub organism_name: String,
    pub display_name: String,
    pub read_count: f64,
    /// Percent of the table's total read count, unrounded.
    pub relative_abundance: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbundanceTable {
    pub rows: Vec<AbundanceRow>,
    pub total_read_count: f64,
}

impl AbundanceTable {
    /// True when no abundance could be computed (no valid rows or a zero total).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Chart labels in row order, with rows at or below `threshold_percent` left blank.
    pub fn chart_labels(&self, threshold_percent: f64) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| chart_label(row, threshold_percent))
            .collect()
    }
}

/// Keeps the columns whose lineage names both a genus and a species.
pub fn extract_taxon_records(rows: &[LineageCount]) -> Vec<TaxonRecord> {
    rows.iter()
        .filter_map(|row| match parse_organism_name(&row.lineage) {
            Some(organism_name) => {
                if row.read_count.is_none() {
                    warn!(
                        "Read count {:?} for {} {}; it is excluded from abundances.",
                        row.raw_count,
                        organism_name,
                        missing_count_reason(&row.raw_count)
                    );
                }
                Some(TaxonRecord {
                    organism_name,
                    read_count: row.read_count,
                })
            }
            None => {
                debug!("Dropping lineage without genus/species: {:?}", row.lineage);
                None
            }
        })
        .collect()
}

/// Computes `100 * count / total` for every record with a numeric count. The
/// total only covers those records; a zero total yields an empty table.
pub fn compute_abundances(records: &[TaxonRecord]) -> AbundanceTable {
    let counted: Vec<(&TaxonRecord, f64)> = records
        .iter()
        .filter_map(|record| match record.read_count {
            Some(count) => Some((record, count)),
            None => {
                debug!("Skipping {}: no numeric read count.", record.organism_name);
                None
            }
        })
        .collect();

    let total_read_count: f64 = counted.iter().map(|(_, count)| count).sum();
    if !total_read_count.is_finite() {
        warn!("Total read count overflows; no abundances computed.");
        return AbundanceTable {
            rows: Vec::new(),
            total_read_count,
        };
    }
    if total_read_count <= 0.0 {
        warn!("Total read count is zero; no abundances computed.");
        return AbundanceTable {
            rows: Vec::new(),
            total_read_count,
        };
    }

    let rows = counted
        .into_iter()
        .map(|(record, read_count)| AbundanceRow {
            organism_name: record.organism_name.clone(),
            display_name: display_name(&record.organism_name),
            read_count,
            relative_abundance: 100.0 * read_count / total_read_count,
        })
        .collect();

    AbundanceTable {
        rows,
        total_read_count,
    }
}

/// The row's display name if its abundance is strictly above the threshold,
/// otherwise an empty label.
pub fn chart_label(row: &AbundanceRow, threshold_percent: f64) -> String {
    if row.relative_abundance > threshold_percent {
        display_name(&row.organism_name)
    } else {
        String::new()
    }
}
