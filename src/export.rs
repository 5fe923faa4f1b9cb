//! CSV export of the computed abundances.
use crate::abundance::AbundanceTable;
use crate::error::Result;
use serde::{Deserialize, Serialize, Serializer};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportRow {
    #[serde(rename = "Organism")]
    pub organism: String,
    #[serde(rename = "Read_Count", serialize_with = "serialize_count")]
    pub read_count: f64,
    #[serde(rename = "Relative_Abundance")]
    pub relative_abundance: f64,
}

/// Where the CSV lands: next to the HTML report, so the page's relative
/// download link resolves.
pub fn export_path(report_path: &Path, csv_file_name: &str) -> PathBuf {
    report_path.with_file_name(csv_file_name)
}

pub fn write_abundance_csv<W: Write>(table: &AbundanceTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    if table.is_empty() {
        writer.write_record(["Organism", "Read_Count", "Relative_Abundance"])?;
    }
    for row in &table.rows {
        writer.serialize(ExportRow {
            organism: row.display_name.clone(),
            read_count: row.read_count,
            relative_abundance: row.relative_abundance,
        })?;
    }
    writer.flush()?;
    Ok(())
}

// Whole counts are written without a fractional part ("100", not "100.0").
fn serialize_count<S>(count: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if count.fract() == 0.0 && *count < 9_007_199_254_740_992.0 {
        serializer.serialize_u64(*count as u64)
    } else {
        serializer.serialize_f64(*count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abundance::{TaxonRecord, compute_abundances};
    use tempfile::tempdir;

    fn table() -> AbundanceTable {
        compute_abundances(&[
            TaxonRecord {
                organism_name: "Escherichia coli O157:H7".to_string(),
                read_count: Some(100.0),
            },
            TaxonRecord {
                organism_name: "Bacillus subtilis".to_string(),
                read_count: Some(50.0),
            },
            TaxonRecord {
                organism_name: "Listeria monocytogenes".to_string(),
                read_count: Some(3.0),
            },
        ])
    }

    #[test]
    fn writes_header_and_rows() {
        let mut buffer = Vec::new();
        write_abundance_csv(&table(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Organism,Read_Count,Relative_Abundance"));
        assert!(lines.next().unwrap().starts_with("Escherichia coli,100,65.359"));
        assert!(lines.next().unwrap().starts_with("Bacillus subtilis,50,32.679"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn fractional_counts_keep_their_decimals() {
        let table = compute_abundances(&[TaxonRecord {
            organism_name: "Vibrio cholerae".to_string(),
            read_count: Some(12.5),
        }]);
        let mut buffer = Vec::new();
        write_abundance_csv(&table, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Vibrio cholerae,12.5,100"));
    }

    #[test]
    fn empty_table_still_has_header() {
        let mut buffer = Vec::new();
        write_abundance_csv(&AbundanceTable::default(), &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Organism,Read_Count,Relative_Abundance\n"
        );
    }

    #[test]
    fn round_trip_reproduces_abundances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("S1.csv");
        let original = table();
        write_abundance_csv(&original, std::fs::File::create(&path).unwrap()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<ExportRow> = reader.deserialize().map(|r| r.unwrap()).collect();
        let records: Vec<TaxonRecord> = rows
            .iter()
            .map(|row| TaxonRecord {
                organism_name: row.organism.clone(),
                read_count: Some(row.read_count),
            })
            .collect();
        let recomputed = compute_abundances(&records);

        assert_eq!(recomputed.rows.len(), original.rows.len());
        let pairs = rows.iter().zip(&recomputed.rows).zip(&original.rows);
        for ((exported, again), first) in pairs {
            assert!((exported.relative_abundance - again.relative_abundance).abs() < 1e-9);
            assert!((exported.relative_abundance - first.relative_abundance).abs() < 1e-9);
        }
    }

    #[test]
    fn export_sits_next_to_report() {
        assert_eq!(
            export_path(Path::new("out/report.html"), "S1.csv"),
            PathBuf::from("out/S1.csv")
        );
        assert_eq!(
            export_path(Path::new("report.html"), "S1.csv"),
            PathBuf::from("S1.csv")
        );
    }
}
