use clap::Parser;
use std::path::PathBuf;

/// Builds an HTML relative-abundance report from taxonomic read counts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Wide-format CSV: lineage strings in the header, read counts in the first row.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Path of the HTML report to write.
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Sample name used in headings and for the exported CSV (defaults to the input file stem).
    #[arg(long, alias = "sample_name", value_name = "NAME")]
    pub sample_name: Option<String>,

    /// Image embedded in the report header.
    #[arg(long, value_name = "FILE")]
    pub logo: Option<PathBuf>,

    /// Report title.
    #[arg(long)]
    pub title: Option<String>,

    /// Report subtitle (defaults to today's date).
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Decimal places shown for relative abundances.
    #[arg(long, value_name = "N")]
    pub round_digits: Option<usize>,

    /// Pie-chart slices at or below this percentage are left unlabelled.
    #[arg(long, value_name = "PERCENT")]
    pub label_threshold: Option<f64>,

    /// Render the table only.
    #[arg(long)]
    pub no_pie_chart: bool,

    /// Skip writing the abundance CSV and its download link.
    #[arg(long)]
    pub no_csv_export: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_positional_only() {
        let args = vec!["taxa-report", "counts.csv", "report.html"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.input_file, PathBuf::from("counts.csv"));
        assert_eq!(cli.output_file, PathBuf::from("report.html"));
        assert!(cli.sample_name.is_none());
        assert!(cli.logo.is_none());
        assert!(!cli.no_pie_chart);
        assert!(!cli.no_csv_export);
    }

    #[test]
    fn test_cli_all_options() {
        let args = vec![
            "taxa-report",
            "counts.csv",
            "report.html",
            "--sample-name",
            "S1",
            "--logo",
            "logo.png",
            "--title",
            "My Report",
            "--subtitle",
            "Run 7",
            "--round-digits",
            "2",
            "--label-threshold",
            "5.5",
            "--no-pie-chart",
            "--no-csv-export",
        ];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.sample_name.as_deref(), Some("S1"));
        assert_eq!(cli.logo, Some(PathBuf::from("logo.png")));
        assert_eq!(cli.title.as_deref(), Some("My Report"));
        assert_eq!(cli.subtitle.as_deref(), Some("Run 7"));
        assert_eq!(cli.round_digits, Some(2));
        assert_eq!(cli.label_threshold, Some(5.5));
        assert!(cli.no_pie_chart);
        assert!(cli.no_csv_export);
    }

    #[test]
    fn test_cli_underscore_sample_name() {
        let args = vec!["taxa-report", "counts.csv", "report.html", "--sample_name", "S2"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.sample_name.as_deref(), Some("S2"));
    }

    #[test]
    #[should_panic] // Output file is required
    fn test_cli_missing_output() {
        let args = vec!["taxa-report", "counts.csv"];
        Cli::try_parse_from(args).unwrap();
    }
}
