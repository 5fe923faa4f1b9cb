//! Report settings shared by the table, chart and page renderers.
use crate::cli::Cli;
use chrono::Utc;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "Microbial ID Report";
pub const DEFAULT_ROUND_DIGITS: usize = 1;
pub const DEFAULT_LABEL_THRESHOLD_PERCENT: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub abundance_round_digits: usize,
    pub label_threshold_percent: f64,
    pub include_pie_chart: bool,
    pub include_csv_export: bool,
    pub title: String,
    pub subtitle: String,
    pub sample_name: String,
    pub logo_path: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            abundance_round_digits: DEFAULT_ROUND_DIGITS,
            label_threshold_percent: DEFAULT_LABEL_THRESHOLD_PERCENT,
            include_pie_chart: true,
            include_csv_export: true,
            title: DEFAULT_TITLE.to_string(),
            subtitle: today(),
            sample_name: "sample".to_string(),
            logo_path: None,
        }
    }
}

impl ReportConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            abundance_round_digits: cli
                .round_digits
                .unwrap_or(defaults.abundance_round_digits),
            label_threshold_percent: cli
                .label_threshold
                .unwrap_or(defaults.label_threshold_percent),
            include_pie_chart: !cli.no_pie_chart,
            include_csv_export: !cli.no_csv_export,
            title: cli.title.clone().unwrap_or(defaults.title),
            subtitle: cli.subtitle.clone().unwrap_or(defaults.subtitle),
            sample_name: cli
                .sample_name
                .clone()
                .unwrap_or_else(|| sample_name_from_path(&cli.input_file)),
            logo_path: cli.logo.clone(),
        }
    }

    /// File name of the abundance CSV, also used as the download link target.
    pub fn csv_file_name(&self) -> String {
        format!("{}_abundances.csv", self.sample_name)
    }
}

fn sample_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sample")
        .to_string()
}

fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_follow_cli() {
        let cli = Cli::parse_from(["taxa-report", "data/S7_counts.csv", "out.html"]);
        let config = ReportConfig::from_cli(&cli);
        assert_eq!(config.abundance_round_digits, 1);
        assert_eq!(config.label_threshold_percent, 10.0);
        assert!(config.include_pie_chart);
        assert!(config.include_csv_export);
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.subtitle.len(), "2024-01-31".len());
        assert_eq!(config.sample_name, "S7_counts");
        assert_eq!(config.csv_file_name(), "S7_counts_abundances.csv");
        assert!(config.logo_path.is_none());
    }

    #[test]
    fn overrides_from_cli() {
        let cli = Cli::parse_from([
            "taxa-report",
            "in.csv",
            "out.html",
            "--sample-name",
            "S1",
            "--round-digits",
            "2",
            "--label-threshold",
            "2.5",
            "--no-pie-chart",
            "--subtitle",
            "Bacteria",
        ]);
        let config = ReportConfig::from_cli(&cli);
        assert_eq!(config.sample_name, "S1");
        assert_eq!(config.abundance_round_digits, 2);
        assert_eq!(config.label_threshold_percent, 2.5);
        assert!(!config.include_pie_chart);
        assert!(config.include_csv_export);
        assert_eq!(config.subtitle, "Bacteria");
    }
}
