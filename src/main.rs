pub mod abundance;
pub mod cli;
pub mod config;
pub mod csv_handler;
pub mod error;
pub mod export;
pub mod report;
pub mod taxon;

use abundance::{AbundanceTable, compute_abundances, extract_taxon_records};
use clap::Parser;
use cli::Cli;
use config::ReportConfig;
use csv_handler::load_lineage_counts;
use error::{CrateError, Result};
use log::{error, info};
use report::html::Logo;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() -> Result<()> {
    // Initialize logger
    let _ = env_logger::Builder::from_default_env()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(log::LevelFilter::Info)
        .try_init();

    let cli = Cli::parse();
    info!("Starting taxa report...");
    info!("Input file: {:?}", cli.input_file);
    info!("Output file: {:?}", cli.output_file);

    let start_time = Instant::now();
    let config = ReportConfig::from_cli(&cli);

    let summary = match generate_report(&cli.input_file, &cli.output_file, &config) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Failed to generate report: {}", e);
            return Err(e);
        }
    };

    let duration = start_time.elapsed();
    info!("Total execution time: {:.2?}", duration);

    println!("\n--- Summary Report ---");
    println!("Sample: {}", config.sample_name);
    println!("Lineage columns read: {}", summary.lineage_columns);
    println!(
        "Columns with genus and species: {}",
        summary.classified_records
    );
    println!("Organisms in abundance table: {}", summary.table.rows.len());
    println!("Total read count: {}", summary.table.total_read_count);
    if summary.table.is_empty() {
        println!("No abundances computed (zero total read count).");
    }
    println!("Report saved to: {}", cli.output_file.display());
    if let Some(csv_path) = &summary.csv_path {
        println!("Abundance CSV saved to: {}", csv_path.display());
    }
    println!("Execution time: {:.2?}", duration);

    Ok(())
}

struct RunSummary {
    lineage_columns: usize,
    classified_records: usize,
    table: AbundanceTable,
    csv_path: Option<PathBuf>,
}

fn generate_report(
    input_file: &Path,
    output_file: &Path,
    config: &ReportConfig,
) -> Result<RunSummary> {
    if !input_file.is_file() {
        return Err(CrateError::InputNotFound(input_file.to_path_buf()));
    }
    ensure_distinct(output_file, input_file)?;
    let csv_path = if config.include_csv_export {
        let path = export::export_path(output_file, &config.csv_file_name());
        ensure_distinct(&path, input_file)?;
        ensure_distinct(&path, output_file)?;
        Some(path)
    } else {
        None
    };

    let logo = match &config.logo_path {
        Some(path) => {
            info!("Embedding logo from {:?}", path);
            Some(Logo::load(path)?)
        }
        None => None,
    };

    // 1. Load and reshape the wide CSV
    info!("Loading read counts...");
    let lineage_counts = load_lineage_counts(input_file)?;
    info!("Loaded {} lineage columns.", lineage_counts.len());

    // 2. Parse lineages and compute abundances
    let records = extract_taxon_records(&lineage_counts);
    info!(
        "{} of {} lineages name a genus and species.",
        records.len(),
        lineage_counts.len()
    );
    let table = compute_abundances(&records);

    // 3. Render everything before touching the filesystem
    info!("Rendering HTML report...");
    let html = report::render_report(config, &table, logo.as_ref())?;
    let csv_bytes = match &csv_path {
        Some(_) => {
            let mut buffer = Vec::new();
            export::write_abundance_csv(&table, &mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    // 4. Outputs
    info!("Writing HTML report: {:?}...", output_file);
    fs::write(output_file, html)?;
    if let (Some(path), Some(bytes)) = (&csv_path, csv_bytes) {
        info!("Writing abundance CSV: {:?}...", path);
        if let Err(e) = fs::write(path, bytes) {
            // Do not leave a report whose download link points nowhere.
            let _ = fs::remove_file(output_file);
            return Err(CrateError::IoError(e));
        }
    }

    Ok(RunSummary {
        lineage_columns: lineage_counts.len(),
        classified_records: records.len(),
        table,
        csv_path,
    })
}

// Fails when `output` resolves to the same file as `existing`. The output may
// not exist yet, so only its parent directory is canonicalized.
fn ensure_distinct(output: &Path, existing: &Path) -> Result<()> {
    if resolve(output) == resolve(existing) {
        return Err(CrateError::OutputCollision {
            output: output.to_path_buf(),
            existing: existing.to_path_buf(),
        });
    }
    Ok(())
}

fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}
