//! HTML report rendering: abundance table, donut chart and page wrapper.
pub mod chart;
pub mod html;
pub mod table;

use crate::abundance::AbundanceTable;
use crate::config::ReportConfig;
use crate::error::Result;
use html::Logo;

/// Renders the complete report document.
pub fn render_report(
    config: &ReportConfig,
    table: &AbundanceTable,
    logo: Option<&Logo>,
) -> Result<String> {
    let mut figures = String::new();
    if table.is_empty() {
        html::no_abundances_notice(&mut figures)?;
    } else {
        table::render_table(&mut figures, table, config.abundance_round_digits)?;
        if config.include_pie_chart {
            let labels = table.chart_labels(config.label_threshold_percent);
            chart::render_pie_chart(&mut figures, table, &labels, config.abundance_round_digits)?;
        }
    }
    html::render_page(config, logo, &figures)
}

/// Rounds a percentage for display only.
pub(crate) fn format_percent(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value)
}

/// Escape HTML special characters
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
