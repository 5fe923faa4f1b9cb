use super::{format_percent, html_escape};
use crate::abundance::AbundanceTable;
use crate::error::Result;
use std::fmt::Write as FmtWrite;

pub fn render_table(out: &mut String, table: &AbundanceTable, round_digits: usize) -> Result<()> {
    writeln!(out, "<table class=\"abundance\">")?;
    writeln!(
        out,
        "<tr><th>Organism</th><th>Relative Abundance (%)</th></tr>"
    )?;
    for row in &table.rows {
        writeln!(
            out,
            "<tr><td><i>{}</i></td><td>{}</td></tr>",
            html_escape(&row.display_name),
            format_percent(row.relative_abundance, round_digits)
        )?;
    }
    writeln!(out, "</table>")?;
    Ok(())
}
