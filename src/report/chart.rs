//! Inline SVG donut chart of relative abundances.
use super::{format_percent, html_escape};
use crate::abundance::AbundanceTable;
use crate::error::Result;
use std::f64::consts::PI;
use std::fmt::Write as FmtWrite;

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 520.0;
const OUTER_RADIUS: f64 = 170.0;
const HOLE_RATIO: f64 = 0.4;

const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

/// Draws one slice per table row, clockwise from 12 o'clock. `labels` is
/// aligned with the rows; blank entries get no outside annotation.
pub fn render_pie_chart(
    out: &mut String,
    table: &AbundanceTable,
    labels: &[String],
    round_digits: usize,
) -> Result<()> {
    let cx = WIDTH / 2.0;
    let cy = HEIGHT / 2.0;
    let inner_radius = OUTER_RADIUS * HOLE_RATIO;

    writeln!(out, "<div class=\"plot\">")?;
    writeln!(
        out,
        "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        WIDTH, HEIGHT, WIDTH, HEIGHT
    )?;

    let mut start = 0.0;
    for (i, row) in table.rows.iter().enumerate() {
        let fraction = row.relative_abundance / 100.0;
        if fraction <= 0.0 {
            continue;
        }
        let end = start + fraction * 2.0 * PI;
        let color = PALETTE[i % PALETTE.len()];
        let percent = format_percent(row.relative_abundance, round_digits);
        let tooltip = format!("{}: {}%", html_escape(&row.display_name), percent);

        if fraction >= 1.0 - 1e-9 {
            writeln!(
                out,
                "<path d=\"{}\" fill=\"{}\" fill-rule=\"evenodd\" stroke=\"#fff\"><title>{}</title></path>",
                ring_path(cx, cy, OUTER_RADIUS, inner_radius),
                color,
                tooltip
            )?;
        } else {
            writeln!(
                out,
                "<path d=\"{}\" fill=\"{}\" stroke=\"#fff\"><title>{}</title></path>",
                slice_path(cx, cy, OUTER_RADIUS, inner_radius, start, end),
                color,
                tooltip
            )?;
        }

        if let Some(label) = labels.get(i).filter(|l| !l.is_empty()) {
            let mid = (start + end) / 2.0;
            let (x1, y1) = polar(cx, cy, OUTER_RADIUS + 4.0, mid);
            let (x2, y2) = polar(cx, cy, OUTER_RADIUS + 22.0, mid);
            let (tx, ty) = polar(cx, cy, OUTER_RADIUS + 28.0, mid);
            let anchor = if mid.sin() >= 0.0 { "start" } else { "end" };
            writeln!(
                out,
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"#555\" stroke-width=\"1\"/>",
                x1, y1, x2, y2
            )?;
            writeln!(
                out,
                "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"13\" fill=\"#333\" text-anchor=\"{}\" dominant-baseline=\"middle\"><tspan font-style=\"italic\">{}</tspan> {}%</text>",
                tx,
                ty,
                anchor,
                html_escape(label),
                percent
            )?;
        }
        start = end;
    }

    writeln!(out, "</svg></div>")?;
    Ok(())
}

// Angle is measured clockwise from 12 o'clock.
fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}

fn slice_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let large_arc = if end - start > PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, start);
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z",
        ox0, oy0, outer, outer, large_arc, ox1, oy1, ix1, iy1, inner, inner, large_arc, ix0, iy0
    )
}

// A single full slice cannot be drawn as one arc, so the ring is two circles
// filled with the even-odd rule.
fn ring_path(cx: f64, cy: f64, outer: f64, inner: f64) -> String {
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 1 1 {:.2} {:.2} A {:.2} {:.2} 0 1 1 {:.2} {:.2} Z \
         M {:.2} {:.2} A {:.2} {:.2} 0 1 0 {:.2} {:.2} A {:.2} {:.2} 0 1 0 {:.2} {:.2} Z",
        cx - outer, cy, outer, outer, cx + outer, cy, outer, outer, cx - outer, cy,
        cx - inner, cy, inner, inner, cx + inner, cy, inner, inner, cx - inner, cy
    )
}
