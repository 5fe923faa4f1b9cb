//! Page template wrapping the rendered figures.
use super::html_escape;
use crate::config::ReportConfig;
use crate::error::{CrateError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt::Write as FmtWrite;
use std::io::ErrorKind;
use std::path::Path;

/// Logo image embedded as a data URI.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub mime_type: &'static str,
    pub base64: String,
}

impl Logo {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CrateError::LogoNotFound(path.to_path_buf()),
            _ => CrateError::IoError(e),
        })?;
        Ok(Self::from_bytes(&bytes, mime_type_for(path)))
    }

    pub fn from_bytes(bytes: &[u8], mime_type: &'static str) -> Self {
        Self {
            mime_type,
            base64: STANDARD.encode(bytes),
        }
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

pub fn no_abundances_notice(out: &mut String) -> Result<()> {
    writeln!(
        out,
        "<p class=\"notice\">No abundances computed: no classified organism has a non-zero read count.</p>"
    )?;
    Ok(())
}

pub fn render_page(config: &ReportConfig, logo: Option<&Logo>, figures: &str) -> Result<String> {
    let mut html = String::with_capacity(16 * 1024 + figures.len());
    let title = html_escape(&config.title);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\"/>")?;
    writeln!(html, "<title>{}</title>", title)?;
    writeln!(html, "<style>")?;
    writeln!(
        html,
        "body{{font-family:Arial,Helvetica,sans-serif;margin:20px;color:#222;background:#fff;}}"
    )?;
    writeln!(
        html,
        "#logo{{position:absolute;top:10px;right:10px;width:150px;}}"
    )?;
    writeln!(html, "h1,h2,h3{{color:#333;text-align:left;}}")?;
    writeln!(html, "h1{{font-size:30px;}}")?;
    writeln!(html, "h2{{font-size:20px;margin-top:-10px;}}")?;
    writeln!(html, ".caption{{color:#555;font-size:16px;}}")?;
    writeln!(
        html,
        "table.abundance{{border-collapse:collapse;width:50%;min-width:420px;margin:12px 0 20px 0;}}"
    )?;
    writeln!(
        html,
        "table.abundance th{{background:paleturquoise;font-size:20px;padding:6px 10px;text-align:center;}}"
    )?;
    writeln!(
        html,
        "table.abundance td{{border-top:1px solid #ddd;font-size:18px;padding:6px 10px;text-align:center;}}"
    )?;
    writeln!(html, ".plot{{margin:8px 0 6px 0;}}")?;
    writeln!(html, ".notice{{color:#c00000;font-weight:bold;}}")?;
    writeln!(
        html,
        ".export-link button{{padding:10px 15px;background-color:#007bff;color:#fff;border:none;border-radius:5px;cursor:pointer;}}"
    )?;
    writeln!(html, "</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;

    if let Some(logo) = logo {
        writeln!(html, "<img id=\"logo\" alt=\"logo\" src=\"{}\">", logo.data_uri())?;
    }
    writeln!(html, "<h1>{}</h1>", title)?;
    writeln!(html, "<h2>{}</h2>", html_escape(&config.subtitle))?;
    writeln!(html, "<br>")?;
    writeln!(html, "<hr>")?;
    writeln!(
        html,
        "<h3>Organisms Detected for {}</h3>",
        html_escape(&config.sample_name)
    )?;
    writeln!(html, "<p class=\"caption\">Bacteria</p>")?;
    html.push_str(figures);

    if config.include_csv_export {
        writeln!(html, "<div class=\"export-link\" style=\"margin:20px;\">")?;
        writeln!(
            html,
            "<a href=\"{}\" download><button>Download Abundances CSV</button></a>",
            html_escape(&config.csv_file_name())
        )?;
        writeln!(html, "</div>")?;
    }

    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}
