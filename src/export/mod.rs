use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::{ChartSpec, Content};
use crate::error::ExportError;

/// Output representations an exporter may be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    PlainText,
    Html,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::PlainText => write!(f, "plain text"),
            ExportFormat::Html => write!(f, "html"),
        }
    }
}

/// The export collaborator: given content, produce bytes in the requested
/// format or fail with `UnsupportedFormat`. Invoked on explicit user request
/// only, never from the autosave path.
pub trait Exporter {
    fn export(&self, content: &Content, format: ExportFormat) -> Result<Vec<u8>, ExportError>;
}

/// Default exporter covering the format matrix of the bundled editors:
/// documents as HTML/plain text/JSON, tables as CSV/JSON, charts as JSON/CSV.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentExporter;

impl ContentExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for ContentExporter {
    fn export(&self, content: &Content, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        match (content, format) {
            (Content::Text { body }, ExportFormat::Html) => Ok(body.clone().into_bytes()),
            (Content::Text { body }, ExportFormat::PlainText) => {
                Ok(strip_tags(body).into_bytes())
            }
            (Content::Table { rows }, ExportFormat::Csv) => Ok(to_csv_rows(rows).into_bytes()),
            (Content::Chart { spec }, ExportFormat::Csv) => Ok(chart_to_csv(spec).into_bytes()),
            (content, ExportFormat::Json) => Ok(serde_json::to_vec_pretty(content)?),
            (content, format) => {
                log::warn!("refusing to export {} content as {format}", content.kind());
                Err(ExportError::UnsupportedFormat {
                    content: content.kind(),
                    format,
                })
            }
        }
    }
}

/// Removes markup tags from an HTML body, leaving the visible text.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

fn to_csv_rows(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(|cell| csv_field(cell)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Quotes a field when it contains a comma, quote, or newline; embedded
/// quotes are doubled.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Flattens a chart to CSV: a header of `label` plus one column per series,
/// then one row per category label.
fn chart_to_csv(spec: &ChartSpec) -> String {
    let mut header = vec!["label".to_string()];
    header.extend(spec.series.iter().map(|s| csv_field(&s.name)));

    let mut out = header.join(",");
    out.push('\n');

    for (i, label) in spec.labels.iter().enumerate() {
        let mut row = vec![csv_field(label)];
        for series in &spec.series {
            row.push(
                series
                    .values
                    .get(i)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            );
        }
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}
