mod delta;
mod stats;

pub use delta::{ChartDelta, Delta, TableDelta, TextDelta};
pub use stats::TextStats;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The document payload owned by a single editor session.
///
/// One variant per editor family: rich-text documents, tabular data
/// (spreadsheet / CSV editors), and chart definitions. The payload is never
/// shared across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Content {
    Text { body: String },
    Table { rows: Vec<Vec<String>> },
    Chart { spec: ChartSpec },
}

impl Content {
    pub fn text(body: impl Into<String>) -> Self {
        Content::Text { body: body.into() }
    }

    pub fn table(rows: Vec<Vec<String>>) -> Self {
        Content::Table { rows }
    }

    pub fn chart(spec: ChartSpec) -> Self {
        Content::Chart { spec }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Text { .. } => ContentKind::Text,
            Content::Table { .. } => ContentKind::Table,
            Content::Chart { .. } => ContentKind::Chart,
        }
    }

    /// The text body, if this is text content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text { body } => Some(body),
            _ => None,
        }
    }

    /// Word / character / line counts for text content.
    pub fn text_stats(&self) -> Option<TextStats> {
        self.as_text().map(TextStats::of)
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Text {
            body: String::new(),
        }
    }
}

/// Discriminant for `Content`, used in error reporting and export dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Table,
    Chart,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Text => write!(f, "text"),
            ContentKind::Table => write!(f, "table"),
            ContentKind::Chart => write!(f, "chart"),
        }
    }
}

/// A chart definition: shared category labels plus one or more value series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            title: title.into(),
            kind,
            labels: Vec::new(),
            series: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}
