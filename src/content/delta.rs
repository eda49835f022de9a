use super::{ChartKind, Content, ContentKind};
use crate::error::EditorError;

/// An edit to be merged into session content.
///
/// Each variant mirrors one content kind; applying a delta to the wrong kind
/// is rejected with `DeltaMismatch` before anything is touched. Application
/// returns the inverse delta, which the session records for undo.
#[derive(Debug, Clone, PartialEq)]
pub enum Delta {
    Text(TextDelta),
    Table(TableDelta),
    Chart(ChartDelta),
}

impl Delta {
    /// Replace the entire text body. The common path for template application
    /// and replace-all.
    pub fn set_text(body: impl Into<String>) -> Self {
        Delta::Text(TextDelta::ReplaceAll { body: body.into() })
    }

    pub fn insert_text(at: usize, text: impl Into<String>) -> Self {
        Delta::Text(TextDelta::Insert {
            at,
            text: text.into(),
        })
    }

    pub fn delete_text(start: usize, end: usize) -> Self {
        Delta::Text(TextDelta::Delete { start, end })
    }

    pub fn set_cell(row: usize, col: usize, value: impl Into<String>) -> Self {
        Delta::Table(TableDelta::SetCell {
            row,
            col,
            value: value.into(),
        })
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Delta::Text(_) => ContentKind::Text,
            Delta::Table(_) => ContentKind::Table,
            Delta::Chart(_) => ContentKind::Chart,
        }
    }

    /// Merge this delta into `content`, returning the inverse delta.
    ///
    /// Validation happens before mutation: a failed application leaves the
    /// content exactly as it was.
    pub fn apply(&self, content: &mut Content) -> Result<Delta, EditorError> {
        match (self, content) {
            (Delta::Text(delta), Content::Text { body }) => {
                delta.apply(body).map(Delta::Text)
            }
            (Delta::Table(delta), Content::Table { rows }) => {
                delta.apply(rows).map(Delta::Table)
            }
            (Delta::Chart(delta), Content::Chart { spec }) => {
                delta.apply(spec).map(Delta::Chart)
            }
            (delta, content) => Err(EditorError::DeltaMismatch {
                content: content.kind(),
                delta: delta.kind(),
            }),
        }
    }
}

/// Edits to a text body. Offsets are byte offsets and must fall on char
/// boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum TextDelta {
    Insert { at: usize, text: String },
    Delete { start: usize, end: usize },
    ReplaceAll { body: String },
}

impl TextDelta {
    fn apply(&self, body: &mut String) -> Result<TextDelta, EditorError> {
        match self {
            TextDelta::Insert { at, text } => {
                if !body.is_char_boundary(*at) {
                    return Err(EditorError::InvalidEdit(format!(
                        "insert offset {} is not a char boundary (len {})",
                        at,
                        body.len()
                    )));
                }
                body.insert_str(*at, text);
                Ok(TextDelta::Delete {
                    start: *at,
                    end: *at + text.len(),
                })
            }
            TextDelta::Delete { start, end } => {
                if start > end
                    || !body.is_char_boundary(*start)
                    || !body.is_char_boundary(*end)
                {
                    return Err(EditorError::InvalidEdit(format!(
                        "delete range {}..{} is not valid for body of len {}",
                        start,
                        end,
                        body.len()
                    )));
                }
                let removed: String = body.drain(*start..*end).collect();
                Ok(TextDelta::Insert {
                    at: *start,
                    text: removed,
                })
            }
            TextDelta::ReplaceAll { body: new_body } => {
                let old = std::mem::replace(body, new_body.clone());
                Ok(TextDelta::ReplaceAll { body: old })
            }
        }
    }
}

/// Edits to tabular content.
#[derive(Debug, Clone, PartialEq)]
pub enum TableDelta {
    SetCell {
        row: usize,
        col: usize,
        value: String,
    },
    InsertRow {
        at: usize,
        cells: Vec<String>,
    },
    RemoveRow {
        at: usize,
    },
}

impl TableDelta {
    fn apply(&self, rows: &mut Vec<Vec<String>>) -> Result<TableDelta, EditorError> {
        match self {
            TableDelta::SetCell { row, col, value } => {
                let cell = rows
                    .get_mut(*row)
                    .and_then(|r| r.get_mut(*col))
                    .ok_or_else(|| {
                        EditorError::InvalidEdit(format!(
                            "cell ({row}, {col}) is out of bounds"
                        ))
                    })?;
                let old = std::mem::replace(cell, value.clone());
                Ok(TableDelta::SetCell {
                    row: *row,
                    col: *col,
                    value: old,
                })
            }
            TableDelta::InsertRow { at, cells } => {
                if *at > rows.len() {
                    return Err(EditorError::InvalidEdit(format!(
                        "row index {} is out of bounds for {} rows",
                        at,
                        rows.len()
                    )));
                }
                rows.insert(*at, cells.clone());
                Ok(TableDelta::RemoveRow { at: *at })
            }
            TableDelta::RemoveRow { at } => {
                if *at >= rows.len() {
                    return Err(EditorError::InvalidEdit(format!(
                        "row index {} is out of bounds for {} rows",
                        at,
                        rows.len()
                    )));
                }
                let cells = rows.remove(*at);
                Ok(TableDelta::InsertRow { at: *at, cells })
            }
        }
    }
}

/// Edits to a chart definition.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartDelta {
    SetTitle {
        title: String,
    },
    SetKind {
        kind: ChartKind,
    },
    SetPoint {
        series: usize,
        index: usize,
        value: f64,
    },
}

impl ChartDelta {
    fn apply(&self, spec: &mut super::ChartSpec) -> Result<ChartDelta, EditorError> {
        match self {
            ChartDelta::SetTitle { title } => {
                let old = std::mem::replace(&mut spec.title, title.clone());
                Ok(ChartDelta::SetTitle { title: old })
            }
            ChartDelta::SetKind { kind } => {
                let old = std::mem::replace(&mut spec.kind, *kind);
                Ok(ChartDelta::SetKind { kind: old })
            }
            ChartDelta::SetPoint {
                series,
                index,
                value,
            } => {
                let point = spec
                    .series
                    .get_mut(*series)
                    .and_then(|s| s.values.get_mut(*index))
                    .ok_or_else(|| {
                        EditorError::InvalidEdit(format!(
                            "point {index} of series {series} does not exist"
                        ))
                    })?;
                let old = std::mem::replace(point, *value);
                Ok(ChartDelta::SetPoint {
                    series: *series,
                    index: *index,
                    value: old,
                })
            }
        }
    }
}
