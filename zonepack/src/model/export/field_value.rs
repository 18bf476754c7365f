/// a single cell of the downloadable table. the published format quotes
/// every non-numeric cell, so the distinction between numbers, text, and
/// absent values must survive until the writer.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Count(i64),
    Real(f64),
    Missing,
}

impl FieldValue {
    /// cell content for the CSV writer. counts render without a decimal
    /// point. absent values render as the empty string, which the writer
    /// quotes like any other non-numeric cell.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Text(t) => t.clone(),
            FieldValue::Count(c) => c.to_string(),
            FieldValue::Real(r) => r.to_string(),
            FieldValue::Missing => String::new(),
        }
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> FieldValue {
        match value {
            Some(t) => FieldValue::Text(t),
            None => FieldValue::Missing,
        }
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(value: Option<i64>) -> FieldValue {
        match value {
            Some(c) => FieldValue::Count(c),
            None => FieldValue::Missing,
        }
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> FieldValue {
        match value {
            Some(r) => FieldValue::Real(r),
            None => FieldValue::Missing,
        }
    }
}
