use std::fmt;

use chrono::{NaiveDateTime, Timelike};

use crate::error::{ChartError, ChartResult};

/// One scalar spreadsheet cell after date-aware conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Numeric view used for bar heights. Only finite numbers plot.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => write!(f, "{}", format_number(*value)),
            Self::Bool(value) => f.write_str(if *value { "TRUE" } else { "FALSE" }),
            Self::DateTime(value) => {
                if value.num_seconds_from_midnight() == 0 {
                    write!(f, "{}", value.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S"))
                }
            }
        }
    }
}

/// Formats a value the way spreadsheet users expect to read it back:
/// integral values drop the fractional part.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Cell texts, used as category labels.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.values.iter().map(ToString::to_string).collect()
    }
}

/// Table extracted from one sheet.
///
/// The first column holds the categories and its name carries the chart
/// header (`"<Title> (<AxisLabel>)"`); every other column is one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularDataset {
    sheet_name: String,
    columns: Vec<Column>,
}

impl TabularDataset {
    /// Builds a dataset, rejecting ragged columns.
    pub fn new(sheet_name: impl Into<String>, columns: Vec<Column>) -> ChartResult<Self> {
        if let Some(first) = columns.first() {
            let rows = first.values.len();
            if let Some(ragged) = columns.iter().find(|column| column.values.len() != rows) {
                return Err(ChartError::InvalidData(format!(
                    "column `{}` has {} rows, expected {rows}",
                    ragged.name,
                    ragged.values.len()
                )));
            }
        }

        Ok(Self {
            sheet_name: sheet_name.into(),
            columns,
        })
    }

    #[must_use]
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn category_column(&self) -> Option<&Column> {
        self.columns.first()
    }

    #[must_use]
    pub fn metric_columns(&self) -> &[Column] {
        self.columns.get(1..).unwrap_or(&[])
    }

    /// Name of the first column, or an empty string for a sheet without columns.
    #[must_use]
    pub fn header(&self) -> &str {
        self.category_column()
            .map_or("", |column| column.name.as_str())
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.category_column()
            .map_or(0, |column| column.values.len())
    }
}
