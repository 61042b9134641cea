//! Workbook loading: one [`TabularDataset`] per sheet.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::core::{CellValue, Column, TabularDataset};
use crate::error::{ChartError, ChartResult};

/// Reads every sheet of the workbook at `path`, in file order.
///
/// The first row of each sheet names the columns. The workbook handle is
/// dropped before this function returns, whatever the outcome.
pub fn load_workbook(path: impl AsRef<Path>) -> ChartResult<Vec<TabularDataset>> {
    let path = path.as_ref();
    let load_error = |reason: String| ChartError::Load {
        path: path.to_path_buf(),
        reason,
    };

    if !path.is_file() {
        return Err(load_error("file does not exist".to_owned()));
    }

    let mut workbook =
        open_workbook_auto(path).map_err(|err| load_error(format!("unrecognized workbook: {err}")))?;
    let sheet_names = workbook.sheet_names();
    if sheet_names.is_empty() {
        return Err(load_error("workbook contains no sheets".to_owned()));
    }

    let mut datasets = Vec::with_capacity(sheet_names.len());
    for sheet_name in &sheet_names {
        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|err| load_error(format!("failed to read sheet `{sheet_name}`: {err}")))?;
        let dataset = dataset_from_range(sheet_name, &range)?;
        debug!(
            sheet = %sheet_name,
            columns = dataset.columns().len(),
            rows = dataset.row_count(),
            "loaded sheet"
        );
        datasets.push(dataset);
    }

    Ok(datasets)
}

/// Converts a sheet range into columns, using its first row as the header.
pub fn dataset_from_range(sheet_name: &str, range: &Range<Data>) -> ChartResult<TabularDataset> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        warn!(sheet = %sheet_name, "sheet is empty");
        return TabularDataset::new(sheet_name, Vec::new());
    };

    let mut columns: Vec<Column> = header_row
        .iter()
        .enumerate()
        .map(|(index, cell)| Column::new(column_name(index, cell), Vec::new()))
        .collect();

    for row in rows {
        for (column, cell) in columns.iter_mut().zip(row) {
            column.values.push(cell_value(cell));
        }
    }

    TabularDataset::new(sheet_name, columns)
}

fn column_name(index: usize, cell: &Data) -> String {
    match cell_value(cell) {
        CellValue::Empty => format!("Unnamed: {index}"),
        value => value.to_string(),
    }
}

/// Date-aware conversion of one calamine cell.
#[must_use]
pub fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => value
            .as_datetime()
            .map_or(CellValue::Number(value.as_f64()), CellValue::DateTime),
        Data::DateTimeIso(text) => {
            parse_iso_datetime(text).map_or_else(|| CellValue::Text(text.clone()), CellValue::DateTime)
        }
        Data::DurationIso(text) => CellValue::Text(text.clone()),
        Data::Error(err) => CellValue::Text(err.to_string()),
    }
}

fn parse_iso_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::{cell_value, dataset_from_range};
    use crate::core::CellValue;
    use calamine::{Data, Range};

    #[test]
    fn first_row_names_columns_and_blank_headers_get_placeholders() {
        let mut range: Range<Data> = Range::new((0, 0), (2, 2));
        range.set_value((0, 0), Data::String("Bench (Score)".to_owned()));
        range.set_value((0, 2), Data::String("Score".to_owned()));
        range.set_value((1, 0), Data::String("RTX 3060".to_owned()));
        range.set_value((1, 2), Data::Float(100.0));
        range.set_value((2, 0), Data::String("RX 6600".to_owned()));
        range.set_value((2, 2), Data::Int(90));

        let dataset = dataset_from_range("Sheet1", &range).expect("dataset");
        let names: Vec<_> = dataset.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bench (Score)", "Unnamed: 1", "Score"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.columns()[2].values[1], CellValue::Number(90.0));
    }

    #[test]
    fn iso_datetimes_are_parsed() {
        let value = cell_value(&Data::DateTimeIso("2024-05-01T12:30:00".to_owned()));
        assert!(matches!(value, CellValue::DateTime(_)));
        let value = cell_value(&Data::DateTimeIso("P1D".to_owned()));
        assert_eq!(value, CellValue::Text("P1D".to_owned()));
    }
}
