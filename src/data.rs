use std::{fs::File, io, path::Path};

use chrono::NaiveDate;
use ::csv::StringRecord;
use log::warn;
use num_traits::NumCast;
use polars::prelude::*;

use crate::{
    error::{ScError, ScResult},
    utils::datetime,
};

pub mod merged;
pub mod news;
pub mod stock;

pub const CLOSE: &str = "Close";
pub const DAILY_RETURN: &str = "Daily_Return";
pub const DATE: &str = "Date";
pub const HEADLINE: &str = "Headline";
pub const SENTIMENT: &str = "Sentiment";

fn csv_reader<R: io::Read>(reader: R) -> ::csv::Reader<R> {
    ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader)
}

fn open_csv(path: &Path) -> ScResult<::csv::Reader<File>> {
    let file = File::open(path).map_err(|err| {
        io::Error::new(err.kind(), format!("{}: {err}", path.to_string_lossy()))
    })?;

    Ok(csv_reader(file))
}

fn column_index(headers: &StringRecord, name: &str, table: &str) -> ScResult<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| ScError::NotExists {
            code: "MISSING_COLUMN",
            message: format!("Column '{name}' is missing from the {table} data"),
        })
}

/// Renames repeated header names to `name.1`, `name.2`, ... so every column keeps a unique name.
fn unique_headers(headers: &StringRecord, table: &str) -> StringRecord {
    let mut names: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        let mut name = header.to_string();
        let mut suffix = 0;
        while names.contains(&name) {
            suffix += 1;
            name = format!("{header}.{suffix}");
        }

        if name != header {
            warn!("Duplicate column '{header}' of the {table} data is renamed to '{name}'");
        }
        names.push(name);
    }

    StringRecord::from(names)
}

fn parse_date(value: &str, line: u64, table: &str) -> ScResult<NaiveDate> {
    datetime::date_from_str(value).map_err(|_| ScError::Invalid {
        code: "INVALID_DATE",
        message: format!("Unable to parse date '{value}' at line {line} of the {table} data"),
    })
}

fn date_column(dates: &[NaiveDate]) -> ScResult<Column> {
    let mut days: Vec<i32> = Vec::with_capacity(dates.len());
    for date in dates {
        days.push(
            datetime::days_after_epoch(date).ok_or_else(|| ScError::Invalid {
                code: "INVALID_DATE",
                message: format!("Date {date} is out of range"),
            })?,
        );
    }

    Ok(Column::new(DATE.into(), days).cast(&DataType::Date)?)
}

fn column_dates(df: &DataFrame) -> ScResult<Vec<NaiveDate>> {
    Ok(column_values::<i32>(df, DATE)?
        .into_iter()
        .flatten()
        .filter_map(datetime::date_from_days_after_epoch)
        .collect())
}

fn column_values<T: NumCast>(df: &DataFrame, name: &str) -> ScResult<Vec<Option<T>>> {
    let column = df.column(name)?;

    let mut values = Vec::with_capacity(column.len());
    for i in 0..column.len() {
        values.push(column.get(i)?.extract::<T>());
    }

    Ok(values)
}

fn cell_to_string(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Date(days) => datetime::date_from_days_after_epoch(*days)
            .map(|date| datetime::date_to_str(&date))
            .unwrap_or_default(),
        AnyValue::Float64(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index() {
        let headers = StringRecord::from(vec!["Date", "Open", "Close"]);

        assert_eq!(column_index(&headers, CLOSE, "stock").unwrap(), 2);
        assert_eq!(
            column_index(&headers, HEADLINE, "news").unwrap_err().code(),
            Some("MISSING_COLUMN")
        );
    }

    #[test]
    fn test_unique_headers() {
        let headers = StringRecord::from(vec!["Date", "Volume", "Close", "Volume", "Volume.1"]);

        assert_eq!(
            unique_headers(&headers, "stock").iter().collect::<Vec<_>>(),
            ["Date", "Volume", "Close", "Volume.1", "Volume.1.1"]
        );
    }

    #[test]
    fn test_date_column() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2021, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        ];
        let column = date_column(&dates).unwrap();
        assert_eq!(column.dtype(), &DataType::Date);

        let df = DataFrame::new(vec![column]).unwrap();
        assert_eq!(column_dates(&df).unwrap(), dates);
        assert_eq!(cell_to_string(&df.column(DATE).unwrap().get(0).unwrap()), "2021-01-02");

        assert_eq!(date_column(&[]).unwrap().dtype(), &DataType::Date);
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&AnyValue::Null), "");
        assert_eq!(cell_to_string(&AnyValue::Float64(0.1)), "0.1");
        assert_eq!(cell_to_string(&AnyValue::String("AAPL")), "AAPL");
    }
}
