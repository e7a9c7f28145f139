use std::{io, path::Path};

use chrono::NaiveDate;
use log::{debug, warn};
use polars::prelude::*;

use crate::{
    data::{
        CLOSE, DAILY_RETURN, DATE, SENTIMENT, column_index, csv_reader, date_column, open_csv,
        parse_date, unique_headers,
    },
    error::{ScError, ScResult},
    utils::stats,
};

const TABLE: &str = "stock";

/// Daily closing prices with their simple daily returns, in date order.
///
/// Columns other than `Date` and `Close` are carried along as text.
#[derive(Clone, Debug)]
pub struct StockTable {
    df: DataFrame,
}

struct StockRow {
    date: NaiveDate,
    close: Option<f64>,
    extras: Vec<String>,
}

impl StockTable {
    pub fn from_path(path: &Path) -> ScResult<Self> {
        Self::from_csv(open_csv(path)?)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> ScResult<Self> {
        Self::from_csv(csv_reader(reader))
    }

    fn from_csv<R: io::Read>(mut reader: ::csv::Reader<R>) -> ScResult<Self> {
        let headers = unique_headers(reader.headers()?, TABLE);
        let date_index = column_index(&headers, DATE, TABLE)?;
        let close_index = column_index(&headers, CLOSE, TABLE)?;

        let mut extra_columns: Vec<(usize, String)> = vec![];
        for (i, name) in headers.iter().enumerate() {
            if i == date_index || i == close_index {
                continue;
            }

            if name == DAILY_RETURN || name == SENTIMENT {
                warn!("Column '{name}' of the stock data is replaced by the derived one");
                continue;
            }

            extra_columns.push((i, name.to_string()));
        }

        let mut rows: Vec<StockRow> = vec![];
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let date = parse_date(record.get(date_index).unwrap_or_default(), line, TABLE)?;
            let close = parse_close(record.get(close_index).unwrap_or_default(), line)?;
            let extras = extra_columns
                .iter()
                .map(|(i, _)| record.get(*i).unwrap_or_default().to_string())
                .collect();

            rows.push(StockRow {
                date,
                close,
                extras,
            });
        }

        if !rows.is_sorted_by_key(|row| row.date) {
            warn!("Stock rows are not in chronological order, sorting by date");
        }
        rows.sort_by_key(|row| row.date);

        let dates: Vec<NaiveDate> = rows.iter().map(|row| row.date).collect();
        let closes: Vec<Option<f64>> = rows.iter().map(|row| row.close).collect();
        let returns = stats::pct_change(&closes);

        let mut columns: Vec<Column> = Vec::with_capacity(headers.len() + 1);
        for (i, _) in headers.iter().enumerate() {
            if i == date_index {
                columns.push(date_column(&dates)?);
            } else if i == close_index {
                columns.push(Column::new(CLOSE.into(), closes.clone()));
            } else if let Some(extra_index) = extra_columns.iter().position(|(j, _)| *j == i) {
                let values: Vec<String> = rows
                    .iter()
                    .map(|row| row.extras[extra_index].clone())
                    .collect();
                columns.push(Column::new(
                    extra_columns[extra_index].1.as_str().into(),
                    values,
                ));
            }
        }
        columns.push(Column::new(DAILY_RETURN.into(), returns));

        let df = DataFrame::new(columns)?;
        debug!("Loaded {} stock rows", df.height());

        Ok(Self { df })
    }

    pub(crate) fn len(&self) -> usize {
        self.df.height()
    }

    pub(crate) fn df(&self) -> &DataFrame {
        &self.df
    }
}

fn parse_close(value: &str, line: u64) -> ScResult<Option<f64>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ScError::Invalid {
            code: "INVALID_CLOSE",
            message: format!("Unable to parse close price '{value}' at line {line} of the stock data"),
        })
}
