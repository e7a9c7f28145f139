use chrono::NaiveDate;
use log::debug;
use polars::prelude::*;

use crate::{
    data::{
        DAILY_RETURN, DATE, SENTIMENT, cell_to_string, column_dates, column_values,
        news::DailySentiment, stock::StockTable,
    },
    error::ScResult,
};

/// Stock rows joined with the daily sentiment of the same date, keeping only
/// rows where both the return and the sentiment are defined.
#[derive(Clone, Debug)]
pub struct MergedTable {
    df: DataFrame,
}

impl MergedTable {
    pub fn join(stock: &StockTable, daily: &DailySentiment) -> ScResult<Self> {
        let df = stock
            .df()
            .clone()
            .lazy()
            .join(
                daily.df().clone().lazy(),
                [col(DATE)],
                [col(DATE)],
                JoinArgs::new(JoinType::Inner),
            )
            .filter(
                col(DAILY_RETURN)
                    .is_not_null()
                    .and(col(SENTIMENT).is_not_null()),
            )
            .sort(
                [DATE],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .collect()?;
        debug!(
            "Joined {} stock rows with {} sentiment days into {} rows",
            stock.len(),
            daily.len(),
            df.height()
        );

        Ok(Self { df })
    }

    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn dates(&self) -> ScResult<Vec<NaiveDate>> {
        column_dates(&self.df)
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    pub fn len(&self) -> usize {
        self.df.height()
    }

    /// `(sentiment, daily return)` pairs in row order.
    pub fn points(&self) -> ScResult<Vec<(f64, f64)>> {
        Ok(self
            .sentiments()?
            .into_iter()
            .zip(self.returns()?)
            .collect())
    }

    pub fn returns(&self) -> ScResult<Vec<f64>> {
        Ok(column_values(&self.df, DAILY_RETURN)?
            .into_iter()
            .flatten()
            .collect())
    }

    /// Every cell rendered as text, dates as `YYYY-MM-DD` and missing values empty.
    pub fn rows(&self) -> ScResult<Vec<Vec<String>>> {
        let columns = self.df.get_columns();

        let mut rows = Vec::with_capacity(self.df.height());
        for i in 0..self.df.height() {
            let mut row = Vec::with_capacity(columns.len());
            for column in columns {
                row.push(cell_to_string(&column.get(i)?));
            }
            rows.push(row);
        }

        Ok(rows)
    }

    pub fn sentiments(&self) -> ScResult<Vec<f64>> {
        Ok(column_values(&self.df, SENTIMENT)?
            .into_iter()
            .flatten()
            .collect())
    }
}
