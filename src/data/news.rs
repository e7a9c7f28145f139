use std::{io, path::Path};

use chrono::NaiveDate;
use log::debug;
use polars::prelude::*;

use crate::{
    data::{
        DATE, HEADLINE, SENTIMENT, column_index, csv_reader, date_column, open_csv, parse_date,
    },
    error::ScResult,
    sentiment::PolarityScorer,
};

const TABLE: &str = "news";

/// Dated headlines as loaded, in file order.
#[derive(Clone, Debug, Default)]
pub struct NewsTable {
    dates: Vec<NaiveDate>,
    headlines: Vec<String>,
}

/// Headlines with their polarity attached.
#[derive(Clone, Debug)]
pub struct ScoredNews {
    df: DataFrame,
}

/// Mean headline polarity per calendar date, in date order.
#[derive(Clone, Debug)]
pub struct DailySentiment {
    df: DataFrame,
}

impl NewsTable {
    pub fn from_path(path: &Path) -> ScResult<Self> {
        Self::from_csv(open_csv(path)?)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> ScResult<Self> {
        Self::from_csv(csv_reader(reader))
    }

    fn from_csv<R: io::Read>(mut reader: ::csv::Reader<R>) -> ScResult<Self> {
        let headers = reader.headers()?.clone();
        let date_index = column_index(&headers, DATE, TABLE)?;
        let headline_index = column_index(&headers, HEADLINE, TABLE)?;

        let mut news = Self::default();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            news.dates.push(parse_date(
                record.get(date_index).unwrap_or_default(),
                line,
                TABLE,
            )?);
            news.headlines
                .push(record.get(headline_index).unwrap_or_default().to_string());
        }
        debug!("Loaded {} news rows", news.dates.len());

        Ok(news)
    }

    pub fn score(&self, scorer: &dyn PolarityScorer) -> ScResult<ScoredNews> {
        let sentiments: Vec<f64> = self
            .headlines
            .iter()
            .map(|headline| scorer.polarity(headline))
            .collect();

        let df = DataFrame::new(vec![
            date_column(&self.dates)?,
            Column::new(HEADLINE.into(), self.headlines.clone()),
            Column::new(SENTIMENT.into(), sentiments),
        ])?;

        Ok(ScoredNews { df })
    }
}

impl ScoredNews {
    pub fn aggregate_daily(&self) -> ScResult<DailySentiment> {
        let df = self
            .df
            .clone()
            .lazy()
            .group_by([col(DATE)])
            .agg([col(SENTIMENT).mean()])
            .sort([DATE], SortMultipleOptions::default())
            .collect()?;
        debug!("Aggregated sentiment into {} days", df.height());

        Ok(DailySentiment { df })
    }
}

impl DailySentiment {
    pub(crate) fn len(&self) -> usize {
        self.df.height()
    }

    pub(crate) fn df(&self) -> &DataFrame {
        &self.df
    }
}
