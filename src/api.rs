use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    config::Config,
    data::{merged::MergedTable, news::NewsTable, stock::StockTable},
    error::ScResult,
    report,
    report::plot::PlotOptions,
    sentiment::PolarityScorer,
    utils::stats::{self, Correlation},
};

pub struct Analysis {
    pub merged: MergedTable,
    pub correlation: Correlation,
}

pub struct CorrelateOutput {
    pub analysis: Analysis,
    pub plot_path: PathBuf,
    pub merged_path: PathBuf,
}

/// Scores, aggregates and joins the inputs, then correlates daily sentiment
/// with daily return.
pub fn analyze(
    stock: &StockTable,
    news: &NewsTable,
    scorer: &dyn PolarityScorer,
) -> ScResult<Analysis> {
    let daily = news.score(scorer)?.aggregate_daily()?;
    let merged = MergedTable::join(stock, &daily)?;

    let correlation = stats::pearson(&merged.sentiments()?, &merged.returns()?)?;
    debug!(
        "Correlated {} days: r = {}, p = {}",
        correlation.observations, correlation.coefficient, correlation.p_value
    );

    Ok(Analysis {
        merged,
        correlation,
    })
}

/// Runs the whole pipeline from the input files and writes the plot and the
/// merged table into `config.output_dir`.
pub fn correlate(
    stock_path: &Path,
    news_path: &Path,
    config: &Config,
    scorer: &dyn PolarityScorer,
) -> ScResult<CorrelateOutput> {
    let stock = StockTable::from_path(stock_path)?;
    let news = NewsTable::from_path(news_path)?;

    let analysis = analyze(&stock, &news, scorer)?;

    let plot_path = config.plot_path();
    report::write_plot(
        &analysis.merged,
        &plot_path,
        &PlotOptions {
            width: config.plot_width,
            height: config.plot_height,
            font_path: config.font_path.as_deref(),
        },
    )?;

    let merged_path = config.merged_path();
    report::write_merged_csv_file(&analysis.merged, &merged_path)?;

    Ok(CorrelateOutput {
        analysis,
        plot_path,
        merged_path,
    })
}
