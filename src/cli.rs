use std::path::{Path, PathBuf};

use colored::Colorize;
use sentcorr::{api, config::Config, error::ScResult, sentiment::LexiconScorer};
use tabled::settings::{
    Alignment, Color,
    object::{Columns, Object, Rows},
};

#[derive(clap::Args)]
pub struct CorrelateCommand {
    #[arg(long = "stock", help = "Path to the stock CSV, with Date and Close columns")]
    stock_path: PathBuf,

    #[arg(long = "news", help = "Path to the news CSV, with Date and Headline columns")]
    news_path: PathBuf,

    #[arg(
        long = "out",
        help = "Output directory, the default value is task3_output"
    )]
    output_dir: Option<PathBuf>,

    #[arg(short = 'p', long = "preview", help = "Print the merged table")]
    preview: bool,
}

impl CorrelateCommand {
    pub fn exec(&self, config_path: Option<&Path>) -> ScResult<()> {
        let mut config = Config::load(config_path)?;
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }

        let output = api::correlate(&self.stock_path, &self.news_path, &config, &LexiconScorer)?;

        if self.preview {
            let mut table_data: Vec<Vec<String>> = vec![output.analysis.merged.column_names()];
            table_data.extend(output.analysis.merged.rows()?);

            let mut table = tabled::builder::Builder::from_iter(&table_data).build();
            table.modify(Rows::first(), Color::FG_BRIGHT_BLACK);
            table.modify(Columns::first().not(Rows::first()), Color::FG_CYAN);
            table.modify(Columns::new(1..), Alignment::right());
            println!("{table}\n");
        }

        let correlation = &output.analysis.correlation;
        println!("Pearson Correlation: {}", correlation.coefficient);
        println!("P-value: {}", correlation.p_value);
        println!(
            "Saved plot to {}",
            output.plot_path.to_string_lossy().bright_black()
        );
        println!(
            "Saved merged file to {}",
            output.merged_path.to_string_lossy().bright_black()
        );

        Ok(())
    }
}
