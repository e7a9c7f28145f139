pub type ScResult<T> = Result<T, ScError>;

#[derive(Debug, thiserror::Error)]
pub enum ScError {
    #[error("[CSV Error] {0}")]
    CsvError(#[from] ::csv::Error),

    #[error("[Dataframe Error] {0}")]
    DataframeError(#[from] ::polars::error::PolarsError),

    #[error("[Degenerate] {message}")]
    Degenerate { code: &'static str, message: String },

    #[error("[Invalid] {message}")]
    Invalid { code: &'static str, message: String },

    #[error("[IO Error] {0}")]
    IoError(#[from] std::io::Error),

    #[error("[No Data] {message}")]
    NoData { code: &'static str, message: String },

    #[error("[Not Exists] {message}")]
    NotExists { code: &'static str, message: String },

    #[error("[Parse Config Error] {0}")]
    ParseConfigError(#[from] ::confy::ConfyError),

    #[error("[Plot Error] {0}")]
    PlotError(String),
}

impl ScError {
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Degenerate { code, .. }
            | Self::Invalid { code, .. }
            | Self::NoData { code, .. }
            | Self::NotExists { code, .. } => Some(*code),
            _ => None,
        }
    }
}
