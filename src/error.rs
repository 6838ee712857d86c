use thiserror::Error;

pub type ExplorerResult<T> = Result<T, ExplorerError>;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("json contract error: {0}")]
    Json(#[from] serde_json::Error),

    /// A year lookup found no sample in a series.
    #[error("series `{series}` has no value for year {year}")]
    DataGap { series: String, year: i32 },

    /// Baseline or peak divisor is zero, negative or absent.
    #[error("series `{series}` has a degenerate measure divisor")]
    InvalidDivisor { series: String },
}
