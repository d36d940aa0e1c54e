use thiserror::Error;

#[derive(Error, Debug)]
pub enum CityRiskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Data error: {0}")]
    Data(#[from] polars::error::PolarsError),

    #[error("Dataset error: {0}")]
    Dataset(String),
}

impl From<&str> for CityRiskError {
    fn from(error: &str) -> Self {
        CityRiskError::Dataset(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CityRiskError>;
