//! Error type shared by the report loader and the chart renderer

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
