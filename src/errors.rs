use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildBenchError {
    #[error("io error: {0}")]
    Io(String),
    #[error("malformed input: {0}")]
    Malformed(String),
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl BuildBenchError {
    pub fn io<T: Into<String>>(msg: T) -> Self {
        BuildBenchError::Io(msg.into())
    }

    pub fn malformed<T: Into<String>>(msg: T) -> Self {
        BuildBenchError::Malformed(msg.into())
    }

    pub fn missing_column<T: Into<String>>(msg: T) -> Self {
        BuildBenchError::MissingColumn(msg.into())
    }

    pub fn invalid_value<T: Into<String>>(msg: T) -> Self {
        BuildBenchError::InvalidValue(msg.into())
    }
}
