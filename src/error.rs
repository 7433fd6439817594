use thiserror::Error;

pub type MetroResult<T> = Result<T, MetroError>;

#[derive(Debug, Error)]
pub enum MetroError {
    #[error("row {row_index}: malformed time value `{value}`")]
    MalformedTimeValue { row_index: usize, value: String },

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
