use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
