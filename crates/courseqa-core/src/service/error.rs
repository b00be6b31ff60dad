//! Query error types

use thiserror::Error;

use crate::providers::ProviderError;

/// Why a query produced no answer
#[derive(Error, Debug)]
pub enum QueryError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Unknown session: {0}")]
    UnknownSession(String),
}

pub type QueryResult<T> = Result<T, QueryError>;
