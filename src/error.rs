use thiserror::Error;

use crate::config::CONNECTION_URI_KEY;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{} is missing or empty", CONNECTION_URI_KEY)]
    ConfigurationMissing,
    #[error("{0}")]
    OperationFailure(String),
}

impl From<anyhow::Error> for ProbeError {
    fn from(e: anyhow::Error) -> Self {
        // keep the whole context chain, not just the outermost message
        ProbeError::OperationFailure(format!("{:#}", e))
    }
}
