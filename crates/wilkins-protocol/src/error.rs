use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
