use shared_types::{Classify, ErrorKind, StoreError, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("invalid {module} params: {source}")]
    Invalid {
        module: &'static str,
        source: ValidationError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Classify for ParamsError {
    fn kind(&self) -> ErrorKind {
        match self {
            ParamsError::Invalid { .. } => ErrorKind::Validation,
            ParamsError::Store(e) => e.kind(),
        }
    }
}
