use crate::model::UserId;
use crate::store::StoreError;
use thiserror::Error;

/// Every way a request to the resource can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("invalid user id {0:?}")]
    InvalidIdentifier(String),
    #[error("invalid user payload: {0}")]
    MalformedPayload(String),
    #[error("user {0} not found")]
    NotFound(UserId),
    #[error("failed to encode response: {0}")]
    Serialization(String),
    #[error("no user ids left to assign")]
    IdsExhausted,
    #[error("HTTP verb {0} not implemented")]
    UnsupportedMethod(String),
}

impl DispatchError {
    pub fn status(&self) -> u16 {
        match self {
            DispatchError::InvalidIdentifier(_) | DispatchError::MalformedPayload(_) => 400,
            DispatchError::NotFound(_) => 404,
            DispatchError::Serialization(_) | DispatchError::IdsExhausted => 500,
            DispatchError::UnsupportedMethod(_) => 501,
        }
    }

    /// Server-side failure, as opposed to a bad request.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DispatchError::Serialization(_) | DispatchError::IdsExhausted
        )
    }
}

impl From<StoreError> for DispatchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => DispatchError::NotFound(id),
            StoreError::IdsExhausted => DispatchError::IdsExhausted,
        }
    }
}
