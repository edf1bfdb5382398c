use crate::model::UserId;
use thiserror::Error;

/// Failure of a store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("user {0} not found")]
    NotFound(UserId),
    #[error("no user ids left to assign")]
    IdsExhausted,
}
