//! Per-route handlers. Each one performs a single store operation and renders
//! the user it gets back; none of them holds the store lock while encoding.

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

use crate::dispatcher::DispatchError;
use crate::model::UserPayload;

/// Decode a request body into the payload shape. Runs before any mutation.
pub(crate) fn decode_payload(body: &[u8]) -> Result<UserPayload, DispatchError> {
    serde_json::from_slice(body).map_err(|e| DispatchError::MalformedPayload(e.to_string()))
}
