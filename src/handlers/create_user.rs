use super::decode_payload;
use crate::dispatcher::{DispatchError, HandlerResponse};
use crate::store::UserStore;
use tracing::debug;

/// `POST /users`
pub fn handle(store: &UserStore, body: &[u8]) -> Result<HandlerResponse, DispatchError> {
    let payload = decode_payload(body)?;
    let user = store.create(payload)?;
    debug!(id = user.id, role = %user.role, "user created");
    HandlerResponse::json(201, &user)
}
