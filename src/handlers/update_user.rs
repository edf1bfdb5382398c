use super::decode_payload;
use crate::dispatcher::{DispatchError, HandlerResponse};
use crate::model::UserId;
use crate::store::UserStore;
use tracing::debug;

/// `PUT /users/{id}`
///
/// The id in the path wins over any `id` in the body.
pub fn handle(store: &UserStore, id: UserId, body: &[u8]) -> Result<HandlerResponse, DispatchError> {
    let payload = decode_payload(body)?;
    let user = store.update(id, payload)?;
    debug!(id, "user updated");
    HandlerResponse::json(200, &user)
}
