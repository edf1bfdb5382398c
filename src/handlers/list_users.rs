use crate::dispatcher::{DispatchError, HandlerResponse};
use crate::store::UserStore;
use tracing::debug;

/// `GET /users`
pub fn handle(store: &UserStore) -> Result<HandlerResponse, DispatchError> {
    let users = store.list_all();
    debug!(count = users.len(), "listing users");
    HandlerResponse::json(200, &users)
}
