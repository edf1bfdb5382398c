use crate::dispatcher::{DispatchError, HandlerResponse};
use crate::model::UserId;
use crate::store::UserStore;
use tracing::debug;

/// `DELETE /users/{id}`, answering with the user as it was before removal.
pub fn handle(store: &UserStore, id: UserId) -> Result<HandlerResponse, DispatchError> {
    let removed = store.delete(id)?;
    debug!(id, "user deleted");
    HandlerResponse::json(200, &removed)
}
