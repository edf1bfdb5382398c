use crate::dispatcher::{DispatchError, HandlerResponse};
use crate::model::UserId;
use crate::store::UserStore;

/// `GET /users/{id}`
pub fn handle(store: &UserStore, id: UserId) -> Result<HandlerResponse, DispatchError> {
    let user = store.get(id)?;
    HandlerResponse::json(200, &user)
}
