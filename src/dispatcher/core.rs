use super::DispatchError;
use crate::handlers;
use crate::router::{PathMatch, ResourceRouter};
use crate::store::UserStore;
use http::Method;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// Fully rendered response, ready for the transport to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl HandlerResponse {
    /// Serialize `value` as the JSON body. Encoding failure is a 500.
    pub fn json<T: Serialize>(status: u16, value: &T) -> Result<Self, DispatchError> {
        let body =
            serde_json::to_vec(value).map_err(|e| DispatchError::Serialization(e.to_string()))?;
        Ok(Self {
            status,
            content_type: CONTENT_TYPE_JSON,
            body,
        })
    }

    pub fn text(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            content_type: CONTENT_TYPE_TEXT,
            body: message.into().into_bytes(),
        }
    }

    /// Body parsed back into JSON. Test and logging convenience.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

impl From<&DispatchError> for HandlerResponse {
    fn from(err: &DispatchError) -> Self {
        HandlerResponse::text(err.status(), err.to_string())
    }
}

/// Routes requests for the resource to the store.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    router: ResourceRouter,
    store: Arc<UserStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self {
            router: ResourceRouter::default(),
            store,
        }
    }

    pub fn store(&self) -> &Arc<UserStore> {
        &self.store
    }

    /// Handle one request.
    ///
    /// Returns `None` when `path` does not belong to the resource.
    pub fn dispatch(&self, method: &Method, path: &str, body: &[u8]) -> Option<HandlerResponse> {
        let target = self.router.classify(path);
        if !target.is_resource() {
            return None;
        }

        let response = match self.route(method, target, body) {
            Ok(response) => {
                info!(status = response.status, "request handled");
                response
            }
            Err(err) => {
                if err.is_internal() {
                    error!(status = err.status(), error = %err, "request failed");
                } else {
                    info!(status = err.status(), error = %err, "request rejected");
                }
                HandlerResponse::from(&err)
            }
        };
        Some(response)
    }

    fn route(
        &self,
        method: &Method,
        target: PathMatch,
        body: &[u8],
    ) -> Result<HandlerResponse, DispatchError> {
        let store = self.store.as_ref();
        match (method, target) {
            (&Method::GET, PathMatch::Collection) => handlers::list_users::handle(store),
            (&Method::POST, PathMatch::Collection) => handlers::create_user::handle(store, body),
            (&Method::GET, PathMatch::Item(id)) => handlers::get_user::handle(store, id),
            (&Method::PUT, PathMatch::Item(id)) => handlers::update_user::handle(store, id, body),
            (&Method::DELETE, PathMatch::Item(id)) => handlers::delete_user::handle(store, id),
            (&Method::GET | &Method::PUT | &Method::DELETE, PathMatch::InvalidId(raw)) => {
                Err(DispatchError::InvalidIdentifier(raw))
            }
            // Item verbs on the collection: the id is missing.
            (&Method::PUT | &Method::DELETE, PathMatch::Collection) => {
                Err(DispatchError::InvalidIdentifier(String::new()))
            }
            (other, _) => Err(DispatchError::UnsupportedMethod(other.to_string())),
        }
    }
}
