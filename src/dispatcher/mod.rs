//! # Dispatcher Module
//!
//! Maps a request's method and classified path to one store operation and
//! turns the outcome into a wire-ready [`HandlerResponse`].
//!
//! ## Routing Table
//!
//! | Method | Path            | Handler                          | Success |
//! |--------|-----------------|----------------------------------|---------|
//! | GET    | `/users`        | [`list_users`](crate::handlers::list_users)   | 200 |
//! | GET    | `/users/{id}`   | [`get_user`](crate::handlers::get_user)       | 200 |
//! | POST   | `/users`        | [`create_user`](crate::handlers::create_user) | 201 |
//! | PUT    | `/users/{id}`   | [`update_user`](crate::handlers::update_user) | 200 |
//! | DELETE | `/users/{id}`   | [`delete_user`](crate::handlers::delete_user) | 200 |
//!
//! Any other method on a `/users...` path is answered with 501. Paths outside
//! the resource are not the dispatcher's concern: [`Dispatcher::dispatch`]
//! returns `None` and the server answers 404.
//!
//! ## Ordering of Checks
//!
//! 1. Method: unsupported verbs fail before the path is inspected further.
//! 2. Id: a malformed `{id}` fails with 400 without touching the store.
//! 3. Payload: create and update decode the body fully before mutating.
//! 4. Store operation, under the lock mode the operation needs.
//! 5. Serialization of the returned user, after the lock is released.
//!
//! ## Error Handling
//!
//! Every failure is a [`DispatchError`] with exactly one status code. The
//! dispatcher logs it once and renders it as a short `text/plain` body.

mod core;
mod error;

pub use self::core::{Dispatcher, HandlerResponse, CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT};
pub use error::DispatchError;
