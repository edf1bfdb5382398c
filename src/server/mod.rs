//! # Server Module
//!
//! The transport adapter between `may_minihttp` and the [`Dispatcher`](crate::dispatcher::Dispatcher).
//!
//! - [`parse_request`] pulls method, path, headers and raw body out of the wire request.
//! - [`AppService`] implements `HttpService`: health check, then dispatch, then 404.
//! - [`serve`] binds the service and hands back a [`RunningServer`].
//!
//! Each connection is served by its own `may` coroutine. The dispatcher and
//! store below are synchronous.

pub mod listener;
pub mod request;
pub mod response;
pub mod service;

pub use listener::{serve, RunningServer};
pub use request::{parse_request, ParsedRequest};
pub use service::{health_endpoint, AppService};
