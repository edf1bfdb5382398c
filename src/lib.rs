//! # users-api
//!
//! A small HTTP service exposing CRUD over a single `users` resource, held in a
//! process-local store behind one reader/writer lock. It runs on the `may`
//! coroutine runtime with `may_minihttp` as the transport.
//!
//! ## Architecture
//!
//! - **[`model`]** - the [`User`](model::User) record and the create/update payload
//! - **[`store`]** - lock-guarded map plus id counter; all concurrency lives here
//! - **[`router`]** - segment-based classification of `/users` paths
//! - **[`dispatcher`]** - method + path to one store operation, errors to status codes
//! - **[`handlers`]** - one function per route
//! - **[`server`]** - `HttpService` adapter, request parsing, response writing
//! - **[`config`]**, **[`runtime_config`]**, **[`logging`]**, **[`cli`]** - the process around it
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Client
//!     participant Server as AppService<br/>(may_minihttp)
//!     participant Router as ResourceRouter
//!     participant Dispatcher
//!     participant Store as UserStore
//!
//!     Client->>Server: PUT /users/3 {"username":"b",...}
//!     Server->>Dispatcher: dispatch(PUT, "/users/3", body)
//!     Dispatcher->>Router: classify("/users/3")
//!     Router-->>Dispatcher: Item(3)
//!     Dispatcher->>Dispatcher: decode UserPayload
//!     alt Malformed body
//!         Dispatcher-->>Client: 400 Bad Request
//!     end
//!     Dispatcher->>Store: update(3, payload)  [exclusive lock]
//!     alt Absent
//!         Store-->>Dispatcher: NotFound(3)
//!         Dispatcher-->>Client: 404 Not Found
//!     end
//!     Store-->>Dispatcher: User (owned copy, lock released)
//!     Dispatcher->>Dispatcher: serialize User
//!     Dispatcher-->>Server: HandlerResponse 200
//!     Server-->>Client: 200 OK + JSON body
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use users_api::config::ServiceConfig;
//! use users_api::cli::build_service;
//! use users_api::server::serve;
//!
//! let config = ServiceConfig::default();
//! let running = serve(build_service(&config), &config.http).unwrap();
//! running.wait().unwrap();
//! ```
//!
//! ```bash
//! curl -X POST -H "Content-Type: application/json" \
//!   -d '{"username":"a","password":"p","email":"a@x.com"}' \
//!   http://localhost:8080/users
//! curl http://localhost:8080/users/0
//! ```

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod handlers;
pub mod ids;
pub mod logging;
pub mod model;
pub mod router;
pub mod runtime_config;
pub mod server;
pub mod store;

pub use dispatcher::{DispatchError, Dispatcher, HandlerResponse};
pub use model::{Role, User, UserPayload};
pub use store::{StoreConfig, StoreError, UserStore};
