//! # Model Module
//!
//! The user record and the payload shape clients send to create or replace one.
//!
//! [`User`] is what the store owns and what every success response carries.
//! [`UserPayload`] is what `POST /users` and `PUT /users/{id}` decode into; it has
//! no `id` field, so any `id` a client sends is dropped during decoding and
//! the store assigns (or keeps) the real one.
//!
//! ```rust
//! use users_api::model::{Role, UserPayload};
//!
//! let payload: UserPayload =
//!     serde_json::from_str(r#"{"username":"a","password":"p","email":"a@x.com","id":7}"#)
//!         .unwrap();
//! let user = payload.into_user(0);
//! assert_eq!(user.id, 0);
//! assert_eq!(user.role, Role::General);
//! ```

mod user;

pub use user::{Role, User, UserId, UserPayload};
