//! # Store Module
//!
//! The authoritative, process-local collection of users.
//!
//! ## Locking
//!
//! A single reader/writer lock guards both the id-to-user map and the id
//! counter:
//!
//! - [`UserStore::list_all`] and [`UserStore::get`] take the shared lock and
//!   return clones, so readers run together and never hand out references into
//!   the map.
//! - [`UserStore::create`], [`UserStore::update`] and [`UserStore::delete`] take
//!   the exclusive lock. Existence checks and the mutation happen under the same
//!   guard, so two requests can never both see a user and then both act on it.
//! - Id allocation advances the counter and inserts the user in one critical
//!   section. No reader can observe an issued id without its user.
//!
//! Callers serialize the returned values after the guard is gone; the store
//! never holds the lock across I/O.
//!
//! ## Seeding
//!
//! [`StoreConfig`] picks the first id the counter hands out and, optionally, an
//! ADMIN user placed at that id when the store is built.
//!
//! ```rust
//! use users_api::model::UserPayload;
//! use users_api::store::{StoreConfig, UserStore};
//!
//! let store = UserStore::new(&StoreConfig::default());
//! let payload = UserPayload {
//!     username: "a".into(),
//!     password: "p".into(),
//!     email: "a@x.com".into(),
//!     role: None,
//! };
//! let created = store.create(payload).unwrap();
//! assert_eq!(created.id, 0);
//! assert_eq!(store.get(0).unwrap(), created);
//! ```

mod core;
mod error;
#[cfg(test)]
mod tests;

pub use self::core::{SeedUser, StoreConfig, UserStore};
pub use error::StoreError;
