//! # Router Module
//!
//! Path classification for the `users` resource.
//!
//! ## Overview
//!
//! The router does not know about methods or the store. It answers one
//! question about a request path: does it name the collection, one item, an
//! item with a malformed id, or something outside the resource entirely?
//!
//! Matching works on segments rather than patterns:
//!
//! 1. Strip the query string and split the path on `/`.
//! 2. The first segment must equal the resource name exactly.
//! 3. If every remaining segment is empty (`/users`, `/users/`, `/users//`),
//!    the path names the collection.
//! 4. Otherwise there must be exactly one remaining segment, made only of ASCII
//!    digits and fitting in a [`UserId`](crate::model::UserId). Anything else
//!    is an invalid id, reported before the store is consulted.
//!
//! ## Example
//!
//! ```rust
//! use users_api::router::{PathMatch, ResourceRouter};
//!
//! let router = ResourceRouter::new("users");
//! assert_eq!(router.classify("/users/"), PathMatch::Collection);
//! assert_eq!(router.classify("/users/42"), PathMatch::Item(42));
//! assert_eq!(router.classify("/users/abc"), PathMatch::InvalidId("abc".into()));
//! assert_eq!(router.classify("/pets"), PathMatch::Foreign);
//! ```

mod core;

pub use self::core::{strip_query, PathMatch, ResourceRouter};
