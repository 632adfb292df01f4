//! # veld
//!
//! Composable runtime schema validation for dynamic JSON values.
//!
//! Schemas are built from validator nodes: leaves check one typed value
//! (`string()`, `number()`, `date()`, ...), combinators compose other nodes
//! (`object()`, `array()`, `union()`, ...). Validating a
//! [`serde_json::Value`] either yields its canonical form or every violation
//! found, each located by a precise path like `user.tags[2]`.
//!
//! ```rust,ignore
//! use veld::prelude::*;
//! use serde_json::json;
//!
//! let user = object()
//!     .field("name", string().trim().min(1))
//!     .field("email", string().email())
//!     .field("age", number().int().min(0.0).optional());
//!
//! match user.validate(&json!({"name": " Ada ", "email": "ada@example.com"})) {
//!     Ok(canonical) => println!("ok: {canonical}"),
//!     Err(issues) => {
//!         for issue in &issues {
//!             eprintln!("{}: {}", issue.path, issue.message);
//!         }
//!     }
//! }
//! ```
//!
//! ## Presence
//!
//! Every node handles `null` through the same policy: a configured default
//! wins, then `optional()`/`nullable()` accept it, otherwise the node
//! rejects it. See [`foundation::Presence`].
//!
//! ## Recursion
//!
//! [`combinators::lazy`] defers construction of a node until validation
//! reaches it, enabling self-referential schemas without cycles in the
//! built graph.

// Outcome carries the full issue list by value; validation is not a hot
// enough path to justify boxing it.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use foundation::{BoxValidator, Issue, Issues, Outcome, Validate, ValidateExt};
