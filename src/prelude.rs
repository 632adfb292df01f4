//! Prelude module for convenient imports.
//!
//! Provides a single `use veld::prelude::*;` import that brings in the core
//! traits, the combinators, and every leaf validator.
//!
//! # Examples
//!
//! ```rust,ignore
//! use veld::prelude::*;
//!
//! let user = object()
//!     .field("name", string().trim().min(1))
//!     .field("email", string().email())
//!     .field("tags", array(string()).optional());
//! ```

// ============================================================================
// FOUNDATION: Core traits and error model
// ============================================================================

pub use crate::foundation::{
    BoxValidator, Issue, Issues, Outcome, Presence, Validate, ValidateExt,
};

// ============================================================================
// COMBINATORS: Structural nodes and their factories
// ============================================================================

pub use crate::combinators::{
    ArrayValidator, IntersectionValidator, LazyValidator, ObjectValidator, RecordValidator,
    TupleValidator, UnionValidator, UnknownFields, array, intersection, lazy, object, record,
    tuple, union,
};

// ============================================================================
// VALIDATORS: All built-in leaves
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
