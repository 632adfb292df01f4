//! Structural combinators: nodes that compose other validators.
//!
//! | Combinator | Accepts | Failure policy |
//! |---|---|---|
//! | [`object`] | fixed named fields | collect all |
//! | [`array`] | homogeneous elements | collect all, size checks first |
//! | [`tuple`] | positional elements (+ rest) | collect all, length check first |
//! | [`record`] | uniform keys and values | collect all, key before value |
//! | [`union`] | any one member | first success wins |
//! | [`intersection`] | every member, threading outputs | collect all |
//! | [`lazy`] | whatever the factory builds | defers to the built node |

pub mod array;
pub mod intersection;
pub mod lazy;
pub mod object;
pub mod record;
pub mod tuple;
pub mod union;

pub use array::{ArrayValidator, array};
pub use intersection::{IntersectionValidator, intersection};
pub use lazy::{LazyValidator, lazy};
pub use object::{ObjectValidator, UnknownFields, object};
pub use record::{RecordValidator, record};
pub use tuple::{TupleValidator, tuple};
pub use union::{UnionValidator, union};
