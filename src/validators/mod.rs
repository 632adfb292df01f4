//! Leaf validators: the typed checks at the bottom of a schema.

pub mod any;
pub mod boolean;
#[cfg(feature = "temporal")]
pub mod date;
pub mod enumeration;
pub mod literal;
pub mod number;
pub mod string;

pub use any::{AnyValidator, UnknownValidator, any, unknown};
pub use boolean::{BooleanValidator, boolean};
#[cfg(feature = "temporal")]
pub use date::{DateValidator, date, parse_date};
pub use enumeration::{EnumValidator, one_of};
pub use literal::{LiteralValidator, literal};
pub use number::{NumberValidator, number};
pub use string::{StringValidator, string};
