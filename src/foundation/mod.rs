//! Foundation layer: the validation contract, the issue model, and the
//! policies shared by every node.

pub mod error;
pub mod presence;
pub mod traits;
pub mod value;

pub use error::{Issue, Issues, join_path};
pub use presence::Presence;
pub use traits::{BoxValidator, Outcome, Validate, ValidateExt};
pub use value::{as_number, loose_eq, type_name};

pub(crate) use presence::impl_presence_builders;
