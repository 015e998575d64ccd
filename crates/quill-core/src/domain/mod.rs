//! Domain entities - the core business objects.

mod post;
mod validation;

pub use post::{Post, PostAttributes};
pub use validation::{BLANK, FieldError, ValidationErrors, require_present};
