mod error;
mod flow;
mod form;
mod relay;
mod value_object;

pub use error::*;
pub use flow::*;
pub use form::{FormField, FormState};
pub use relay::*;
pub use value_object::*;
