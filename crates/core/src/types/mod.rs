//! Shared domain types.

mod email;
mod status;

pub use email::{Email, EmailError};
pub use status::{FoodStatus, FoodStatusError};
