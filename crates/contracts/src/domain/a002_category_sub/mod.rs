pub mod aggregate;
pub mod form;

pub use aggregate::{CategorySub, CategorySubDto};
pub use form::CategorySubForm;
