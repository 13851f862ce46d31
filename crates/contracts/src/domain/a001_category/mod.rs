pub mod aggregate;
pub mod form;

pub use aggregate::{Category, CategoryDto};
pub use form::CategoryForm;
