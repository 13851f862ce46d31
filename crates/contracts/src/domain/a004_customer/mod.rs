pub mod aggregate;
pub mod form;

pub use aggregate::{Customer, CustomerDto};
pub use form::CustomerForm;
