pub mod aggregate;
pub mod details;
pub mod form;
pub mod request;

pub use aggregate::{returnable_for_customer, Rental};
pub use details::RentalDetails;
pub use form::{RentalFormInput, ReturnFormInput};
pub use request::{RentalRequest, ReturnRequest};
