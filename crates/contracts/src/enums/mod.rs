pub mod rental_status;

pub use rental_status::RentalStatus;
