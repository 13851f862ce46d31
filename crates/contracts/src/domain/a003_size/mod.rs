pub mod aggregate;

pub use aggregate::{Size, SizeQuery};
