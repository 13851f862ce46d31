pub mod a001_category;
pub mod a002_category_sub;
pub mod a003_size;
pub mod a004_customer;
pub mod a005_rental;
pub mod common;
