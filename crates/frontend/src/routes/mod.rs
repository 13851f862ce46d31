pub mod home;
pub mod routes;
