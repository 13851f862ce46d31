//! Create rental page
//!
//! - view_model.rs: reference snapshots, selector cascade, submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::RentalCreatePage;
pub use view_model::RentalCreateViewModel;
