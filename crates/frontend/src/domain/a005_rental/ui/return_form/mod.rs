//! Process return page
//!
//! - view_model.rs: customer -> rental cascade, quantity clamp, summary
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::RentalReturnPage;
pub use view_model::RentalReturnViewModel;
