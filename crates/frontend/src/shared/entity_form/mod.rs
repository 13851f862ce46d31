//! Create/edit page shared by every `EntityForm`
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (references, fetch, save)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos view (pure UI)

mod model;
mod view;
mod view_model;

pub use view::entity_form_page;
pub use view_model::EntityFormViewModel;
