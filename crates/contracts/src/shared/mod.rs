pub mod api_error;
pub mod date_format;
pub mod entity_form;
pub mod form_settings;
pub mod messages;
pub mod picture;
pub mod selection;
pub mod summary;
pub mod validation;
