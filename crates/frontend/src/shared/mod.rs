pub mod api_client;
pub mod api_utils;
pub mod date_utils;
pub mod entity_form;
pub mod flash;
pub mod icons;
pub mod widgets;
