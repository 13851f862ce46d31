pub mod create;
pub mod return_form;
