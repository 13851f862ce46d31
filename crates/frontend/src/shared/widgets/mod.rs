pub mod char_counter;
pub mod picture_slot;
pub mod select_options;

pub use char_counter::CharCounter;
pub use picture_slot::PictureSlot;
pub use select_options::SelectOptions;
