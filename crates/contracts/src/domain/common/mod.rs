//! Common types and traits shared by every reference record

pub mod entity_metadata;
pub mod reference;

// Re-exports
pub use entity_metadata::EntityMetadata;
pub use reference::{parse_id, ChildRecord, EntityId, ReferenceRecord, SelectOption};
