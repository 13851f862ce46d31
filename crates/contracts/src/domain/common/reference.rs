//! Reference data: records that end up as options of a `<select>`.

/// Integer primary key used by every API record
pub type EntityId = i64;

/// One `<option>` of a selector. An empty `value` marks the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new(String::new(), label)
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// A record that can be offered in a selector
pub trait ReferenceRecord {
    fn id(&self) -> EntityId;

    /// Human readable option text
    fn option_label(&self) -> String;

    fn to_option(&self) -> SelectOption {
        SelectOption::new(self.id().to_string(), self.option_label())
    }
}

/// A record owned by a parent record (subcategory -> category, size -> subcategory)
pub trait ChildRecord: ReferenceRecord {
    fn parent_id(&self) -> EntityId;
}

/// Parse a selector value into an id. Empty or malformed values yield `None`.
pub fn parse_id(value: &str) -> Option<EntityId> {
    value.trim().parse::<EntityId>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
    }

    #[test]
    fn test_placeholder() {
        assert!(SelectOption::placeholder("Select...").is_placeholder());
        assert!(!SelectOption::new("1", "Shirts").is_placeholder());
    }
}
