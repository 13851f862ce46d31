//! Behavioural constants and declarative form configuration.

/// Delay before leaving a page after a successful submission
pub const REDIRECT_DELAY_MS: u32 = 2_000;
/// Error messages hide themselves after this long
pub const ERROR_DISMISS_MS: u32 = 5_000;
/// Largest picture accepted for a subcategory
pub const MAX_PICTURE_BYTES: u64 = 5 * 1024 * 1024;

/// Viewport width from which the sidebar is never kept open
pub const SIDEBAR_BREAKPOINT_PX: f64 = 1024.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

pub const USERNAME_MAX_LEN: usize = 32;
pub const PIN_LEN: usize = 6;

/// Share of `max_len` at which a character counter turns amber
pub const DEFAULT_WARNING_RATIO: f64 = 0.8;

pub const CANCEL_CONFIRMATION: &str =
    "Are you sure you want to cancel? Any unsaved changes will be lost.";

// ============================================================================
// Character counters
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Error,
}

impl CounterLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            CounterLevel::Normal => "char-count",
            CounterLevel::Warning => "char-count warning",
            CounterLevel::Error => "char-count error",
        }
    }
}

pub fn counter_level(len: usize, max_len: usize, warning_ratio: f64) -> CounterLevel {
    if len >= max_len {
        CounterLevel::Error
    } else if len as f64 >= max_len as f64 * warning_ratio {
        CounterLevel::Warning
    } else {
        CounterLevel::Normal
    }
}

pub fn counter_text(len: usize, max_len: usize) -> String {
    format!("{} / {}", len, max_len)
}

// ============================================================================
// Form configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Collections a select field can be filled from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSource {
    Categories,
}

impl ReferenceSource {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ReferenceSource::Categories => "/api/categories",
        }
    }

    /// Plural noun used in load error messages
    pub fn noun(&self) -> &'static str {
        match self {
            ReferenceSource::Categories => "categories",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Select(ReferenceSource),
    /// Image stored as a data URI
    Picture,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Key in `FieldValues` and DOM id suffix
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub max_len: Option<usize>,
    pub placeholder: &'static str,
    pub required: bool,
}

impl FieldSpec {
    pub const fn text(key: &'static str, label: &'static str, max_len: usize) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            max_len: Some(max_len),
            placeholder: "",
            required: true,
        }
    }

    pub const fn notes(key: &'static str, label: &'static str, max_len: usize) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Multiline,
            max_len: Some(max_len),
            placeholder: "",
            required: false,
        }
    }

    pub const fn select(key: &'static str, label: &'static str, source: ReferenceSource) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Select(source),
            max_len: None,
            placeholder: "",
            required: true,
        }
    }

    pub const fn picture(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Picture,
            max_len: None,
            placeholder: "",
            required: false,
        }
    }

    pub const fn mandatory(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// Everything the generic form controller needs to know about an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormConfig {
    /// Lower-case noun used in messages ("category")
    pub entity: &'static str,
    /// Capitalised noun used in headings and success messages ("Category")
    pub title: &'static str,
    /// Collection endpoint, items live at `{collection}/{id}`
    pub collection: &'static str,
    pub fields: &'static [FieldSpec],
    pub warning_ratio: f64,
}

impl FormConfig {
    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.collection, id)
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn heading(&self, mode: FormMode) -> String {
        match mode {
            FormMode::Create => format!("Create {}", self.title),
            FormMode::Edit => format!("Edit {}", self.title),
        }
    }

    pub fn success_message(&self, mode: FormMode) -> String {
        match mode {
            FormMode::Create => format!("{} created successfully!", self.title),
            FormMode::Edit => format!("{} updated successfully!", self.title),
        }
    }

    pub fn failure_fallback(&self, mode: FormMode) -> String {
        match mode {
            FormMode::Create => format!("Failed to create {}", self.entity),
            FormMode::Edit => format!("Failed to update {}", self.entity),
        }
    }

    pub fn not_found_fallback(&self) -> String {
        format!("{} not found", self.title)
    }

    pub fn missing_id_message(&self) -> String {
        format!("No {} ID provided", self.entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[FieldSpec::text("name", "Name", 32)];
    const CONFIG: FormConfig = FormConfig {
        entity: "subcategory",
        title: "Subcategory",
        collection: "/api/categories-sub",
        fields: FIELDS,
        warning_ratio: 0.85,
    };

    #[test]
    fn test_counter_thresholds() {
        assert_eq!(counter_level(25, 32, 0.8), CounterLevel::Normal);
        assert_eq!(counter_level(26, 32, 0.8), CounterLevel::Warning);
        assert_eq!(counter_level(27, 32, 0.85), CounterLevel::Normal);
        assert_eq!(counter_level(28, 32, 0.85), CounterLevel::Warning);
        assert_eq!(counter_level(32, 32, 0.85), CounterLevel::Error);
        assert_eq!(counter_text(5, 64), "5 / 64");
        assert_eq!(CounterLevel::Normal.css_class(), "char-count");
        assert_eq!(counter_level(28, 32, 0.85).css_class(), "char-count warning");
    }

    #[test]
    fn test_messages_derive_from_entity() {
        assert_eq!(CONFIG.item_path("12"), "/api/categories-sub/12");
        assert_eq!(
            CONFIG.success_message(FormMode::Edit),
            "Subcategory updated successfully!"
        );
        assert_eq!(
            CONFIG.failure_fallback(FormMode::Create),
            "Failed to create subcategory"
        );
        assert_eq!(CONFIG.not_found_fallback(), "Subcategory not found");
        assert_eq!(CONFIG.missing_id_message(), "No subcategory ID provided");
        assert!(CONFIG.field("name").is_some());
        assert!(CONFIG.field("missing").is_none());
    }
}
