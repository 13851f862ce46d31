//! Dependent selection resolver.
//!
//! A chain of selectors (category -> subcategory -> size, customer ->
//! rental) where each level's options depend on the level above. Changing
//! a level resets everything below it before the immediate child is
//! reloaded, and every load carries an epoch so that a slow response for
//! an outdated parent is dropped instead of overwriting newer options.

mod cascade;
mod selector;

pub use cascade::SelectionCascade;
pub use selector::{DependentSelector, LoadOutcome, LoadTicket, SelectorLabels, SelectorState};

use crate::domain::common::{parse_id, ChildRecord, ReferenceRecord, SelectOption};

/// Records whose parent reference equals the selected parent value,
/// in source order. An empty or malformed parent value selects nothing.
pub fn children_of<T>(all: &[T], parent_value: &str) -> Vec<T>
where
    T: ChildRecord + Clone,
{
    match parse_id(parent_value) {
        Some(parent_id) => all
            .iter()
            .filter(|child| child.parent_id() == parent_id)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// One option per record, in source order
pub fn options_for<T: ReferenceRecord>(records: &[T]) -> Vec<SelectOption> {
    records.iter().map(ReferenceRecord::to_option).collect()
}

/// Find a record by the string value of a selector
pub fn find_selected<'a, T: ReferenceRecord>(records: &'a [T], value: &str) -> Option<&'a T> {
    let id = parse_id(value)?;
    records.iter().find(|r| r.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityId;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: EntityId,
        parent: EntityId,
        name: &'static str,
    }

    impl ReferenceRecord for Item {
        fn id(&self) -> EntityId {
            self.id
        }
        fn option_label(&self) -> String {
            self.name.to_string()
        }
    }

    impl ChildRecord for Item {
        fn parent_id(&self) -> EntityId {
            self.parent
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 10, parent: 1, name: "Kebaya" },
            Item { id: 11, parent: 2, name: "Jas" },
            Item { id: 12, parent: 1, name: "Batik" },
            Item { id: 13, parent: 3, name: "Gaun" },
        ]
    }

    #[test]
    fn test_children_of_keeps_source_order() {
        let children = children_of(&items(), "1");
        let ids: Vec<_> = children.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![10, 12]);
    }

    #[test]
    fn test_children_of_is_exact_subset_for_every_parent() {
        let all = items();
        for parent in 0..5 {
            let children = children_of(&all, &parent.to_string());
            let expected: Vec<_> = all.iter().filter(|c| c.parent == parent).cloned().collect();
            assert_eq!(children, expected);
        }
    }

    #[test]
    fn test_children_of_empty_parent() {
        assert!(children_of(&items(), "").is_empty());
        assert!(children_of(&items(), "x").is_empty());
    }

    #[test]
    fn test_options_and_lookup() {
        let all = items();
        let options = options_for(&all[..2]);
        assert_eq!(
            options,
            vec![SelectOption::new("10", "Kebaya"), SelectOption::new("11", "Jas")]
        );
        assert_eq!(find_selected(&all, "13").map(|i| i.name), Some("Gaun"));
        assert!(find_selected(&all, "99").is_none());
        assert!(find_selected(&all, "").is_none());
    }
}
