use super::selector::{DependentSelector, LoadOutcome, LoadTicket, SelectorLabels};
use crate::domain::common::SelectOption;

/// Ordered chain of dependent selectors.
///
/// Level 0 depends on a top-level selector owned by the page (category,
/// customer); level `n + 1` depends on level `n`.
#[derive(Debug, Clone)]
pub struct SelectionCascade {
    levels: Vec<DependentSelector>,
}

impl SelectionCascade {
    pub fn new(labels: &[SelectorLabels]) -> Self {
        Self {
            levels: labels.iter().copied().map(DependentSelector::new).collect(),
        }
    }

    pub fn level(&self, level: usize) -> Option<&DependentSelector> {
        self.levels.get(level)
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn selected(&self, level: usize) -> &str {
        self.levels.get(level).map(|s| s.selected()).unwrap_or_default()
    }

    pub fn options(&self, level: usize) -> Vec<SelectOption> {
        self.levels.get(level).map(|s| s.options()).unwrap_or_default()
    }

    pub fn is_enabled(&self, level: usize) -> bool {
        self.levels.get(level).is_some_and(|s| s.is_enabled())
    }

    /// The parent of `level` changed. Resets `level` and everything below,
    /// then starts loading `level` when the parent value is non-empty.
    pub fn parent_changed(&mut self, level: usize, parent_value: &str) -> Option<LoadTicket> {
        if level >= self.levels.len() {
            return None;
        }
        for selector in &mut self.levels[level..] {
            selector.reset();
        }
        if parent_value.trim().is_empty() {
            None
        } else {
            Some(self.levels[level].begin_load(level))
        }
    }

    /// Select a value at `level`; the level below becomes its child.
    pub fn select(&mut self, level: usize, value: &str) -> Option<LoadTicket> {
        let accepted = self
            .levels
            .get_mut(level)
            .map(|s| s.select(value))
            .unwrap_or(false);
        if !accepted {
            return None;
        }
        self.parent_changed(level + 1, value)
    }

    pub fn apply(&mut self, ticket: LoadTicket, options: Vec<SelectOption>) -> LoadOutcome {
        match self.levels.get_mut(ticket.level) {
            Some(selector) => selector.apply(ticket, options),
            None => LoadOutcome::Stale,
        }
    }

    pub fn fail(&mut self, ticket: LoadTicket) -> bool {
        self.levels
            .get_mut(ticket.level)
            .is_some_and(|s| s.fail(ticket))
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.levels
            .get(ticket.level)
            .is_some_and(|s| s.is_current(ticket))
    }

    /// Clear the whole chain, as after a successful submission
    pub fn reset_all(&mut self) {
        for selector in &mut self.levels {
            selector.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::selection::SelectorState;

    const SUBCATEGORY: SelectorLabels = SelectorLabels {
        no_parent: "Select a category first...",
        loading: "Loading...",
        prompt: "Select a subcategory...",
        empty: "No subcategories available",
    };
    const SIZE: SelectorLabels = SelectorLabels {
        no_parent: "Select a subcategory first...",
        loading: "Loading...",
        prompt: "Select a size...",
        empty: "No sizes available",
    };

    fn opt(value: &str) -> SelectOption {
        SelectOption::new(value, format!("#{}", value))
    }

    fn populated_chain() -> SelectionCascade {
        let mut chain = SelectionCascade::new(&[SUBCATEGORY, SIZE]);
        let t = chain.parent_changed(0, "1").unwrap();
        chain.apply(t, vec![opt("10"), opt("12")]);
        let t = chain.select(0, "10").unwrap();
        chain.apply(t, vec![opt("100"), opt("101")]);
        chain.levels[1].select("101");
        chain
    }

    #[test]
    fn test_select_loads_next_level() {
        let chain = populated_chain();
        assert_eq!(chain.selected(0), "10");
        assert_eq!(chain.selected(1), "101");
        assert!(chain.is_enabled(1));
    }

    #[test]
    fn test_top_level_change_resets_every_downstream_selector() {
        let mut chain = populated_chain();
        let ticket = chain.parent_changed(0, "2").unwrap();

        assert_eq!(chain.level(0).unwrap().state(), &SelectorState::Loading);
        assert_eq!(chain.level(1).unwrap().state(), &SelectorState::NoParent);
        assert_eq!(chain.selected(0), "");
        assert_eq!(chain.selected(1), "");
        assert!(!chain.is_enabled(1));
        assert_eq!(chain.options(1)[0].label, SIZE.no_parent);
        assert!(chain.is_current(ticket));
    }

    #[test]
    fn test_clearing_parent_disables_without_loading() {
        let mut chain = populated_chain();
        assert_eq!(chain.parent_changed(0, ""), None);
        assert_eq!(chain.level(0).unwrap().state(), &SelectorState::NoParent);
        assert_eq!(chain.level(1).unwrap().state(), &SelectorState::NoParent);
    }

    #[test]
    fn test_no_stale_child_survives_two_parent_changes() {
        let mut chain = populated_chain();
        let first = chain.parent_changed(0, "2").unwrap();
        let second = chain.parent_changed(0, "3").unwrap();

        assert_eq!(chain.apply(second, vec![opt("30")]), LoadOutcome::Populated(1));
        assert_eq!(chain.apply(first, vec![opt("20"), opt("21")]), LoadOutcome::Stale);
        assert_eq!(chain.options(0)[1..], [opt("30")]);
        assert_eq!(chain.level(1).unwrap().state(), &SelectorState::NoParent);
    }

    #[test]
    fn test_pending_child_load_dropped_when_grandparent_changes() {
        let mut chain = SelectionCascade::new(&[SUBCATEGORY, SIZE]);
        let t = chain.parent_changed(0, "1").unwrap();
        chain.apply(t, vec![opt("10")]);
        let size_ticket = chain.select(0, "10").unwrap();

        // Category changes while sizes are still in flight
        chain.parent_changed(0, "2");
        assert_eq!(chain.apply(size_ticket, vec![opt("100")]), LoadOutcome::Stale);
        assert_eq!(chain.level(1).unwrap().state(), &SelectorState::NoParent);
    }

    #[test]
    fn test_select_unknown_value_is_ignored() {
        let mut chain = populated_chain();
        assert_eq!(chain.select(0, "99"), None);
        assert_eq!(chain.selected(0), "10");
        assert_eq!(chain.selected(1), "101");
    }

    #[test]
    fn test_reset_all() {
        let mut chain = populated_chain();
        chain.reset_all();
        assert!((0..chain.depth()).all(|l| !chain.is_enabled(l)));
    }
}
