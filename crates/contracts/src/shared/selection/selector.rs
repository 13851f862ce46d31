use crate::domain::common::SelectOption;

/// Placeholder texts of one dependent selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorLabels {
    /// Shown while the parent is empty ("Select a category first...")
    pub no_parent: &'static str,
    pub loading: &'static str,
    /// First option once populated ("Select a subcategory...")
    pub prompt: &'static str,
    /// Shown when the parent has no children ("No sizes available")
    pub empty: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorState {
    NoParent,
    Loading,
    Populated(Vec<SelectOption>),
    NoOptions,
}

/// Proof that a load was started; only the newest ticket may apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub level: usize,
    pub epoch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Populated(usize),
    Empty,
    /// A newer load or reset superseded this ticket; nothing changed
    Stale,
}

#[derive(Debug, Clone)]
pub struct DependentSelector {
    labels: SelectorLabels,
    state: SelectorState,
    selected: String,
    epoch: u64,
}

impl DependentSelector {
    pub fn new(labels: SelectorLabels) -> Self {
        Self {
            labels,
            state: SelectorState::NoParent,
            selected: String::new(),
            epoch: 0,
        }
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.state, SelectorState::Populated(_))
    }

    /// Back to the disabled, empty state. Pending loads become stale.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = SelectorState::NoParent;
        self.selected.clear();
    }

    pub fn begin_load(&mut self, level: usize) -> LoadTicket {
        self.epoch += 1;
        self.state = SelectorState::Loading;
        self.selected.clear();
        LoadTicket {
            level,
            epoch: self.epoch,
        }
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.epoch == self.epoch && self.state == SelectorState::Loading
    }

    /// Replace the option set with the loaded one, rebuilt from scratch
    pub fn apply(&mut self, ticket: LoadTicket, options: Vec<SelectOption>) -> LoadOutcome {
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }
        if options.is_empty() {
            self.state = SelectorState::NoOptions;
            LoadOutcome::Empty
        } else {
            let count = options.len();
            self.state = SelectorState::Populated(options);
            LoadOutcome::Populated(count)
        }
    }

    /// A failed load leaves the selector disabled. Returns false for a stale ticket.
    pub fn fail(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = SelectorState::NoParent;
        true
    }

    /// Select an offered value; the empty value clears the selection.
    /// Values that are not on offer are ignored.
    pub fn select(&mut self, value: &str) -> bool {
        if value.is_empty() {
            self.selected.clear();
            return true;
        }
        match &self.state {
            SelectorState::Populated(options) if options.iter().any(|o| o.value == value) => {
                self.selected = value.to_string();
                true
            }
            _ => false,
        }
    }

    /// Full option list as rendered, placeholder first
    pub fn options(&self) -> Vec<SelectOption> {
        match &self.state {
            SelectorState::NoParent => vec![SelectOption::placeholder(self.labels.no_parent)],
            SelectorState::Loading => vec![SelectOption::placeholder(self.labels.loading)],
            SelectorState::NoOptions => vec![SelectOption::placeholder(self.labels.empty)],
            SelectorState::Populated(options) => {
                let mut all = Vec::with_capacity(options.len() + 1);
                all.push(SelectOption::placeholder(self.labels.prompt));
                all.extend(options.iter().cloned());
                all
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: SelectorLabels = SelectorLabels {
        no_parent: "Select a subcategory first...",
        loading: "Loading...",
        prompt: "Select a size...",
        empty: "No sizes available",
    };

    fn opts(values: &[&str]) -> Vec<SelectOption> {
        values.iter().map(|v| SelectOption::new(*v, format!("Size {}", v))).collect()
    }

    #[test]
    fn test_load_lifecycle() {
        let mut sel = DependentSelector::new(LABELS);
        assert!(!sel.is_enabled());
        assert_eq!(sel.options(), vec![SelectOption::placeholder(LABELS.no_parent)]);

        let ticket = sel.begin_load(1);
        assert_eq!(sel.state(), &SelectorState::Loading);
        assert!(!sel.is_enabled());

        assert_eq!(sel.apply(ticket, opts(&["1", "2"])), LoadOutcome::Populated(2));
        assert!(sel.is_enabled());
        let rendered = sel.options();
        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].is_placeholder());
        assert_eq!(rendered[0].label, LABELS.prompt);
        assert_eq!(rendered[1].value, "1");
    }

    #[test]
    fn test_empty_result_disables_with_explanation() {
        let mut sel = DependentSelector::new(LABELS);
        let ticket = sel.begin_load(1);
        assert_eq!(sel.apply(ticket, Vec::new()), LoadOutcome::Empty);
        assert_eq!(sel.state(), &SelectorState::NoOptions);
        assert!(!sel.is_enabled());
        assert_eq!(sel.options()[0].label, "No sizes available");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut sel = DependentSelector::new(LABELS);
        let first = sel.begin_load(1);
        let second = sel.begin_load(1);

        assert_eq!(sel.apply(second, opts(&["7"])), LoadOutcome::Populated(1));
        // The slower, older response arrives last
        assert_eq!(sel.apply(first, opts(&["1", "2", "3"])), LoadOutcome::Stale);
        assert_eq!(sel.state(), &SelectorState::Populated(opts(&["7"])));
    }

    #[test]
    fn test_reset_invalidates_pending_load() {
        let mut sel = DependentSelector::new(LABELS);
        let ticket = sel.begin_load(1);
        sel.reset();
        assert_eq!(sel.apply(ticket, opts(&["1"])), LoadOutcome::Stale);
        assert_eq!(sel.state(), &SelectorState::NoParent);
        assert!(!sel.fail(ticket));
    }

    #[test]
    fn test_failure_leaves_selector_disabled() {
        let mut sel = DependentSelector::new(LABELS);
        let ticket = sel.begin_load(1);
        assert!(sel.fail(ticket));
        assert!(!sel.is_enabled());
        assert_eq!(sel.state(), &SelectorState::NoParent);
    }

    #[test]
    fn test_select_only_offered_values() {
        let mut sel = DependentSelector::new(LABELS);
        assert!(!sel.select("1"));
        let ticket = sel.begin_load(1);
        sel.apply(ticket, opts(&["1", "2"]));
        assert!(sel.select("2"));
        assert_eq!(sel.selected(), "2");
        assert!(!sel.select("9"));
        assert_eq!(sel.selected(), "2");
        assert!(sel.select(""));
        assert_eq!(sel.selected(), "");
    }
}
