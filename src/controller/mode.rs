/// Whether the current entry is fresh or has been submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryMode {
    /// A new or in-progress entry that has not been sent yet.
    #[default]
    Editing,
    /// A submission of this entry has started; only "new entry" leaves this mode.
    ReadOnlyAfterSave,
}

/// The two sections of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    OwnerDetails,
    PropertyDetails,
}

static ALL_TABS: &[Tab] = &[Tab::OwnerDetails, Tab::PropertyDetails];

impl Tab {
    /// Returns all tabs in display order.
    pub fn all() -> &'static [Tab] {
        ALL_TABS
    }

    /// Position of this tab in the tab bar.
    pub fn index(self) -> usize {
        match self {
            Tab::OwnerDetails => 0,
            Tab::PropertyDetails => 1,
        }
    }

    /// Tab at `index`, if there is one.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Tab bar title.
    pub fn title(self) -> &'static str {
        match self {
            Tab::OwnerDetails => "Owner Details",
            Tab::PropertyDetails => "Property Details",
        }
    }
}

/// Which tab is active. Changes only on explicit user selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabState {
    active: Tab,
}

impl TabState {
    /// Starts on [`Tab::OwnerDetails`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The active tab.
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Index of the active tab.
    pub fn index(&self) -> usize {
        self.active.index()
    }

    /// Activates `tab`.
    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    /// Activates the tab at `index`. Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        match Tab::from_index(index) {
            Some(tab) => {
                self.active = tab;
                true
            }
            None => false,
        }
    }

    /// Moves to the next tab, wrapping around.
    pub fn next(&mut self) {
        let tabs = Tab::all();
        self.active = tabs[(self.index() + 1) % tabs.len()];
    }

    /// Moves to the previous tab, wrapping around.
    pub fn prev(&mut self) {
        let tabs = Tab::all();
        self.active = tabs[(self.index() + tabs.len() - 1) % tabs.len()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_owner_details() {
        let tabs = TabState::new();
        assert_eq!(tabs.active(), Tab::OwnerDetails);
        assert_eq!(tabs.index(), 0);
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut tabs = TabState::new();
        tabs.next();
        assert_eq!(tabs.active(), Tab::PropertyDetails);
        tabs.next();
        assert_eq!(tabs.active(), Tab::OwnerDetails);
        tabs.prev();
        assert_eq!(tabs.active(), Tab::PropertyDetails);
    }

    #[test]
    fn select_index_in_range() {
        let mut tabs = TabState::new();
        assert!(tabs.select_index(1));
        assert_eq!(tabs.active(), Tab::PropertyDetails);
    }

    #[test]
    fn select_index_out_of_range_ignored() {
        let mut tabs = TabState::new();
        assert!(!tabs.select_index(2));
        assert_eq!(tabs.active(), Tab::OwnerDetails);
    }

    #[test]
    fn index_round_trips() {
        for &tab in Tab::all() {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
    }

    #[test]
    fn default_entry_mode_is_editing() {
        assert_eq!(EntryMode::default(), EntryMode::Editing);
    }
}
