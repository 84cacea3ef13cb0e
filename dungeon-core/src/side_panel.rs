//! Side panel state for the exploration screen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tabs the side panel can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidePanelTab {
    #[default]
    Party,
    Deck,
    Inventory,
    Settings,
}

/// What a tab renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabContent {
    /// The party members with their HP.
    PartyRoster,
    /// The party's combined deck and its stats.
    DeckSummary,
    /// A feature that is not built yet.
    Placeholder(&'static str),
}

impl SidePanelTab {
    pub fn all() -> [SidePanelTab; 4] {
        [
            SidePanelTab::Party,
            SidePanelTab::Deck,
            SidePanelTab::Inventory,
            SidePanelTab::Settings,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SidePanelTab::Party => "Party",
            SidePanelTab::Deck => "Deck",
            SidePanelTab::Inventory => "Items",
            SidePanelTab::Settings => "Settings",
        }
    }

    pub fn content(&self) -> TabContent {
        match self {
            SidePanelTab::Party => TabContent::PartyRoster,
            SidePanelTab::Deck => TabContent::DeckSummary,
            SidePanelTab::Inventory => TabContent::Placeholder("Inventory is under construction"),
            SidePanelTab::Settings => TabContent::Placeholder("Settings are under construction"),
        }
    }
}

impl fmt::Display for SidePanelTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Open/closed state and the selected tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePanel {
    pub is_open: bool,
    pub active_tab: SidePanelTab,
}

impl SidePanel {
    /// Closed, showing the party tab.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Select a tab, opening the panel if it was closed.
    pub fn switch_tab(&mut self, tab: SidePanelTab) {
        self.active_tab = tab;
        self.is_open = true;
    }

    pub fn content(&self) -> TabContent {
        self.active_tab.content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let panel = SidePanel::new();
        assert!(!panel.is_open);
        assert_eq!(panel.active_tab, SidePanelTab::Party);
    }

    #[test]
    fn test_toggle_open_close() {
        let mut panel = SidePanel::new();
        panel.toggle();
        assert!(panel.is_open);
        panel.toggle();
        assert!(!panel.is_open);
        panel.open();
        panel.open();
        assert!(panel.is_open);
        panel.close();
        assert!(!panel.is_open);
    }

    #[test]
    fn test_switch_tab_opens_panel() {
        let mut panel = SidePanel::new();
        panel.switch_tab(SidePanelTab::Deck);
        assert!(panel.is_open);
        assert_eq!(panel.content(), TabContent::DeckSummary);

        panel.switch_tab(SidePanelTab::Settings);
        assert!(panel.is_open);
        assert!(matches!(panel.content(), TabContent::Placeholder(_)));
    }

    #[test]
    fn test_every_tab_has_content() {
        for tab in SidePanelTab::all() {
            assert!(!tab.label().is_empty());
            let expected_placeholder =
                matches!(tab, SidePanelTab::Inventory | SidePanelTab::Settings);
            assert_eq!(
                matches!(tab.content(), TabContent::Placeholder(_)),
                expected_placeholder,
                "{tab}"
            );
        }
        assert_eq!(SidePanelTab::Party.content(), TabContent::PartyRoster);
        assert_eq!(SidePanelTab::Deck.content(), TabContent::DeckSummary);
    }
}
