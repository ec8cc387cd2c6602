//! Local UI chrome state (copilot tabs, focus requests).
//!
//! DESIGN
//! ======
//! Only presentation state lives here. Conversations and copilot exchanges
//! stay in `inbox` and `copilot`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared between the transcript and the copilot side panel.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub copilot_tab: CopilotTab,
    /// Bumped whenever another pane hands a question to the copilot, so the
    /// panel can switch tabs and pull focus.
    pub copilot_focus_seq: u64,
}

impl UiState {
    /// Bring the copilot transcript to the front.
    pub fn focus_copilot(&mut self) {
        self.copilot_tab = CopilotTab::Copilot;
        self.copilot_focus_seq += 1;
    }
}

/// Tabs available in the copilot side panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopilotTab {
    #[default]
    Copilot,
    Details,
}

impl CopilotTab {
    pub const ALL: [Self; 2] = [Self::Copilot, Self::Details];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Copilot => "AI Copilot",
            Self::Details => "Details",
        }
    }
}
