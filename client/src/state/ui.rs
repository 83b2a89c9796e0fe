//! Page-level UI state (render mode, launcher popup).
//!
//! DESIGN
//! ======
//! Keeps the portal chrome out of the conversation state: the portal never
//! holds a conversation, and the embedded frame never shows the launcher.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which surface this page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Top-level page: landing content plus the floating launcher.
    Portal,
    /// Running inside a frame: the chat surface itself.
    Widget,
}

impl RenderMode {
    #[must_use]
    pub const fn from_embedded(embedded: bool) -> Self {
        if embedded { Self::Widget } else { Self::Portal }
    }

    #[must_use]
    pub const fn is_embedded(self) -> bool {
        matches!(self, Self::Widget)
    }
}

/// Where a click on the portal page landed, relative to the launcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupClick {
    /// The launcher button itself.
    Launcher,
    /// Inside the launcher container (popup frame included).
    Inside,
    Outside,
}

impl PopupClick {
    /// Classify a page click by whether the container contains its target.
    #[must_use]
    pub const fn from_containment(inside: bool) -> Self {
        if inside { Self::Inside } else { Self::Outside }
    }
}

/// UI state shared through context by the root component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Unset until the browser has resolved it after hydration.
    pub mode: Option<RenderMode>,
    /// Launcher popup (and its frame) is shown.
    pub popup_open: bool,
}

impl UiState {
    pub fn toggle_popup(&mut self) {
        self.popup_open = !self.popup_open;
    }

    pub fn close_popup(&mut self) {
        self.popup_open = false;
    }

    /// Apply a click: the launcher toggles, an outside click closes, a
    /// click inside the container leaves the popup alone.
    pub fn handle_click(&mut self, click: PopupClick) {
        match click {
            PopupClick::Launcher => self.toggle_popup(),
            PopupClick::Inside => {}
            PopupClick::Outside => self.close_popup(),
        }
    }
}
