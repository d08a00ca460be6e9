//! Modal popup shown from the visual identity wheel.
//!
//! # Design
//! - One shared overlay; at most one content panel visible at a time.
//! - Opening hides every panel before showing the target.
//! - Close button, overlay click and Escape converge on [`PopupController::close`].

use std::fmt;

use crate::dom::Element;

const CONTAINER: &str = "#popup";
const PANELS: &str = ".popupBox__content";
const ACTIVE_CLASS: &str = "active";
const BODY_OPEN_CLASS: &str = "openPopup";
const HOTSPOT_COUNT: u8 = 9;

/// Popup panel identifier (`data-popup-id`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PopupId(u8);

impl PopupId {
    /// Panel for the wheel centre.
    pub const CENTER: Self = Self(0);

    /// Map a hotspot's `data-section` value to its panel: `center` → 0, `1`..`9` → 1..9.
    #[must_use]
    pub fn from_hotspot(section: &str) -> Option<Self> {
        let section = section.trim();
        if section == "center" {
            return Some(Self::CENTER);
        }
        section
            .parse::<u8>()
            .ok()
            .filter(|index| (1..=HOTSPOT_COUNT).contains(index))
            .map(Self)
    }

    /// Numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    fn selector(self) -> String {
        format!(r#"[data-popup-id="{}"]"#, self.0)
    }
}

impl fmt::Display for PopupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visibility of the popup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupState {
    /// Nothing shown.
    #[default]
    Hidden,
    /// A panel is shown.
    Shown(PopupId),
}

/// Show/hide state machine over the popup markup.
#[derive(Clone, Debug, Default)]
pub struct PopupController {
    state: PopupState,
}

impl PopupController {
    /// Controller starting hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visibility.
    #[must_use]
    pub const fn state(&self) -> PopupState {
        self.state
    }

    /// Show panel `id`, hiding any other. No-op when the container or panel is missing.
    pub fn open<E: Element>(&mut self, root: &E, id: PopupId) -> bool {
        let (Some(container), Some(target)) = (root.select(CONTAINER), root.select(&id.selector()))
        else {
            tracing::debug!(popup = %id, "popup markup missing");
            return false;
        };
        for panel in root.select_all(PANELS) {
            panel.set_style("display", "none");
        }
        target.set_style("display", "block");
        container.add_class(ACTIVE_CLASS);
        if let Some(body) = root.select("body") {
            body.add_class(BODY_OPEN_CLASS);
        }
        self.state = PopupState::Shown(id);
        true
    }

    /// Hide the popup. Returns whether a panel was shown.
    pub fn close<E: Element>(&mut self, root: &E) -> bool {
        let Some(container) = root.select(CONTAINER) else {
            return false;
        };
        container.remove_class(ACTIVE_CLASS);
        if let Some(body) = root.select("body") {
            body.remove_class(BODY_OPEN_CLASS);
        }
        let was_shown = matches!(self.state, PopupState::Shown(_));
        self.state = PopupState::Hidden;
        was_shown
    }
}
