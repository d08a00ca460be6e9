//! Input events to typed commands.
//!
//! # Design
//! - Translation is synchronous and side-effect free apart from the resize debouncer.
//! - Resize bursts arm the debouncer; only the timer armed by the last event of a
//!   burst yields a command.

use std::time::Duration;

use crate::debounce::Debouncer;
use crate::popup::PopupId;

/// Raw interactions reported by the page.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The language trigger was clicked.
    TriggerClicked,
    /// A visual identity hotspot was clicked; carries its `data-section`.
    HotspotClicked {
        /// Hotspot section value.
        section: String,
    },
    /// The popup close button was clicked.
    CloseClicked,
    /// The popup overlay was clicked.
    OverlayClicked,
    /// A key was pressed anywhere in the document.
    KeyDown {
        /// `KeyboardEvent.key` value.
        key: String,
    },
    /// The viewport was resized.
    Resized {
        /// Time of the event since page load.
        at: Duration,
    },
    /// The debounce timer armed by a [`InputEvent::Resized`] elapsed.
    ResizeSettled {
        /// `at` of the resize event that armed the timer.
        armed_at: Duration,
    },
    /// The mobile navigation opener was clicked.
    NavOpenClicked,
    /// The mobile navigation closer was clicked.
    NavCloseClicked,
    /// The document was scrolled.
    Scrolled {
        /// Current scroll offset.
        top: f64,
    },
    /// An in-page anchor was clicked; carries its `hash`.
    AnchorClicked {
        /// Fragment including the leading `#`, possibly empty.
        hash: String,
    },
}

/// Typed commands executed by [`crate::Site`].
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Toggle to the other locale.
    SwitchLocale,
    /// Show a popup panel.
    OpenPopup(PopupId),
    /// Hide the popup.
    ClosePopup,
    /// Re-lay out the carousels.
    Resize,
    /// Open the navigation drawer.
    OpenNav,
    /// Close the navigation drawer.
    CloseNav,
    /// Recompute the sticky header for a scroll offset.
    SyncHeader {
        /// Current scroll offset.
        scroll_top: f64,
    },
    /// Scroll to an in-page anchor.
    ScrollToAnchor(String),
}

/// Maps [`InputEvent`]s to [`Command`]s.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    resize: Debouncer,
}

impl Dispatcher {
    /// Dispatcher debouncing resizes by `resize_delay`.
    #[must_use]
    pub const fn new(resize_delay: Duration) -> Self {
        Self {
            resize: Debouncer::new(resize_delay),
        }
    }

    /// Resize debounce window.
    #[must_use]
    pub const fn resize_delay(&self) -> Duration {
        self.resize.delay()
    }

    /// Pending resize deadline, if a burst is in progress.
    #[must_use]
    pub const fn resize_deadline(&self) -> Option<Duration> {
        self.resize.deadline()
    }

    /// Translate one event.
    pub fn dispatch(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::TriggerClicked => Some(Command::SwitchLocale),
            InputEvent::HotspotClicked { section } => {
                PopupId::from_hotspot(&section).map(Command::OpenPopup)
            }
            InputEvent::CloseClicked | InputEvent::OverlayClicked => Some(Command::ClosePopup),
            InputEvent::KeyDown { key } => (key == "Escape").then_some(Command::ClosePopup),
            InputEvent::Resized { at } => {
                self.resize.trigger(at);
                None
            }
            InputEvent::ResizeSettled { armed_at } => {
                self.resize.settle(armed_at).then_some(Command::Resize)
            }
            InputEvent::NavOpenClicked => Some(Command::OpenNav),
            InputEvent::NavCloseClicked => Some(Command::CloseNav),
            InputEvent::Scrolled { top } => Some(Command::SyncHeader { scroll_top: top }),
            InputEvent::AnchorClicked { hash } => {
                (hash.len() > 1).then_some(Command::ScrollToAnchor(hash))
            }
        }
    }
}
