//! Composition root for one page: localizer, popup, chrome and dispatcher.
//!
//! The web entry point owns a single `Site` behind an `Rc` and feeds it
//! events; everything else is reached through it.

use std::cell::RefCell;
use std::time::Duration;

use crate::cache::LocaleSource;
use crate::chrome;
use crate::config::SiteConfig;
use crate::dispatch::{Command, Dispatcher, InputEvent};
use crate::dom::PageHost;
use crate::localizer::ContentLocalizer;
use crate::popup::{PopupController, PopupState};

/// One localized page.
pub struct Site<S, H> {
    localizer: ContentLocalizer<S, H>,
    popup: RefCell<PopupController>,
    dispatcher: RefCell<Dispatcher>,
    anchor_gap: f64,
}

impl<S: LocaleSource, H: PageHost> Site<S, H> {
    /// Assemble the page from a dictionary source, host and configuration.
    pub fn new(source: S, host: H, config: &SiteConfig) -> Self {
        Self {
            localizer: ContentLocalizer::new(source, host, config),
            popup: RefCell::new(PopupController::new()),
            dispatcher: RefCell::new(Dispatcher::new(config.resize_debounce())),
            anchor_gap: config.anchor_offset,
        }
    }

    /// The localizer.
    pub const fn localizer(&self) -> &ContentLocalizer<S, H> {
        &self.localizer
    }

    /// Popup visibility.
    pub fn popup_state(&self) -> PopupState {
        self.popup.borrow().state()
    }

    /// Resize debounce window, for arming the host timer.
    pub fn resize_delay(&self) -> Duration {
        self.dispatcher.borrow().resize_delay()
    }

    /// Translate an event without executing it.
    pub fn dispatch(&self, event: InputEvent) -> Option<Command> {
        self.dispatcher.borrow_mut().dispatch(event)
    }

    /// Translate and execute an event.
    pub async fn handle(&self, event: InputEvent) {
        if let Some(command) = self.dispatch(event) {
            self.execute(command).await;
        }
    }

    /// Execute one command.
    pub async fn execute(&self, command: Command) {
        let root = self.localizer.host().document();
        match command {
            Command::SwitchLocale => {
                self.localizer.toggle().await;
            }
            Command::OpenPopup(id) => {
                self.popup.borrow_mut().open(&root, id);
            }
            Command::ClosePopup => {
                self.popup.borrow_mut().close(&root);
            }
            Command::Resize => self.localizer.refresh_carousels(),
            Command::OpenNav => chrome::open_nav(&root),
            Command::CloseNav => chrome::close_nav(&root),
            Command::SyncHeader { scroll_top } => {
                chrome::sync_header(&root, scroll_top);
            }
            Command::ScrollToAnchor(hash) => {
                match chrome::anchor_target(&root, &hash, self.anchor_gap) {
                    Some(top) => self.localizer.host().scroll_to(top),
                    None => tracing::debug!(%hash, "anchor target missing"),
                }
                chrome::close_nav(&root);
            }
        }
    }
}
