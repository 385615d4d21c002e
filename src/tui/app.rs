//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Each guide screen owns an independent wizard session; leaving the screen
//! drops the session and with it any pending transition.

use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::content::faq;
use crate::content::Catalog;
use crate::locale::{Locale, LocaleSelector};
use crate::profile::CONTACT_LINKS;
use crate::wizard::{GuideSession, WizardEvent};

/// How long a status message stays on the status bar
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveScreen {
    #[default]
    Home,
    Guide,
    Profile,
}

/// Currently active dialog (if any)
///
/// The completion modal is not listed here: it follows the wizard's
/// completion gate directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmLogout,
}

/// Main application state
pub struct App<'a> {
    /// The validated content catalog
    pub catalog: &'a Catalog,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active screen
    pub active_screen: ActiveScreen,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// App-level locale selection
    pub locale: LocaleSelector,

    /// Selected guide index on the home screen
    pub selected_guide_index: usize,

    /// Selected row in the profile list (FAQ entries, contacts, logout)
    pub selected_profile_index: usize,

    /// The mounted guide session, present only on the guide screen
    pub session: Option<GuideSession<'a>>,

    /// Status message and when it was set
    pub status_message: Option<(String, Instant)>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(catalog: &'a Catalog, settings: &'a Settings) -> Self {
        Self {
            catalog,
            settings,
            should_quit: false,
            active_screen: ActiveScreen::default(),
            active_dialog: ActiveDialog::default(),
            locale: LocaleSelector::new(settings.locale),
            selected_guide_index: 0,
            selected_profile_index: 0,
            session: None,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The active locale
    pub fn active_locale(&self) -> Locale {
        self.locale.active()
    }

    /// Flip the display language everywhere; an open guide keeps its
    /// progress across the switch
    pub fn toggle_locale(&mut self) {
        let locale = self.locale.toggle();
        if let Some(session) = self.session.as_mut() {
            session.set_locale(locale);
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Mount the guide selected on the home screen
    pub fn open_selected_guide(&mut self) {
        if let Some(guide) = self.catalog.guides().get(self.selected_guide_index) {
            self.session = Some(GuideSession::new(guide, self.active_locale()));
            self.active_screen = ActiveScreen::Guide;
        }
    }

    /// Tear down the guide screen, cancelling any pending transition
    pub fn close_guide(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.cancel_transition();
        }
        self.session = None;
        self.active_screen = ActiveScreen::Home;
    }

    /// Switch to the profile screen
    pub fn open_profile(&mut self) {
        self.close_guide();
        self.selected_profile_index = 0;
        self.active_screen = ActiveScreen::Profile;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Whether the completion modal is showing
    pub fn completion_open(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.gate().is_open())
    }

    /// Number of rows in the profile list
    pub fn profile_row_count(&self) -> usize {
        faq::entries(self.active_locale()).len() + CONTACT_LINKS.len() + 1
    }

    /// Move selection up in the current screen
    pub fn move_up(&mut self) {
        match self.active_screen {
            ActiveScreen::Home => {
                self.selected_guide_index = self.selected_guide_index.saturating_sub(1);
            }
            ActiveScreen::Profile => {
                self.selected_profile_index = self.selected_profile_index.saturating_sub(1);
            }
            ActiveScreen::Guide => {}
        }
    }

    /// Move selection down in the current screen
    pub fn move_down(&mut self) {
        match self.active_screen {
            ActiveScreen::Home => {
                let max = self.catalog.guides().len();
                if self.selected_guide_index + 1 < max {
                    self.selected_guide_index += 1;
                }
            }
            ActiveScreen::Profile => {
                if self.selected_profile_index + 1 < self.profile_row_count() {
                    self.selected_profile_index += 1;
                }
            }
            ActiveScreen::Guide => {}
        }
    }

    /// Drive time-based state: the wizard transition and status expiry
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            if let Some(event) = session.tick(now) {
                match event {
                    WizardEvent::Advanced { .. } => {}
                    WizardEvent::GuideComplete => {
                        // The gate is open; the completion modal renders
                        // until the user acknowledges it.
                    }
                }
            }
        }

        if let Some((_, since)) = self.status_message {
            if now.duration_since(since) >= STATUS_TTL {
                self.status_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::SETTLE_DELAY;

    fn fixtures() -> (Catalog, Settings) {
        (Catalog::load().unwrap(), Settings::default())
    }

    #[test]
    fn test_open_and_close_guide() {
        let (catalog, settings) = fixtures();
        let mut app = App::new(&catalog, &settings);

        app.selected_guide_index = 1;
        app.open_selected_guide();
        assert_eq!(app.active_screen, ActiveScreen::Guide);
        assert!(app.session.is_some());

        app.close_guide();
        assert_eq!(app.active_screen, ActiveScreen::Home);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_teardown_cancels_pending_transition() {
        let (catalog, settings) = fixtures();
        let mut app = App::new(&catalog, &settings);
        let now = Instant::now();

        app.open_selected_guide();
        app.session.as_mut().unwrap().complete_current_step(now).unwrap();
        app.close_guide();

        // Remount: fresh state, nothing advanced by the dropped delay.
        app.open_selected_guide();
        let wizard = app.session.as_ref().unwrap().wizard();
        assert_eq!(wizard.current_step(), 0);
        assert!(wizard.completed_steps().is_empty());
    }

    #[test]
    fn test_locale_toggle_reaches_open_session() {
        let (catalog, settings) = fixtures();
        let mut app = App::new(&catalog, &settings);
        let now = Instant::now();

        app.open_selected_guide();
        app.session.as_mut().unwrap().complete_current_step(now).unwrap();
        app.on_tick(now + SETTLE_DELAY);

        app.toggle_locale();
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.locale(), Locale::Tl);
        assert!(session.wizard().is_completed(0));
        assert_eq!(session.wizard().current_step(), 1);
    }

    #[test]
    fn test_status_message_expires() {
        let (catalog, settings) = fixtures();
        let mut app = App::new(&catalog, &settings);

        app.set_status("opened link");
        assert!(app.status_message.is_some());
        let set_at = app.status_message.as_ref().unwrap().1;
        app.on_tick(set_at + STATUS_TTL);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_selection_bounds() {
        let (catalog, settings) = fixtures();
        let mut app = App::new(&catalog, &settings);

        app.move_up();
        assert_eq!(app.selected_guide_index, 0);
        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.selected_guide_index, catalog.guides().len() - 1);
    }
}
