//! TUI views module
//!
//! Contains the home, guide, and profile screens plus the header and
//! status bar.

pub mod guide;
pub mod home;
pub mod profile;
pub mod status_bar;

use std::time::Instant;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveScreen, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App, now: Instant) {
    let layout = AppLayout::new(frame.area());

    home::render_header(frame, app, layout.header);

    match app.active_screen {
        ActiveScreen::Home => {
            home::render(frame, app, layout.main);
        }
        ActiveScreen::Guide => {
            if let Some(session) = &app.session {
                guide::render(frame, session, layout.main, now);
            }
        }
        ActiveScreen::Profile => {
            profile::render(frame, app, layout.main);
        }
    }

    status_bar::render(frame, app, layout.status_bar);

    // Completion modal follows the gate; other dialogs follow app state.
    if app.completion_open() {
        if let Some(session) = &app.session {
            dialogs::completion::render(frame, session);
        }
    } else {
        match app.active_dialog {
            ActiveDialog::Help => dialogs::help::render(frame, app.active_locale()),
            ActiveDialog::ConfirmLogout => dialogs::confirm::render(frame, app.active_locale()),
            ActiveDialog::None => {}
        }
    }
}
