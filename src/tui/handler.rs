//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. The completion modal and dialogs swallow keys first.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, ActiveScreen, App};
use super::views::profile::{row_at, ProfileRow};
use crate::locale::Locale;
use crate::profile::open_link;

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    // The completion modal takes precedence over everything; any key
    // acknowledges it.
    if app.completion_open() {
        if let Some(session) = app.session.as_mut() {
            session.acknowledge_completion();
        }
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            app.toggle_locale();
            return Ok(());
        }
        _ => {}
    }

    match app.active_screen {
        ActiveScreen::Home => handle_home_key(app, key),
        ActiveScreen::Guide => handle_guide_key(app, key, now),
        ActiveScreen::Profile => handle_profile_key(app, key),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Any key dismisses the help overlay.
            app.close_dialog();
        }
        ActiveDialog::ConfirmLogout => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.quit();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
            }
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys on the home screen
fn handle_home_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter => app.open_selected_guide(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.open_profile(),
        _ => {}
    }
    Ok(())
}

/// Handle keys on the guide screen
fn handle_guide_key(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    let Some(session) = app.session.as_mut() else {
        return Ok(());
    };

    match key.code {
        // Complete the current step; inert while a transition settles.
        KeyCode::Enter => {
            session.complete_current_step(now)?;
        }

        // Step tabs: arrows move, digits jump.
        KeyCode::Left => {
            let current = session.wizard().current_step();
            if current > 0 {
                session.select_step(current - 1)?;
            }
        }
        KeyCode::Right => {
            let current = session.wizard().current_step();
            if current + 1 < session.wizard().step_count() {
                session.select_step(current + 1)?;
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < session.wizard().step_count() {
                session.select_step(index)?;
            }
        }

        // Back out; any pending transition dies with the session.
        KeyCode::Esc => app.close_guide(),

        _ => {}
    }
    Ok(())
}

/// Handle keys on the profile screen
fn handle_profile_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter => match row_at(app, app.selected_profile_index) {
            Some(ProfileRow::Faq(_)) => {
                // Answer is already shown in the pane below.
            }
            Some(ProfileRow::Contact(link)) => {
                let message = match open_link(link) {
                    Ok(()) => match app.active_locale() {
                        Locale::En => format!("Opened {}", link.uri),
                        Locale::Tl => format!("Binuksan ang {}", link.uri),
                    },
                    Err(err) => err.to_string(),
                };
                app.set_status(message);
            }
            Some(ProfileRow::Logout) => {
                app.open_dialog(ActiveDialog::ConfirmLogout);
            }
            None => {}
        },
        KeyCode::Esc => {
            app.active_screen = ActiveScreen::Home;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::content::Catalog;
    use crate::wizard::SETTLE_DELAY;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_opens_guide_and_esc_backs_out() {
        let catalog = Catalog::load().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&catalog, &settings);
        let now = Instant::now();

        handle_key(&mut app, key(KeyCode::Enter), now).unwrap();
        assert_eq!(app.active_screen, ActiveScreen::Guide);

        handle_key(&mut app, key(KeyCode::Esc), now).unwrap();
        assert_eq!(app.active_screen, ActiveScreen::Home);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_enter_completes_and_is_inert_while_settling() {
        let catalog = Catalog::load().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&catalog, &settings);
        let now = Instant::now();

        handle_key(&mut app, key(KeyCode::Enter), now).unwrap();
        handle_key(&mut app, key(KeyCode::Enter), now).unwrap();
        {
            let wizard = app.session.as_ref().unwrap().wizard();
            assert!(wizard.is_completed(0));
            assert!(wizard.is_transitioning());
        }

        // Double-submission during the settle delay changes nothing.
        handle_key(&mut app, key(KeyCode::Enter), now).unwrap();
        assert_eq!(app.session.as_ref().unwrap().wizard().completed_steps().len(), 1);

        app.on_tick(now + SETTLE_DELAY);
        assert_eq!(app.session.as_ref().unwrap().wizard().current_step(), 1);
    }

    #[test]
    fn test_digit_jumps_to_step_without_completing() {
        let catalog = Catalog::load().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&catalog, &settings);
        let now = Instant::now();

        handle_key(&mut app, key(KeyCode::Enter), now).unwrap();
        handle_key(&mut app, key(KeyCode::Char('4')), now).unwrap();

        let wizard = app.session.as_ref().unwrap().wizard();
        assert_eq!(wizard.current_step(), 3);
        assert!(wizard.completed_steps().is_empty());
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let catalog = Catalog::load().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&catalog, &settings);
        let now = Instant::now();

        handle_key(&mut app, key(KeyCode::Enter), now).unwrap();
        handle_key(&mut app, key(KeyCode::Char('9')), now).unwrap();
        assert_eq!(app.session.as_ref().unwrap().wizard().current_step(), 0);
    }

    #[test]
    fn test_completion_modal_acknowledge() {
        let catalog = Catalog::load().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&catalog, &settings);
        let mut now = Instant::now();

        handle_key(&mut app, key(KeyCode::Enter), now).unwrap();
        let step_count = app.session.as_ref().unwrap().wizard().step_count();
        for _ in 0..step_count {
            handle_key(&mut app, key(KeyCode::Enter), now).unwrap();
            now += SETTLE_DELAY;
            app.on_tick(now);
        }
        assert!(app.completion_open());

        // Any key acknowledges the modal instead of reaching the screen.
        handle_key(&mut app, key(KeyCode::Char('q')), now).unwrap();
        assert!(!app.should_quit);
        assert!(!app.completion_open());
    }

    #[test]
    fn test_logout_flow() {
        let catalog = Catalog::load().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&catalog, &settings);
        let now = Instant::now();

        handle_key(&mut app, key(KeyCode::Char('p')), now).unwrap();
        assert_eq!(app.active_screen, ActiveScreen::Profile);

        // Move to the logout row and activate it.
        for _ in 0..app.profile_row_count() {
            handle_key(&mut app, key(KeyCode::Char('j')), now).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Enter), now).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmLogout);

        handle_key(&mut app, key(KeyCode::Char('n')), now).unwrap();
        assert!(!app.should_quit);
        handle_key(&mut app, key(KeyCode::Enter), now).unwrap();
        handle_key(&mut app, key(KeyCode::Char('y')), now).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_locale_toggle_key() {
        let catalog = Catalog::load().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&catalog, &settings);
        let now = Instant::now();

        handle_key(&mut app, key(KeyCode::Char('l')), now).unwrap();
        assert_eq!(app.active_locale(), Locale::Tl);
    }
}
