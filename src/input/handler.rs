use crate::app::AppState;
use crate::domain::Screen;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Quit works everywhere
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
        _ => {}
    }

    match app.screen {
        Screen::Menu => handle_menu(app, key),
        Screen::Focus => handle_focus(app, key),
        Screen::Stress | Screen::Sleep | Screen::Allergies => handle_module(app, key),
    }
}

/// Handle keys on the module picker
fn handle_menu(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Enter => app.open_selected()?,

        // Number keys jump straight into a module
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(screen) = Screen::modules().get(index) {
                app.open(*screen)?;
            }
        }

        _ => {}
    }
    Ok(false)
}

/// Handle keys shared by every module screen
fn handle_module(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char(' ') => app.toggle_breathing(),
        KeyCode::Char('m') | KeyCode::Char('M') => app.toggle_music(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.toggle_reminder(),

        // Back to the menu (resets the screen being left)
        KeyCode::Esc | KeyCode::Backspace => app.back_to_menu()?,

        _ => {}
    }
    Ok(false)
}

/// Handle keys on the Focus screen: Pomodoro controls, then the shared keys
fn handle_focus(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('p') | KeyCode::Char('P') => app.toggle_pomodoro(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_pomodoro(),
        KeyCode::Char(c @ '1'..='3') => {
            let index = (c as usize) - ('1' as usize);
            app.select_preset(index)?;
        }
        _ => return handle_module(app, key),
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::domain::ManualClock;
    use std::time::Duration;

    fn create_test_app() -> (AppState, ManualClock) {
        let clock = ManualClock::new();
        let settings = Settings {
            notifications: false,
            ..Settings::default()
        };
        let app = AppState::new(&settings, Box::new(clock.clone())).unwrap();
        (app, clock)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_handle_navigation() {
        let (mut app, _clock) = create_test_app();
        assert_eq!(app.menu_index, 0);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.menu_index, 1);

        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.menu_index, 0);

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.screen, Screen::Stress);
    }

    #[test]
    fn test_handle_quit() {
        let (mut app, _clock) = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());

        app.open(Screen::Sleep).unwrap();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c).unwrap());
    }

    #[test]
    fn test_number_keys_open_modules() {
        let (mut app, _clock) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('4'))).unwrap();
        assert_eq!(app.screen, Screen::Focus);
        assert_eq!(app.menu_index, 3);
    }

    #[test]
    fn test_space_toggles_breathing() {
        let (mut app, clock) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.screen, Screen::Sleep);

        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.sleep.breathing.engine.is_running());

        clock.advance(Duration::from_secs(1));
        app.tick();
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(!app.sleep.breathing.engine.is_running());
        assert_eq!(app.sleep.breathing.engine.seconds_remaining(), 3);
    }

    #[test]
    fn test_escape_returns_to_menu_and_resets() {
        let (mut app, clock) = create_test_app();
        app.open(Screen::Stress).unwrap();
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        clock.advance(Duration::from_secs(7));
        app.tick();
        assert_eq!(app.stress.breathing.engine.phase_index(), 1);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.stress.breathing.engine.phase_index(), 0);
        assert!(!app.stress.breathing.engine.is_running());
    }

    #[test]
    fn test_focus_pomodoro_keys() {
        let (mut app, clock) = create_test_app();
        app.open(Screen::Focus).unwrap();

        // Presets win over menu shortcuts on the Focus screen
        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.screen, Screen::Focus);
        assert_eq!(app.focus.pomodoro.clock_face(), "15:00");

        handle_key(&mut app, key(KeyCode::Char('p'))).unwrap();
        clock.advance(Duration::from_secs(61));
        app.tick();
        assert_eq!(app.focus.pomodoro.clock_face(), "13:59");

        handle_key(&mut app, key(KeyCode::Char('r'))).unwrap();
        assert!(!app.focus.pomodoro.is_running());
        assert_eq!(app.focus.pomodoro.clock_face(), "15:00");

        // Shared keys still reach the breathing exercise
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.focus.breathing.engine.is_running());
    }

    #[test]
    fn test_reminder_key_on_allergies() {
        let (mut app, _clock) = create_test_app();
        app.open(Screen::Allergies).unwrap();
        handle_key(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert!(!app.allergies.daily_reminder);

        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        assert!(app.allergies.daily_reminder);
    }
}
