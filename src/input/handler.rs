use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_delete_mode(app, key),
        UiMode::Settings => handle_settings_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation (with Shift modifier for reordering)
        KeyCode::Up => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_task_up();
            } else {
                app.move_selection_up();
            }
            Ok(false)
        }
        KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_task_down();
            } else {
                app.move_selection_down();
            }
            Ok(false)
        }
        KeyCode::Char('K') => {
            app.move_task_up();
            Ok(false)
        }
        KeyCode::Char('J') => {
            app.move_task_down();
            Ok(false)
        }
        KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Start focus / stop
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_focus();
            Ok(false)
        }

        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer();
            Ok(false)
        }

        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.toggle_selected_completion();
            Ok(false)
        }

        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.request_delete();
            Ok(false)
        }

        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.toggle_floating();
            Ok(false)
        }

        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
            Ok(false)
        }

        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char(',') => {
            app.open_settings();
            Ok(false)
        }

        // Esc hides the floating timer
        KeyCode::Esc => {
            app.store.close_floating_window();
            Ok(false)
        }

        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in input form mode (adding a task)
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the delete confirmation modal
fn handle_confirm_delete_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the settings modal
fn handle_settings_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.settings_prev_field(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.settings_next_field(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => app.settings_adjust(-1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.settings_adjust(1)
        }
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('s') => app.close_settings(),
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemeMode;
    use crate::persistence::store::MemoryStore;
    use crate::store::TaskStore;
    use crate::ticker::{ManualClock, Ticker, SESSION_TICK};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_test_app() -> AppState {
        let ticker = Ticker::new(Box::new(ManualClock::new()), SESSION_TICK);
        let mut store = TaskStore::new(Box::new(MemoryStore::new()), ticker, "en_US");
        store.add_task("Test task".to_string());
        AppState::new(store)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();
        app.store.add_task("Task 2".to_string());

        assert_eq!(app.selected_index(), Some(0));

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index(), Some(1));

        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.selected_index(), Some(0));
    }

    #[test]
    fn test_handle_shift_reorder() {
        let mut app = create_test_app();
        app.store.add_task("Task 2".to_string());

        handle_key(&mut app, KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT)).unwrap();
        assert_eq!(app.store.tasks()[1].title, "Test task");
        assert_eq!(app.selected_index(), Some(1));
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_handle_add_task() {
        let mut app = create_test_app();
        let initial_count = app.store.tasks().len();

        // Press 'a' to open form
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.input_form.is_some());

        // 'q' is text here, not quit
        for c in ['N', 'e', 'q'] {
            assert!(!handle_key(&mut app, key(KeyCode::Char(c))).unwrap());
        }

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.store.tasks().len(), initial_count + 1);
        assert_eq!(app.store.tasks()[initial_count].title, "Neq");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
    }

    #[test]
    fn test_handle_delete_with_confirmation() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.store.tasks().len(), 1);

        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        handle_key(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert!(app.store.tasks().is_empty());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_focus_toggle() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.store.is_timer_running());

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!app.store.is_timer_running());
        assert!(app.store.showing_floating_window());

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(!app.store.showing_floating_window());
    }

    #[test]
    fn test_handle_toggle_done() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(app.store.tasks()[0].is_completed);
    }

    #[test]
    fn test_handle_settings() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('s'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Settings);

        handle_key(&mut app, key(KeyCode::Right)).unwrap();
        assert_eq!(app.store.durations().work, 26 * 60);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);

        handle_key(&mut app, key(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.store.theme_mode(), ThemeMode::BusinessMotion);
    }
}
