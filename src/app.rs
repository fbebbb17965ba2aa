use crate::domain::{Task, TimerPhase, UiMode};
use crate::localization::text;
use crate::notifications;
use crate::session::ClockEvent;
use crate::store::TaskStore;
use tracing::debug;
use uuid::Uuid;

/// Minute range offered for each duration in the settings modal
pub const FOCUS_MINUTES: (u32, u32) = (1, 60);
pub const SHORT_BREAK_MINUTES: (u32, u32) = (1, 30);
pub const LONG_BREAK_MINUTES: (u32, u32) = (1, 60);

/// Input form state for adding tasks
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub title: String,
}

/// Row of the settings modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Focus,
    ShortBreak,
    LongBreak,
    Theme,
    Language,
}

impl SettingsField {
    pub const ALL: [SettingsField; 5] = [
        SettingsField::Focus,
        SettingsField::ShortBreak,
        SettingsField::LongBreak,
        SettingsField::Theme,
        SettingsField::Language,
    ];

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Phase and allowed minute range for duration rows
    pub fn duration(&self) -> Option<(TimerPhase, (u32, u32))> {
        match self {
            SettingsField::Focus => Some((TimerPhase::Work, FOCUS_MINUTES)),
            SettingsField::ShortBreak => Some((TimerPhase::ShortBreak, SHORT_BREAK_MINUTES)),
            SettingsField::LongBreak => Some((TimerPhase::LongBreak, LONG_BREAK_MINUTES)),
            SettingsField::Theme | SettingsField::Language => None,
        }
    }
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub settings_field: SettingsField,
    pub pending_delete: Option<Uuid>,
    pub use_emoji: bool,
}

impl AppState {
    pub fn new(store: TaskStore) -> Self {
        let mut app = Self {
            store,
            ui_mode: UiMode::Normal,
            input_form: None,
            settings_field: SettingsField::Focus,
            pending_delete: None,
            use_emoji: true,
        };
        app.select_index(0);
        app
    }

    /// Index of the highlighted task
    pub fn selected_index(&self) -> Option<usize> {
        self.store
            .selected_task()
            .and_then(|t| self.store.index_of(t.id))
    }

    fn select_index(&mut self, index: usize) {
        let id = self.store.tasks().get(index).map(|t| t.id);
        self.store.select_task(id);
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        match self.selected_index() {
            Some(i) if i > 0 => self.select_index(i - 1),
            Some(_) => {}
            None => self.select_index(0),
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        match self.selected_index() {
            Some(i) if i + 1 < self.store.tasks().len() => self.select_index(i + 1),
            Some(_) => {}
            None => self.select_index(0),
        }
    }

    /// Move selected task up in the list
    pub fn move_task_up(&mut self) {
        if let Some(i) = self.selected_index() {
            if i > 0 {
                self.store.reorder(&[i], i - 1);
            }
        }
    }

    /// Move selected task down in the list
    pub fn move_task_down(&mut self) {
        if let Some(i) = self.selected_index() {
            if i + 1 < self.store.tasks().len() {
                self.store.reorder(&[i], i + 2);
            }
        }
    }

    pub fn toggle_selected_completion(&mut self) {
        if let Some(id) = self.store.selected_task().map(|t| t.id) {
            self.store.toggle_task_completion(id);
        }
    }

    // ---- add task form ----

    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.title.push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.title.pop();
        }
    }

    /// Add the typed task. Blank titles close the form without adding.
    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            let title = form.title.trim();
            if !title.is_empty() {
                let id = self.store.add_task(title.to_string());
                if self.store.selected_task().is_none() {
                    self.store.select_task(Some(id));
                }
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // ---- delete confirmation ----

    /// Ask before deleting the selected task
    pub fn request_delete(&mut self) {
        if let Some(id) = self.store.selected_task().map(|t| t.id) {
            self.pending_delete = Some(id);
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    /// Task awaiting delete confirmation
    pub fn pending_delete_task(&self) -> Option<&Task> {
        self.pending_delete.and_then(|id| self.store.task(id))
    }

    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            let index = self.store.index_of(id);
            self.store.delete_task(id);
            // Keep a row highlighted where the deleted one was
            if let Some(i) = index {
                let len = self.store.tasks().len();
                if self.store.selected_task().is_none() && len > 0 {
                    self.select_index(i.min(len - 1));
                }
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.ui_mode = UiMode::Normal;
    }

    // ---- timer ----

    /// Start a focus session, or stop the running one
    pub fn toggle_focus(&mut self) {
        if self.store.is_timer_running() {
            self.store.stop_timer();
        } else {
            self.store.start_focus_session();
        }
    }

    pub fn reset_timer(&mut self) {
        self.store.reset_timer();
    }

    pub fn toggle_floating(&mut self) {
        self.store.toggle_floating_window();
    }

    pub fn toggle_theme(&mut self) {
        let next = self.store.theme_mode().toggled();
        self.store.set_theme_mode(next);
    }

    /// Advance the session clock and announce finished phases
    pub fn tick(&mut self) {
        for event in self.store.pump() {
            self.announce(event);
        }
    }

    fn announce(&self, event: ClockEvent) {
        let language = self.store.language();
        match event {
            ClockEvent::WorkCompleted { task, .. } => {
                notifications::notify_focus_complete(&self.focus_complete_title(task), language);
            }
            ClockEvent::BreakCompleted => notifications::notify_break_over(language),
        }
    }

    /// Title for the focus-complete banner: the credited task, else the app name
    fn focus_complete_title(&self, task: Option<Uuid>) -> String {
        task.and_then(|id| self.store.task(id))
            .map(|t| t.title.clone())
            .unwrap_or_else(|| text("app.title", self.store.language()).into_owned())
    }

    // ---- settings ----

    pub fn open_settings(&mut self) {
        self.settings_field = SettingsField::Focus;
        self.ui_mode = UiMode::Settings;
    }

    pub fn close_settings(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn settings_next_field(&mut self) {
        self.settings_field = self.settings_field.next();
    }

    pub fn settings_prev_field(&mut self) {
        self.settings_field = self.settings_field.prev();
    }

    /// Current value of a duration row in whole minutes
    pub fn settings_minutes(&self, field: SettingsField) -> Option<u32> {
        field
            .duration()
            .map(|(phase, _)| self.store.durations().for_phase(phase) / 60)
    }

    /// Step the focused row by `delta` minutes, or flip theme/language
    pub fn settings_adjust(&mut self, delta: i32) {
        match self.settings_field {
            SettingsField::Theme => self.toggle_theme(),
            SettingsField::Language => {
                let next = self.store.language().toggled();
                self.store.set_language(next);
            }
            field => {
                let Some((phase, (min, max))) = field.duration() else {
                    return;
                };
                let current = self.settings_minutes(field).unwrap_or(min) as i64;
                let minutes = (current + delta as i64).clamp(min as i64, max as i64) as u32;
                debug!(?phase, minutes, "duration adjusted");
                self.store.set_duration(phase, minutes * 60);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppLanguage, ThemeMode};
    use crate::persistence::store::MemoryStore;
    use crate::ticker::{ManualClock, Ticker, SESSION_TICK};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn create_test_app() -> (ManualClock, AppState) {
        let clock = ManualClock::new();
        let ticker = Ticker::new(Box::new(clock.clone()), SESSION_TICK);
        let mut store = TaskStore::new(Box::new(MemoryStore::new()), ticker, "en_US");
        store.add_task("Task 1".to_string());
        store.add_task("Task 2".to_string());
        store.add_task("Task 3".to_string());
        (clock, AppState::new(store))
    }

    fn titles(app: &AppState) -> Vec<&str> {
        app.store.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_app_state_new_selects_first_task() {
        let (_, app) = create_test_app();
        assert_eq!(app.selected_index(), Some(0));
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_move_selection() {
        let (_, mut app) = create_test_app();

        app.move_selection_up();
        assert_eq!(app.selected_index(), Some(0));

        app.move_selection_down();
        app.move_selection_down();
        app.move_selection_down();
        assert_eq!(app.selected_index(), Some(2));

        app.move_selection_up();
        assert_eq!(app.selected_index(), Some(1));
    }

    #[test]
    fn test_move_task_follows_selection() {
        let (_, mut app) = create_test_app();

        app.move_task_down();
        assert_eq!(titles(&app), vec!["Task 2", "Task 1", "Task 3"]);
        assert_eq!(app.selected_index(), Some(1));

        app.move_task_down();
        app.move_task_down();
        assert_eq!(titles(&app), vec!["Task 2", "Task 3", "Task 1"]);

        app.move_task_up();
        assert_eq!(titles(&app), vec!["Task 2", "Task 1", "Task 3"]);
        assert_eq!(app.selected_index(), Some(1));
    }

    #[test]
    fn test_add_task_form() {
        let (_, mut app) = create_test_app();
        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        for c in "New!".chars() {
            app.input_form_add_char(c);
        }
        app.input_form_backspace();
        app.submit_input_form();

        assert_eq!(app.store.tasks().len(), 4);
        assert_eq!(app.store.tasks()[3].title, "New");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
    }

    #[test]
    fn test_blank_title_is_not_added() {
        let (_, mut app) = create_test_app();
        app.start_add_task();
        app.input_form_add_char(' ');
        app.submit_input_form();

        assert_eq!(app.store.tasks().len(), 3);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (_, mut app) = create_test_app();
        app.move_selection_down();

        app.request_delete();
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);
        assert_eq!(app.pending_delete_task().map(|t| t.title.as_str()), Some("Task 2"));

        app.cancel_delete();
        assert_eq!(app.store.tasks().len(), 3);

        app.request_delete();
        app.confirm_delete();
        assert_eq!(titles(&app), vec!["Task 1", "Task 3"]);
        assert_eq!(app.selected_index(), Some(1));
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_delete_last_row_highlights_previous() {
        let (_, mut app) = create_test_app();
        app.move_selection_down();
        app.move_selection_down();

        app.request_delete();
        app.confirm_delete();
        assert_eq!(app.selected_index(), Some(1));
    }

    #[test]
    fn test_toggle_focus_starts_and_stops() {
        let (_, mut app) = create_test_app();

        app.toggle_focus();
        assert!(app.store.is_timer_running());
        assert!(app.store.showing_floating_window());

        app.toggle_focus();
        assert!(!app.store.is_timer_running());
    }

    #[test]
    fn test_tick_credits_task() {
        let (clock, mut app) = create_test_app();
        app.store.set_work_duration(1);
        app.toggle_focus();

        clock.advance(Duration::from_secs(2));
        app.tick();

        assert_eq!(app.store.tasks()[0].completed_pomodoros, 1);
        assert_eq!(app.store.phase(), TimerPhase::ShortBreak);
    }

    #[test]
    fn test_focus_complete_title_names_credited_task() {
        let (clock, mut app) = create_test_app();
        app.store.set_work_duration(2);
        app.store.set_short_break_duration(1);
        let first = app.store.tasks()[0].id;
        app.toggle_focus();
        app.move_selection_down();

        clock.advance(Duration::from_secs(60));
        let events = app.store.pump();
        let Some(ClockEvent::WorkCompleted { task, .. }) = events.first().copied() else {
            panic!("expected a completed work phase, got {:?}", events);
        };

        assert_eq!(task, Some(first));
        assert_eq!(app.focus_complete_title(task), "Task 1");
        assert_eq!(app.store.timer_display_task().map(|t| t.title.as_str()), Some("Task 2"));
    }

    #[test]
    fn test_focus_complete_title_falls_back_to_app_name() {
        let (_, app) = create_test_app();
        assert_eq!(app.focus_complete_title(None), "Tomato");
    }

    #[test]
    fn test_settings_adjust_clamps_minutes() {
        let (_, mut app) = create_test_app();
        app.open_settings();

        app.settings_adjust(1);
        assert_eq!(app.store.durations().work, 26 * 60);
        assert_eq!(app.store.remaining_seconds(), 26 * 60);

        app.settings_adjust(100);
        assert_eq!(app.settings_minutes(SettingsField::Focus), Some(60));

        app.settings_next_field();
        app.settings_adjust(-100);
        assert_eq!(app.store.durations().short_break, 60);

        app.settings_next_field();
        app.settings_adjust(-1);
        assert_eq!(app.store.durations().long_break, 14 * 60);
    }

    #[test]
    fn test_settings_flip_theme_and_language() {
        let (_, mut app) = create_test_app();
        app.open_settings();
        app.settings_prev_field();
        assert_eq!(app.settings_field, SettingsField::Language);

        app.settings_adjust(1);
        assert_eq!(app.store.language(), AppLanguage::Chinese);

        app.settings_prev_field();
        app.settings_adjust(1);
        assert_eq!(app.store.theme_mode(), ThemeMode::BusinessMotion);

        app.close_settings();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_settings_field_cycle() {
        let mut field = SettingsField::Focus;
        for _ in 0..SettingsField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, SettingsField::Focus);
        assert_eq!(SettingsField::Focus.prev(), SettingsField::Language);
    }
}
