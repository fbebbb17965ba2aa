//! Typed access to the values kept in the defaults store.
//!
//! Loading never fails: anything missing or malformed falls back to a
//! default. Saving is best effort and only logs failures.

use crate::domain::{decode_tasks, AppLanguage, Task, ThemeMode, TimerPhase};
use crate::persistence::store::KeyValueStore;
use crate::session::Durations;
use serde_json::{json, Value};
use tracing::warn;

pub const TASKS_KEY: &str = "tasks";
pub const WORK_DURATION_KEY: &str = "workDuration";
pub const SHORT_BREAK_DURATION_KEY: &str = "shortBreakDuration";
pub const LONG_BREAK_DURATION_KEY: &str = "longBreakDuration";
pub const THEME_KEY: &str = "themeMode";
pub const LANGUAGE_KEY: &str = "appLanguage";

/// Locale identifier of the current process, from the usual POSIX variables
pub fn system_locale() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

pub fn load_theme(store: &dyn KeyValueStore) -> ThemeMode {
    store
        .get(THEME_KEY)
        .as_ref()
        .and_then(Value::as_str)
        .and_then(ThemeMode::from_tag)
        .unwrap_or_default()
}

pub fn save_theme(store: &mut dyn KeyValueStore, mode: ThemeMode) {
    save(store, THEME_KEY, json!(mode.to_tag()));
}

/// Stored language, or the one implied by `locale` when absent or invalid
pub fn load_language(store: &dyn KeyValueStore, locale: &str) -> AppLanguage {
    store
        .get(LANGUAGE_KEY)
        .as_ref()
        .and_then(Value::as_str)
        .and_then(AppLanguage::from_tag)
        .unwrap_or_else(|| AppLanguage::fallback(locale))
}

pub fn save_language(store: &mut dyn KeyValueStore, language: AppLanguage) {
    save(store, LANGUAGE_KEY, json!(language.to_tag()));
}

pub fn duration_key(phase: TimerPhase) -> &'static str {
    match phase {
        TimerPhase::Work => WORK_DURATION_KEY,
        TimerPhase::ShortBreak => SHORT_BREAK_DURATION_KEY,
        TimerPhase::LongBreak => LONG_BREAK_DURATION_KEY,
    }
}

/// Stored durations; non-positive or missing values use the defaults
pub fn load_durations(store: &dyn KeyValueStore) -> Durations {
    let defaults = Durations::default();
    let read = |phase: TimerPhase| {
        store
            .get(duration_key(phase))
            .as_ref()
            .and_then(Value::as_i64)
            .filter(|secs| *secs > 0)
            .and_then(|secs| u32::try_from(secs).ok())
            .unwrap_or_else(|| defaults.for_phase(phase))
    };

    Durations {
        work: read(TimerPhase::Work),
        short_break: read(TimerPhase::ShortBreak),
        long_break: read(TimerPhase::LongBreak),
    }
}

pub fn save_duration(store: &mut dyn KeyValueStore, phase: TimerPhase, seconds: u32) {
    save(store, duration_key(phase), json!(seconds));
}

pub fn load_tasks(store: &dyn KeyValueStore) -> Vec<Task> {
    match store.get(TASKS_KEY) {
        Some(value) => decode_tasks(&value).unwrap_or_else(|| {
            warn!("stored task list is malformed, starting empty");
            Vec::new()
        }),
        None => Vec::new(),
    }
}

pub fn save_tasks(store: &mut dyn KeyValueStore, tasks: &[Task]) {
    match serde_json::to_value(tasks) {
        Ok(value) => save(store, TASKS_KEY, value),
        Err(e) => warn!(error = %e, "failed to encode task list"),
    }
}

fn save(store: &mut dyn KeyValueStore, key: &str, value: Value) {
    if let Err(e) = store.set(key, value) {
        warn!(key, error = %e, "failed to persist value");
    }
}
