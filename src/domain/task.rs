use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task in the Pomodoro list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable identifier, never changes after creation
    pub id: Uuid,
    /// Display title (never empty, callers trim before adding)
    pub title: String,
    /// Finished focus sessions attributed to this task
    pub completed_pomodoros: u32,
    /// User-toggled done flag, independent of the counter
    pub is_completed: bool,
}

impl Task {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            completed_pomodoros: 0,
            is_completed: false,
        }
    }

    pub fn toggle_completed(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Credit one finished focus session
    pub fn record_pomodoro(&mut self) {
        self.completed_pomodoros = self.completed_pomodoros.saturating_add(1);
    }
}

/// Decode the persisted task list, treating anything malformed as absent
pub fn decode_tasks(value: &serde_json::Value) -> Option<Vec<Task>> {
    serde_json::from_value(value.clone()).ok()
}
