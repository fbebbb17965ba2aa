use crate::domain::{self, AppLanguage, Task, ThemeMode, TimerPhase};
use crate::persistence::{prefs, KeyValueStore};
use crate::session::{ClockEvent, Durations, SessionClock};
use crate::ticker::Ticker;
use tracing::debug;
use uuid::Uuid;

/// Tasks, timer and preferences behind the UI.
///
/// All mutation goes through the methods here; the UI only reads. Every
/// durable change is written to the defaults store immediately, and a
/// failed write is logged and otherwise ignored.
pub struct TaskStore {
    tasks: Vec<Task>,
    selected: Option<Uuid>,
    /// Task captured when the running focus session started
    locked_display: Option<Uuid>,
    clock: SessionClock,
    durations: Durations,
    theme_mode: ThemeMode,
    language: AppLanguage,
    showing_floating_window: bool,
    defaults: Box<dyn KeyValueStore>,
}

impl TaskStore {
    /// Load persisted state from `defaults`. `locale` decides the language
    /// when none is stored.
    pub fn new(defaults: Box<dyn KeyValueStore>, ticker: Ticker, locale: &str) -> Self {
        let tasks = prefs::load_tasks(defaults.as_ref());
        let durations = prefs::load_durations(defaults.as_ref());
        let theme_mode = prefs::load_theme(defaults.as_ref());
        let language = prefs::load_language(defaults.as_ref(), locale);
        debug!(tasks = tasks.len(), ?durations, ?theme_mode, ?language, "store loaded");

        Self {
            tasks,
            selected: None,
            locked_display: None,
            clock: SessionClock::new(ticker, durations.work),
            durations,
            theme_mode,
            language,
            showing_floating_window: false,
            defaults,
        }
    }

    // ---- tasks ----

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn task_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Append a task. Callers reject blank titles before calling.
    pub fn add_task(&mut self, title: String) -> Uuid {
        let task = Task::new(title);
        let id = task.id;
        debug!(%id, title = %task.title, "task added");
        self.tasks.push(task);
        self.save_tasks();
        id
    }

    pub fn delete_task(&mut self, id: Uuid) {
        match self.index_of(id) {
            Some(index) => self.delete_tasks_at(&[index]),
            None => debug!(%id, "delete ignored, no such task"),
        }
    }

    /// Remove the tasks at `indices`; out-of-range indices are ignored
    pub fn delete_tasks_at(&mut self, indices: &[usize]) {
        let doomed: Vec<Uuid> = indices
            .iter()
            .filter_map(|&i| self.tasks.get(i))
            .map(|t| t.id)
            .collect();
        if doomed.is_empty() {
            return;
        }

        self.tasks.retain(|t| !doomed.contains(&t.id));
        if self.selected.map_or(false, |id| doomed.contains(&id)) {
            self.selected = None;
        }
        debug!(count = doomed.len(), "tasks deleted");
        self.save_tasks();
    }

    /// Change the highlighted task. Unknown ids clear the selection.
    pub fn select_task(&mut self, id: Option<Uuid>) {
        self.selected = id.filter(|id| self.task(*id).is_some());
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|id| self.task(id))
    }

    pub fn toggle_task_completion(&mut self, id: Uuid) {
        if let Some(task) = self.task_mut(id) {
            task.toggle_completed();
            self.save_tasks();
        }
    }

    /// Move the tasks at `from` so they sit before the task originally at
    /// `to`, keeping their relative order. `to == len` moves them to the end.
    pub fn reorder(&mut self, from: &[usize], to: usize) {
        let len = self.tasks.len();
        let mut from: Vec<usize> = from.iter().copied().filter(|&i| i < len).collect();
        from.sort_unstable();
        from.dedup();
        if from.is_empty() {
            return;
        }

        let to = to.min(len);
        let insert_at = to - from.iter().filter(|&&i| i < to).count();

        let mut moved: Vec<Task> = from.iter().rev().map(|&i| self.tasks.remove(i)).collect();
        moved.reverse();
        let tail = self.tasks.split_off(insert_at);
        self.tasks.extend(moved);
        self.tasks.extend(tail);

        self.save_tasks();
    }

    // ---- timer ----

    pub fn phase(&self) -> TimerPhase {
        self.clock.phase()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.clock.remaining_seconds()
    }

    pub fn is_timer_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn completed_work_sessions(&self) -> u32 {
        self.clock.completed_work_sessions()
    }

    /// Configured length of the phase currently shown
    pub fn phase_duration(&self) -> u32 {
        self.durations.for_phase(self.clock.phase())
    }

    pub fn progress(&self) -> f64 {
        domain::progress(self.remaining_seconds() as i64, self.phase_duration() as i64)
    }

    pub fn elapsed_progress(&self) -> f64 {
        domain::elapsed_progress(self.remaining_seconds() as i64, self.phase_duration() as i64)
    }

    /// Task shown on the timer face: the locked task while the clock runs,
    /// the live selection otherwise
    pub fn timer_display_task(&self) -> Option<&Task> {
        let id = if self.clock.is_running() {
            self.locked_display
        } else {
            self.selected
        };
        id.and_then(|id| self.task(id))
    }

    /// Start a Work phase for the selected task. No-op without a selection.
    pub fn start_focus_session(&mut self) {
        let Some(id) = self.selected_task().map(|t| t.id) else {
            debug!("focus session needs a selected task");
            return;
        };
        self.locked_display = Some(id);
        self.clock.start(TimerPhase::Work, self.durations.work);
        self.showing_floating_window = true;
    }

    pub fn stop_timer(&mut self) {
        self.clock.stop();
    }

    /// Stop and return to a full Work phase. The floating timer stays as is.
    pub fn reset_timer(&mut self) {
        self.clock.reset(self.durations.work);
    }

    /// Apply the ticks that came due on the ticker
    pub fn pump(&mut self) -> Vec<ClockEvent> {
        let events = self.clock.pump(&self.durations);
        events.into_iter().map(|event| self.apply(event)).collect()
    }

    /// Apply a single tick immediately
    pub fn tick(&mut self) -> Option<ClockEvent> {
        let event = self.clock.tick(&self.durations)?;
        Some(self.apply(event))
    }

    /// Act on a clock event and return it with the credited task filled in
    fn apply(&mut self, event: ClockEvent) -> ClockEvent {
        match event {
            ClockEvent::WorkCompleted { next, .. } => {
                let credited = self.locked_display.filter(|id| self.task(*id).is_some());
                if let Some(task) = credited.and_then(|id| self.task_mut(id)) {
                    task.record_pomodoro();
                    self.save_tasks();
                }
                ClockEvent::WorkCompleted { next, task: credited }
            }
            ClockEvent::BreakCompleted => {
                self.showing_floating_window = false;
                event
            }
        }
    }

    // ---- floating timer ----

    pub fn showing_floating_window(&self) -> bool {
        self.showing_floating_window
    }

    pub fn show_floating_window(&mut self) {
        self.showing_floating_window = true;
    }

    pub fn close_floating_window(&mut self) {
        self.showing_floating_window = false;
    }

    pub fn toggle_floating_window(&mut self) {
        self.showing_floating_window = !self.showing_floating_window;
    }

    // ---- configuration ----

    pub fn durations(&self) -> Durations {
        self.durations
    }

    pub fn set_work_duration(&mut self, seconds: u32) {
        self.set_duration(TimerPhase::Work, seconds);
    }

    pub fn set_short_break_duration(&mut self, seconds: u32) {
        self.set_duration(TimerPhase::ShortBreak, seconds);
    }

    pub fn set_long_break_duration(&mut self, seconds: u32) {
        self.set_duration(TimerPhase::LongBreak, seconds);
    }

    /// Persist a new length for `phase`. When that phase is on screen and
    /// the clock is idle, the countdown jumps to the new length.
    pub fn set_duration(&mut self, phase: TimerPhase, seconds: u32) {
        if seconds == 0 {
            debug!(?phase, "ignoring zero duration");
            return;
        }
        match phase {
            TimerPhase::Work => self.durations.work = seconds,
            TimerPhase::ShortBreak => self.durations.short_break = seconds,
            TimerPhase::LongBreak => self.durations.long_break = seconds,
        }
        prefs::save_duration(self.defaults.as_mut(), phase, seconds);

        if self.clock.phase() == phase && !self.clock.is_running() {
            self.clock.set_remaining(seconds);
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
        prefs::save_theme(self.defaults.as_mut(), mode);
    }

    pub fn language(&self) -> AppLanguage {
        self.language
    }

    pub fn set_language(&mut self, language: AppLanguage) {
        self.language = language;
        prefs::save_language(self.defaults.as_mut(), language);
    }

    fn save_tasks(&mut self) {
        prefs::save_tasks(self.defaults.as_mut(), &self.tasks);
    }
}
