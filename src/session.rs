use crate::domain::TimerPhase;
use crate::ticker::{TickToken, Ticker};
use tracing::info;
use uuid::Uuid;

pub const DEFAULT_WORK_SECS: u32 = 25 * 60;
pub const DEFAULT_SHORT_BREAK_SECS: u32 = 5 * 60;
pub const DEFAULT_LONG_BREAK_SECS: u32 = 15 * 60;

/// Every this many finished work sessions earns a long break
pub const LONG_BREAK_EVERY: u32 = 4;

/// Configured phase lengths in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub work: u32,
    pub short_break: u32,
    pub long_break: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work: DEFAULT_WORK_SECS,
            short_break: DEFAULT_SHORT_BREAK_SECS,
            long_break: DEFAULT_LONG_BREAK_SECS,
        }
    }
}

impl Durations {
    pub fn for_phase(&self, phase: TimerPhase) -> u32 {
        match phase {
            TimerPhase::Work => self.work,
            TimerPhase::ShortBreak => self.short_break,
            TimerPhase::LongBreak => self.long_break,
        }
    }
}

/// What a tick changed beyond the countdown itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// A work phase finished; the clock moved on to `next` and keeps running.
    /// `task` is the task credited with the pomodoro, filled in by the store.
    WorkCompleted { next: TimerPhase, task: Option<Uuid> },
    /// A break finished; the clock is back on Work and stopped
    BreakCompleted,
}

/// Break that follows the given number of finished work sessions
pub fn break_after(completed_work_sessions: u32) -> TimerPhase {
    if completed_work_sessions % LONG_BREAK_EVERY == 0 {
        TimerPhase::LongBreak
    } else {
        TimerPhase::ShortBreak
    }
}

/// Countdown engine for the Pomodoro cycle
pub struct SessionClock {
    phase: TimerPhase,
    remaining_seconds: u32,
    completed_work_sessions: u32,
    tick: Option<TickToken>,
    ticker: Ticker,
}

impl SessionClock {
    /// Idle clock showing a Work phase of `work_secs`
    pub fn new(ticker: Ticker, work_secs: u32) -> Self {
        Self {
            phase: TimerPhase::Work,
            remaining_seconds: work_secs,
            completed_work_sessions: 0,
            tick: None,
            ticker,
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.tick.map_or(false, |token| self.ticker.is_active(token))
    }

    pub fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    /// Overwrite the countdown while idle (duration edited in settings)
    pub fn set_remaining(&mut self, seconds: u32) {
        self.remaining_seconds = seconds;
    }

    /// Begin counting down `phase` from `duration` seconds
    pub fn start(&mut self, phase: TimerPhase, duration: u32) {
        self.cancel_tick();
        self.phase = phase;
        self.remaining_seconds = duration;
        self.tick = Some(self.ticker.schedule());
        info!(?phase, duration, "session started");
    }

    /// Stop counting. Safe to call when already stopped.
    pub fn stop(&mut self) {
        if self.cancel_tick() {
            info!(phase = ?self.phase, remaining = self.remaining_seconds, "session stopped");
        }
    }

    /// Stop and return to a full Work phase
    pub fn reset(&mut self, work_secs: u32) {
        self.stop();
        self.phase = TimerPhase::Work;
        self.remaining_seconds = work_secs;
    }

    /// Apply every tick that came due since the last pump.
    /// Ticks left over when the clock stops are discarded.
    pub fn pump(&mut self, durations: &Durations) -> Vec<ClockEvent> {
        let mut events = Vec::new();
        let Some((token, due)) = self.ticker.poll() else {
            return events;
        };

        for _ in 0..due {
            if self.tick != Some(token) {
                break;
            }
            if let Some(event) = self.tick(durations) {
                events.push(event);
            }
        }
        events
    }

    /// One unit of time. Does nothing while stopped.
    pub fn tick(&mut self, durations: &Durations) -> Option<ClockEvent> {
        if !self.is_running() {
            return None;
        }
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            return None;
        }
        Some(self.complete_phase(durations))
    }

    fn complete_phase(&mut self, durations: &Durations) -> ClockEvent {
        if !self.phase.is_break() {
            self.completed_work_sessions += 1;
            let next = break_after(self.completed_work_sessions);
            self.phase = next;
            self.remaining_seconds = durations.for_phase(next);
            info!(
                completed = self.completed_work_sessions,
                ?next,
                "work phase completed"
            );
            ClockEvent::WorkCompleted { next, task: None }
        } else {
            self.phase = TimerPhase::Work;
            self.remaining_seconds = durations.work;
            self.stop();
            info!("break completed, waiting for next focus session");
            ClockEvent::BreakCompleted
        }
    }

    fn cancel_tick(&mut self) -> bool {
        match self.tick.take() {
            Some(token) => self.ticker.cancel(token),
            None => false,
        }
    }
}
