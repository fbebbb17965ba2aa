use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Default UI poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Period of the session countdown
pub const SESSION_TICK: Duration = Duration::from_secs(1);

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Source of "now" for the ticker
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock used by the running application
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Virtual clock advanced by hand. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Handle for one scheduled periodic tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken(u64);

#[derive(Debug, Clone, Copy)]
struct ActiveTick {
    token: TickToken,
    next_due: Instant,
}

/// Pull-based periodic tick.
///
/// At most one tick is active at a time. Ticks are only delivered through
/// [`Ticker::poll`], so once [`Ticker::cancel`] returns the cancelled token
/// can never produce another tick.
pub struct Ticker {
    clock: Box<dyn Clock>,
    period: Duration,
    next_id: u64,
    active: Option<ActiveTick>,
}

impl Ticker {
    pub fn new(clock: Box<dyn Clock>, period: Duration) -> Self {
        Self {
            clock,
            period,
            next_id: 0,
            active: None,
        }
    }

    /// Ticker on the wall clock with the session period
    pub fn system() -> Self {
        Self::new(Box::new(SystemClock), SESSION_TICK)
    }

    /// Start a new periodic tick, replacing any active one.
    /// The first tick is due one period from now.
    pub fn schedule(&mut self) -> TickToken {
        self.next_id += 1;
        let token = TickToken(self.next_id);
        self.active = Some(ActiveTick {
            token,
            next_due: self.clock.now() + self.period,
        });
        token
    }

    /// Cancel a tick. Returns false if the token was not active (already
    /// cancelled, or replaced by a later schedule).
    pub fn cancel(&mut self, token: TickToken) -> bool {
        match self.active {
            Some(active) if active.token == token => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, token: TickToken) -> bool {
        self.active.map_or(false, |active| active.token == token)
    }

    /// Number of whole periods elapsed since the last poll for the active tick
    pub fn poll(&mut self) -> Option<(TickToken, u32)> {
        let period = self.period;
        let now = self.clock.now();
        let active = self.active.as_mut()?;

        let mut due = 0u32;
        while active.next_due <= now {
            active.next_due += period;
            due = due.saturating_add(1);
        }
        Some((active.token, due))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual_ticker() -> (ManualClock, Ticker) {
        let clock = ManualClock::new();
        let ticker = Ticker::new(Box::new(clock.clone()), SESSION_TICK);
        (clock, ticker)
    }

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_poll_counts_whole_periods() {
        let (clock, mut ticker) = manual_ticker();
        let token = ticker.schedule();

        clock.advance(Duration::from_millis(900));
        assert_eq!(ticker.poll(), Some((token, 0)));

        clock.advance(Duration::from_millis(100));
        assert_eq!(ticker.poll(), Some((token, 1)));

        clock.advance(Duration::from_millis(3500));
        assert_eq!(ticker.poll(), Some((token, 3)));

        // The half period carried over completes on the next second
        clock.advance(Duration::from_millis(500));
        assert_eq!(ticker.poll(), Some((token, 1)));
    }

    #[test]
    fn test_no_ticks_after_cancel() {
        let (clock, mut ticker) = manual_ticker();
        let token = ticker.schedule();
        clock.advance(Duration::from_secs(5));

        assert!(ticker.cancel(token));
        assert!(!ticker.is_active(token));
        assert_eq!(ticker.poll(), None);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let (_clock, mut ticker) = manual_ticker();
        let token = ticker.schedule();

        assert!(ticker.cancel(token));
        assert!(!ticker.cancel(token));
    }

    #[test]
    fn test_stale_token_does_not_cancel_new_tick() {
        let (clock, mut ticker) = manual_ticker();
        let old = ticker.schedule();
        let new = ticker.schedule();
        assert_ne!(old, new);

        assert!(!ticker.cancel(old));
        assert!(ticker.is_active(new));

        clock.advance(Duration::from_secs(2));
        assert_eq!(ticker.poll(), Some((new, 2)));
    }

    #[test]
    fn test_reschedule_restarts_period() {
        let (clock, mut ticker) = manual_ticker();
        ticker.schedule();
        clock.advance(Duration::from_millis(800));

        let token = ticker.schedule();
        clock.advance(Duration::from_millis(800));
        assert_eq!(ticker.poll(), Some((token, 0)));
    }
}
