/// Interval gate for the autosave driver.
///
/// The host calls `EditorSession::tick` from its periodic timer; this struct
/// decides whether enough time has passed since the last firing. The timer
/// fires immediately on the first tick after arming, then at most once per
/// interval.
#[derive(Debug, Clone)]
pub struct AutosaveTimer {
    interval: u64,
    last_fired: Option<u64>,
    cancelled: bool,
}

/// The original editors autosave every 30 seconds.
pub const DEFAULT_AUTOSAVE_INTERVAL: u64 = 30;

impl AutosaveTimer {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            last_fired: None,
            cancelled: false,
        }
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Returns true if the timer fires at `now`, and records the firing.
    pub fn fire(&mut self, now: u64) -> bool {
        if self.cancelled {
            return false;
        }
        let due = match self.last_fired {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.interval,
        };
        if due {
            self.last_fired = Some(now);
        }
        due
    }

    /// Cancels the timer. Used when the host unmounts the widget so no
    /// callback runs against a destroyed session.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Default for AutosaveTimer {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOSAVE_INTERVAL)
    }
}
