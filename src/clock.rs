//! # Mission Clock
//!
//! Countdown and elapsed mission time formatting for the dashboard header.
//!
//! The clock is pure: the host owns the timer and feeds in elapsed seconds,
//! this module only turns them into the `T-HH:MM:SS` display string.

/// Mission clock with a fixed countdown duration.
#[derive(Debug, Clone, Copy)]
pub struct MissionClock {
    countdown_s: i64,
}

impl MissionClock {
    /// Create a clock counting down from `countdown_s` seconds
    #[must_use]
    pub fn new(countdown_s: i64) -> Self {
        Self { countdown_s }
    }

    /// Format the display string for a given elapsed time
    ///
    /// Shows `T-HH:MM:SS` while counting down (including the zero instant)
    /// and `T+HH:MM:SS` once past liftoff. All fields are zero-padded to two
    /// digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use starbase_bridge::clock::MissionClock;
    ///
    /// let clock = MissionClock::new(60);
    /// assert_eq!(clock.display(18), "T-00:00:42");
    /// assert_eq!(clock.display(61), "T+00:00:01");
    /// ```
    #[must_use]
    pub fn display(&self, elapsed_s: i64) -> String {
        let remaining = self.countdown_s - elapsed_s;
        let (sign, display) = if remaining < 0 {
            ('+', -remaining)
        } else {
            ('-', remaining)
        };

        let hours = display / 3600;
        let minutes = (display % 3600) / 60;
        let seconds = display % 60;

        format!("T{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}
