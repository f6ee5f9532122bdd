use std::time::{Duration, Instant};

/// Pointer transitions a toast reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// Pausable countdown behind a toast's timer and progress bar.
///
/// Only unpaused time counts toward expiry. Time is passed in by the caller
/// so providers can drive it from their own clock.
#[derive(Debug, Clone)]
pub struct ToastCountdown {
    duration: Duration,
    elapsed: Duration,
    running_since: Option<Instant>,
}

impl ToastCountdown {
    pub fn start(duration: Duration, now: Instant) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            running_since: Some(now),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.running_since.is_none()
    }

    pub fn pause(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.elapsed += now.saturating_duration_since(since);
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    pub fn on_pointer(&mut self, event: PointerEvent, now: Instant) {
        match event {
            PointerEvent::Enter => self.pause(now),
            PointerEvent::Leave => self.resume(now),
        }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self.elapsed + now.saturating_duration_since(since),
            None => self.elapsed,
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.duration.saturating_sub(self.elapsed(now))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    /// Fraction of the timer bar still showing, 1.0 at start and 0.0 at expiry.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        self.remaining(now).as_secs_f64() / self.duration.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMER: Duration = Duration::from_millis(3000);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn expires_after_full_duration() {
        let t0 = Instant::now();
        let c = ToastCountdown::start(TIMER, t0);
        assert!(!c.is_expired(t0 + ms(2999)));
        assert!(c.is_expired(t0 + ms(3000)));
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let t0 = Instant::now();
        let mut c = ToastCountdown::start(TIMER, t0);

        c.on_pointer(PointerEvent::Enter, t0 + ms(1000));
        assert!(c.is_paused());
        // Hovered for ten seconds: nothing counts.
        assert_eq!(c.remaining(t0 + ms(11_000)), ms(2000));
        assert!(!c.is_expired(t0 + ms(11_000)));

        c.on_pointer(PointerEvent::Leave, t0 + ms(11_000));
        assert!(!c.is_expired(t0 + ms(12_999)));
        assert!(c.is_expired(t0 + ms(13_000)));
    }

    #[test]
    fn repeated_enter_does_not_double_count() {
        let t0 = Instant::now();
        let mut c = ToastCountdown::start(TIMER, t0);
        c.pause(t0 + ms(500));
        c.pause(t0 + ms(900));
        c.resume(t0 + ms(1000));
        c.resume(t0 + ms(1500));
        assert_eq!(c.remaining(t0 + ms(2000)), ms(1500));
    }

    #[test]
    fn progress_runs_down() {
        let t0 = Instant::now();
        let c = ToastCountdown::start(TIMER, t0);
        assert_eq!(c.progress(t0), 1.0);
        assert!((c.progress(t0 + ms(1500)) - 0.5).abs() < 1e-9);
        assert_eq!(c.progress(t0 + ms(4000)), 0.0);
    }
}
