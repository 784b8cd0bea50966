//! Per-field Stable/Flashing state machine.
//!
//! Time is passed in explicitly so the machine can be driven from tests and
//! from the event loop alike. The timer that eventually settles a flash
//! lives in `timer.rs`; this type only records deadlines.

use std::time::Duration;
use tokio::time::Instant;

/// Equality for change detection: NaN matches NaN, so a field stuck at NaN
/// stays put instead of re-flashing on every observation.
fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Flash {
    delta: f64,
    until: Instant,
}

/// Outcome of feeding a new value to a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observed {
    /// Same value as last observed.
    Unchanged,
    /// Entered or restarted a flash that lasts until the given instant.
    Flashing(Instant),
    /// The value came back to the baseline while flashing.
    Settled,
}

/// Colour hint for a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Gain,
    Loss,
    Neutral,
}

impl Tone {
    pub fn of(delta: Option<f64>) -> Self {
        match delta {
            Some(d) if d > 0.0 => Tone::Gain,
            Some(d) if d < 0.0 => Tone::Loss,
            _ => Tone::Neutral,
        }
    }
}

/// A field's current value, the last settled value, and the delta between
/// them while the flash is live.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayedValue {
    pub value: f64,
    pub baseline: f64,
    pub delta: Option<f64>,
}

impl DisplayedValue {
    pub fn tone(&self) -> Tone {
        Tone::of(self.delta)
    }
}

#[derive(Debug, Clone)]
pub struct FlashCell {
    baseline: f64,
    current: f64,
    flash: Option<Flash>,
}

impl FlashCell {
    pub fn new(value: f64) -> Self {
        Self {
            baseline: value,
            current: value,
            flash: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    /// Last settled value. Deltas are measured against this.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn is_flashing(&self, now: Instant) -> bool {
        self.flash.is_some_and(|f| now < f.until)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.flash.map(|f| f.until)
    }

    /// Live delta, or `None` once `now` reaches the deadline even if the
    /// flash has not been settled yet.
    pub fn delta(&self, now: Instant) -> Option<f64> {
        self.flash.filter(|f| now < f.until).map(|f| f.delta)
    }

    pub fn displayed(&self, now: Instant) -> DisplayedValue {
        DisplayedValue {
            value: self.current,
            baseline: self.baseline,
            delta: self.delta(now),
        }
    }

    pub fn observe(&mut self, value: f64, now: Instant, dwell: Duration) -> Observed {
        self.settle_if_due(now);
        if same_value(value, self.current) {
            return Observed::Unchanged;
        }
        self.current = value;
        if same_value(value, self.baseline) {
            self.flash = None;
            return Observed::Settled;
        }
        let until = now + dwell;
        self.flash = Some(Flash {
            delta: value - self.baseline,
            until,
        });
        Observed::Flashing(until)
    }

    /// Drop any flash and adopt the current value as the new baseline.
    pub fn settle(&mut self) {
        self.flash = None;
        self.baseline = self.current;
    }

    pub fn settle_if_due(&mut self, now: Instant) -> bool {
        match self.flash {
            Some(f) if now >= f.until => {
                self.settle();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DWELL: Duration = Duration::from_millis(2000);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_delta_window() {
        let t = Instant::now();
        let mut cell = FlashCell::new(1_000_000.0);
        assert_eq!(cell.observe(1_050_000.0, t, DWELL), Observed::Flashing(t + DWELL));

        assert_eq!(cell.delta(t), Some(50_000.0));
        assert_eq!(cell.delta(t + ms(1999)), Some(50_000.0));
        assert_eq!(cell.delta(t + DWELL), None);
        assert!(!cell.is_flashing(t + DWELL));
        // Not settled until someone asks.
        assert_eq!(cell.baseline(), 1_000_000.0);

        assert!(cell.settle_if_due(t + DWELL));
        assert_eq!(cell.baseline(), 1_050_000.0);
        assert_eq!(cell.deadline(), None);
    }

    #[test]
    fn test_second_change_measures_from_settled_baseline() {
        let t = Instant::now();
        let mut cell = FlashCell::new(100.0);
        cell.observe(150.0, t, DWELL);
        let t2 = t + ms(500);
        assert_eq!(cell.observe(170.0, t2, DWELL), Observed::Flashing(t2 + DWELL));
        assert_eq!(cell.delta(t2), Some(70.0));
        assert_eq!(cell.delta(t + DWELL), Some(70.0));
        assert_eq!(cell.delta(t2 + DWELL), None);
        assert_eq!(cell.baseline(), 100.0);
    }

    #[test]
    fn test_change_after_expiry_uses_new_baseline() {
        let t = Instant::now();
        let mut cell = FlashCell::new(100.0);
        cell.observe(150.0, t, DWELL);
        let later = t + ms(2100);
        cell.observe(120.0, later, DWELL);
        assert_eq!(cell.baseline(), 150.0);
        assert_eq!(cell.delta(later), Some(-30.0));
    }

    #[test]
    fn test_return_to_baseline_settles() {
        let t = Instant::now();
        let mut cell = FlashCell::new(100.0);
        cell.observe(150.0, t, DWELL);
        assert_eq!(cell.observe(100.0, t + ms(10), DWELL), Observed::Settled);
        assert_eq!(cell.delta(t + ms(10)), None);
        assert_eq!(cell.value(), 100.0);
    }

    #[test]
    fn test_same_value_is_unchanged() {
        let t = Instant::now();
        let mut cell = FlashCell::new(5.0);
        assert_eq!(cell.observe(5.0, t, DWELL), Observed::Unchanged);
        cell.observe(6.0, t, DWELL);
        assert_eq!(cell.observe(6.0, t + ms(100), DWELL), Observed::Unchanged);
        assert_eq!(cell.deadline(), Some(t + DWELL));
    }

    #[test]
    fn test_nan_value_flashes_once() {
        let t = Instant::now();
        let mut cell = FlashCell::new(10.0);
        assert_eq!(cell.observe(f64::NAN, t, DWELL), Observed::Flashing(t + DWELL));
        assert_eq!(cell.observe(f64::NAN, t + ms(100), DWELL), Observed::Unchanged);
        assert_eq!(cell.deadline(), Some(t + DWELL));

        // After settling, NaN is the baseline and the same value is still a no-op.
        assert_eq!(cell.observe(f64::NAN, t + ms(5000), DWELL), Observed::Unchanged);
        assert!(cell.baseline().is_nan());
        assert_eq!(cell.deadline(), None);

        assert_eq!(cell.observe(3.0, t + ms(6000), DWELL), Observed::Flashing(t + ms(8000)));
    }

    #[test]
    fn test_signed_zero_is_unchanged() {
        let t = Instant::now();
        let mut cell = FlashCell::new(0.0);
        assert_eq!(cell.observe(-0.0, t, DWELL), Observed::Unchanged);
    }

    #[test]
    fn test_tone() {
        assert_eq!(Tone::of(Some(1.0)), Tone::Gain);
        assert_eq!(Tone::of(Some(-0.5)), Tone::Loss);
        assert_eq!(Tone::of(Some(0.0)), Tone::Neutral);
        assert_eq!(Tone::of(None), Tone::Neutral);
    }
}
