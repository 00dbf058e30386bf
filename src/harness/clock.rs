use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&mut self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that moves forward by `step` every time it is read.
///
/// Measuring any closure with it yields exactly one `step`.
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    current: Duration,
    step: Duration,
}

impl ManualClock {
    pub fn new(step: Duration) -> Self {
        Self {
            current: Duration::ZERO,
            step,
        }
    }

    pub fn set_step(&mut self, step: Duration) {
        self.step = step;
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> Duration {
        let reading = self.current;
        self.current += self.step;
        reading
    }
}

/// Runs `f` and returns its output together with the time it took on `clock`.
///
/// # Examples
/// ```
/// use kth_largest::harness::{measure, ManualClock};
/// use std::time::Duration;
///
/// let mut clock = ManualClock::new(Duration::from_millis(4));
/// let (value, elapsed) = measure(&mut clock, || 2 + 2);
/// assert_eq!(value, 4);
/// assert_eq!(elapsed, Duration::from_millis(4));
/// ```
pub fn measure<C, F, R>(clock: &mut C, f: F) -> (R, Duration)
where
    C: Clock + ?Sized,
    F: FnOnce() -> R,
{
    let start = clock.now();
    let out = f();
    let elapsed = clock.now().saturating_sub(start);
    (out, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances_per_reading() {
        let mut clock = ManualClock::new(Duration::from_micros(10));
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.now(), Duration::from_micros(10));
        clock.set_step(Duration::from_micros(1));
        assert_eq!(clock.now(), Duration::from_micros(20));
        assert_eq!(clock.now(), Duration::from_micros(21));
    }

    #[test]
    fn test_measure_with_manual_clock() {
        let mut clock = ManualClock::new(Duration::from_millis(3));
        for _ in 0..5 {
            let ((), elapsed) = measure(&mut clock, || ());
            assert_eq!(elapsed, Duration::from_millis(3));
        }
    }

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let mut clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_measure_through_trait_object() {
        let mut clock: Box<dyn Clock> = Box::new(ManualClock::new(Duration::from_nanos(7)));
        let (out, elapsed) = measure(clock.as_mut(), || "done");
        assert_eq!(out, "done");
        assert_eq!(elapsed, Duration::from_nanos(7));
    }
}
