use crate::timeval;
use std::time::Duration;

/// State of one interval timer, in seconds.
///
/// `value` is the time left until the next expiration, `0.0` meaning the timer
/// is disarmed. `interval` is the period reloaded after each expiration,
/// `0.0` meaning the timer fires once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimerSpec {
    pub value: f64,
    pub interval: f64,
}

impl TimerSpec {
    pub const DISARMED: TimerSpec = TimerSpec::new(0.0, 0.0);

    pub const fn new(value: f64, interval: f64) -> Self {
        Self { value, interval }
    }

    pub fn is_armed(&self) -> bool {
        self.value > 0.0
    }

    pub fn is_one_shot(&self) -> bool {
        self.interval == 0.0
    }

    /// `value` as a [`Duration`], `None` if it is negative or not finite.
    pub fn value_duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.value).ok()
    }

    /// `interval` as a [`Duration`], `None` if it is negative or not finite.
    pub fn interval_duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.interval).ok()
    }
}

impl From<libc::itimerval> for TimerSpec {
    fn from(iv: libc::itimerval) -> Self {
        Self {
            value: timeval::decode(&iv.it_value),
            interval: timeval::decode(&iv.it_interval),
        }
    }
}

impl From<TimerSpec> for (f64, f64) {
    fn from(spec: TimerSpec) -> Self {
        (spec.value, spec.interval)
    }
}

impl From<(f64, f64)> for TimerSpec {
    fn from((value, interval): (f64, f64)) -> Self {
        Self { value, interval }
    }
}
