use crate::sys::{Libc, TimerSys};
use crate::timer::{Builder, Field, ItimerError, NegativeDurations, Result, Syscall, TimerSpec};
use crate::timeval;

/// Handle to the interval timers of the current process.
///
/// The handle holds no timer state of its own, every call is a single
/// request against the kernel. Two handles, or two threads sharing one,
/// race exactly like direct `setitimer(2)` callers do: the last one to arm a
/// class wins.
#[derive(Debug, Clone)]
pub struct Itimer<S = Libc> {
    pub(crate) sys: S,
    pub(crate) negative_durations: NegativeDurations,
}

impl Itimer<Libc> {
    pub fn new() -> Self {
        Builder::new().build()
    }

    pub fn builder() -> Builder {
        Builder::new()
    }
}

impl Default for Itimer<Libc> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TimerSys> Itimer<S> {
    /// Arms `which` to expire after `value` seconds and then every `interval`
    /// seconds. A zero `value` disarms it, a zero `interval` makes it fire once.
    ///
    /// Returns the timer state as it was just before this call. `which` is
    /// not checked locally, an unknown class comes back as
    /// [`ItimerError::SystemCall`] with `EINVAL`.
    pub fn set_timer(
        &self,
        which: impl Into<libc::c_int>,
        value: f64,
        interval: f64,
    ) -> Result<TimerSpec> {
        self.arm(which.into(), value, interval).map(TimerSpec::from)
    }

    /// Same as [`Itimer::set_timer`] with a zero interval.
    pub fn set_timer_once(&self, which: impl Into<libc::c_int>, value: f64) -> Result<TimerSpec> {
        self.set_timer(which, value, 0.0)
    }

    /// Cancels any pending expiration of `which`, returning what was armed.
    pub fn disarm(&self, which: impl Into<libc::c_int>) -> Result<TimerSpec> {
        self.set_timer(which, 0.0, 0.0)
    }

    /// Reads the current state of `which` without touching it.
    pub fn get_timer(&self, which: impl Into<libc::c_int>) -> Result<TimerSpec> {
        let which = which.into();
        let current = TimerSpec::from(self.read(which)?);
        tracing::trace!(which, current.value, current.interval, "getitimer");

        Ok(current)
    }

    /// Encodes and swaps in a new timer, returning the raw previous value.
    pub(crate) fn arm(&self, which: libc::c_int, value: f64, interval: f64) -> Result<libc::itimerval> {
        let new = libc::itimerval {
            it_value: self.encode(Field::Value, value)?,
            it_interval: self.encode(Field::Interval, interval)?,
        };

        let previous = self.swap(which, &new)?;
        tracing::trace!(
            which,
            value,
            interval,
            previous.value = timeval::decode(&previous.it_value),
            previous.interval = timeval::decode(&previous.it_interval),
            "setitimer"
        );

        Ok(previous)
    }

    pub(crate) fn swap(&self, which: libc::c_int, new: &libc::itimerval) -> Result<libc::itimerval> {
        self.sys
            .setitimer(which, new)
            .map_err(ItimerError::system_call(Syscall::Setitimer, which))
    }

    pub(crate) fn read(&self, which: libc::c_int) -> Result<libc::itimerval> {
        self.sys
            .getitimer(which)
            .map_err(ItimerError::system_call(Syscall::Getitimer, which))
    }

    fn encode(&self, field: Field, secs: f64) -> Result<libc::timeval> {
        if !secs.is_finite() {
            return Err(ItimerError::NonFiniteDuration { field, secs });
        }

        // `-0.0` encodes to zero and is accepted.
        if secs < 0.0 && self.negative_durations == NegativeDurations::Reject {
            return Err(ItimerError::NegativeDuration { field, secs });
        }

        // Past these bounds the float to `time_t` cast would saturate.
        let sec = secs.floor();
        if sec >= libc::time_t::MAX as f64 + 1.0 || sec < libc::time_t::MIN as f64 {
            return Err(ItimerError::DurationOutOfRange { field, secs });
        }

        Ok(timeval::encode(secs))
    }
}
