use crate::TimerClass;
use crate::sys::TimerSys;
use crate::timer::{Itimer, Result, TimerSpec};
use crate::timeval::ZERO_ITIMERVAL;
use std::fmt;
use std::time::{Duration, Instant};

const USEC_PER_SEC: i128 = 1_000_000;

/// Puts a timer back the way it was when the guard goes out of scope.
///
/// Returned by [`Itimer::set_timer_scoped`]. The guard is armed on creation
/// and restores the previous state on drop unless it was disarmed.
///
/// For `ITIMER_REAL` the time spent inside the guard is charged to the
/// previous timer, so its original deadline is kept: a one-shot deadline that
/// passed meanwhile stays disarmed, a periodic one resumes at its current
/// phase. The CPU-time classes cannot be derived from a wall clock, they get
/// back the remaining value captured when the guard was armed.
///
/// A restore failing on drop is only reported through `tracing`, call
/// [`TimerGuard::restore`] to handle the error.
#[must_use = "dropping the guard immediately restores the previous timer"]
pub struct TimerGuard<'a, S: TimerSys> {
    itimer: &'a Itimer<S>,
    which: libc::c_int,
    armed_at: Instant,

    // Raw kernel value so the restore does not go through a float roundtrip.
    // `None` once the guard has been disarmed or has already restored.
    previous: Option<libc::itimerval>,
}

impl<S: TimerSys> Itimer<S> {
    /// Arms `which` like [`Itimer::set_timer`] and returns a guard that
    /// re-arms the previous state when dropped.
    pub fn set_timer_scoped(
        &self,
        which: impl Into<libc::c_int>,
        value: f64,
        interval: f64,
    ) -> Result<TimerGuard<'_, S>> {
        let which = which.into();
        let previous = self.arm(which, value, interval)?;

        Ok(TimerGuard {
            itimer: self,
            which,
            armed_at: self.sys.now(),
            previous: Some(previous),
        })
    }
}

impl<S: TimerSys> TimerGuard<'_, S> {
    pub fn which(&self) -> libc::c_int {
        self.which
    }

    /// The state captured when the guard was armed, `None` once disarmed.
    pub fn previous(&self) -> Option<TimerSpec> {
        self.previous.map(TimerSpec::from)
    }

    /// Keeps the new timer running after the guard is dropped.
    pub fn disarm(&mut self) {
        self.previous.take();
    }

    /// Restores the previous state now and reports the outcome.
    ///
    /// Returns the state that was replaced by the restore.
    pub fn restore(mut self) -> Result<TimerSpec> {
        match self.take_restorable() {
            Some(previous) => self.itimer.swap(self.which, &previous).map(TimerSpec::from),
            None => self.itimer.get_timer(self.which),
        }
    }

    fn take_restorable(&mut self) -> Option<libc::itimerval> {
        let previous = self.previous.take()?;

        if TimerClass::from_raw(self.which) != Some(TimerClass::Real) {
            return Some(previous);
        }

        let elapsed = self.itimer.sys.now().saturating_duration_since(self.armed_at);
        Some(charge_elapsed(&previous, elapsed))
    }
}

/// Counts `elapsed` down on a kernel timer value the way the kernel would
/// have: one-shot timers that expire are disarmed, periodic ones are reloaded.
fn charge_elapsed(timer: &libc::itimerval, elapsed: Duration) -> libc::itimerval {
    let value = micros(&timer.it_value);
    let interval = micros(&timer.it_interval);
    let elapsed = elapsed.as_micros() as i128;

    let remaining = if value <= 0 {
        return *timer;
    } else if elapsed < value {
        value - elapsed
    } else if interval <= 0 {
        return ZERO_ITIMERVAL;
    } else {
        interval - (elapsed - value) % interval
    };

    libc::itimerval {
        it_value: libc::timeval {
            tv_sec: (remaining / USEC_PER_SEC) as libc::time_t,
            tv_usec: (remaining % USEC_PER_SEC) as libc::suseconds_t,
        },
        it_interval: timer.it_interval,
    }
}

fn micros(tv: &libc::timeval) -> i128 {
    tv.tv_sec as i128 * USEC_PER_SEC + tv.tv_usec as i128
}

impl<S: TimerSys> fmt::Debug for TimerGuard<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerGuard")
            .field("which", &self.which)
            .field("previous", &self.previous())
            .finish()
    }
}

impl<S: TimerSys> Drop for TimerGuard<'_, S> {
    fn drop(&mut self) {
        if let Some(previous) = self.take_restorable() {
            if let Err(err) = self.itimer.swap(self.which, &previous) {
                tracing::debug!(which = self.which, %err, "failed to restore interval timer on drop");
            }
        }
    }
}
