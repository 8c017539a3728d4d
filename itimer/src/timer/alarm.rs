use crate::TimerClass;
use crate::sys::TimerSys;
use crate::timer::{Itimer, Result};

impl<S: TimerSys> Itimer<S> {
    /// Arranges for `SIGALRM` to be delivered after `secs` seconds, like
    /// `alarm(2)` but with sub-second precision.
    ///
    /// Any previous real-time timer is replaced, including its interval.
    /// Returns the seconds that were left on the previous timer, the previous
    /// interval is dropped.
    pub fn alarm(&self, secs: f64) -> Result<f64> {
        self.set_timer(TimerClass::Real, secs, 0.0)
            .map(|previous| previous.value)
    }
}
