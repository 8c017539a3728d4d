//! The kernel calls behind every timer operation.
//!
//! Interval timers are process-wide state owned by the kernel. [`TimerSys`] is
//! the only place that state is touched, so tests can substitute a fake kernel
//! and inject failures deterministically.

mod host;
pub use host::Libc;

use std::sync::Arc;
use std::time::Instant;

pub trait TimerSys {
    /// Arms `which` with `new` and returns the previous value, as one atomic
    /// kernel operation.
    fn setitimer(&self, which: libc::c_int, new: &libc::itimerval) -> nix::Result<libc::itimerval>;

    /// Reads the current value of `which` without changing it.
    fn getitimer(&self, which: libc::c_int) -> nix::Result<libc::itimerval>;

    /// Clock that `ITIMER_REAL` counts down against.
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<T: TimerSys + ?Sized> TimerSys for &T {
    fn setitimer(&self, which: libc::c_int, new: &libc::itimerval) -> nix::Result<libc::itimerval> {
        (**self).setitimer(which, new)
    }

    fn getitimer(&self, which: libc::c_int) -> nix::Result<libc::itimerval> {
        (**self).getitimer(which)
    }

    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<T: TimerSys + ?Sized> TimerSys for Arc<T> {
    fn setitimer(&self, which: libc::c_int, new: &libc::itimerval) -> nix::Result<libc::itimerval> {
        (**self).setitimer(which, new)
    }

    fn getitimer(&self, which: libc::c_int) -> nix::Result<libc::itimerval> {
        (**self).getitimer(which)
    }

    fn now(&self) -> Instant {
        (**self).now()
    }
}
