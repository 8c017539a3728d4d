//! Interval timers with sub-second precision.
//!
//! A thin layer over `setitimer(2)` and `getitimer(2)`: seconds go in and come
//! out as `f64`, the kernel's `timeval` split is handled by [`timeval`], and
//! every kernel failure surfaces as [`ItimerError::SystemCall`]. Delivering or
//! handling the resulting signals is left to the caller.
//!
//! ```no_run
//! use itimer::TimerClass;
//!
//! let previous = itimer::set_timer(TimerClass::Real, 2.0, 0.5)?;
//! assert_eq!(previous, itimer::TimerSpec::DISARMED);
//!
//! let left = itimer::alarm(0.0)?;
//! assert!(left <= 2.0);
//! # Ok::<(), itimer::ItimerError>(())
//! ```

// Interval timers are a POSIX facility, there is nothing to expose elsewhere.
#![cfg(unix)]

mod class;
pub use class::{ITIMER_PROF, ITIMER_REAL, ITIMER_VIRTUAL, TimerClass};

pub mod sys;

pub mod timer;
pub use timer::{
    Builder, Field, Itimer, ItimerError, NegativeDurations, Result, Snapshot, Syscall, TimerGuard,
    TimerSpec,
};

pub mod timeval;

#[cfg(test)]
mod test_utils;

/// Delivers `SIGALRM` after `secs` seconds, returning what was left on the
/// previous real-time timer. See [`Itimer::alarm`].
pub fn alarm(secs: f64) -> Result<f64> {
    Itimer::new().alarm(secs)
}

/// Arms `which` on the host kernel. See [`Itimer::set_timer`].
pub fn set_timer(which: impl Into<libc::c_int>, value: f64, interval: f64) -> Result<TimerSpec> {
    Itimer::new().set_timer(which, value, interval)
}

/// Reads `which` from the host kernel. See [`Itimer::get_timer`].
pub fn get_timer(which: impl Into<libc::c_int>) -> Result<TimerSpec> {
    Itimer::new().get_timer(which)
}
