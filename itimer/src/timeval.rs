//! Conversion between floating point seconds and the kernel's `timeval`.
//!
//! The whole-seconds part is the floor of the input and the microseconds part
//! is the fractional remainder scaled to microseconds. No range checks happen
//! here, callers that care about negative or non-finite input must reject it
//! before encoding.

/// Number of microseconds in a second.
pub const USEC_PER_SEC: f64 = 1_000_000.0;

/// A `timeval` of zero seconds.
pub const ZERO: libc::timeval = libc::timeval {
    tv_sec: 0,
    tv_usec: 0,
};

// Both halves zero, a disarmed timer.
pub(crate) const ZERO_ITIMERVAL: libc::itimerval = libc::itimerval {
    it_interval: ZERO,
    it_value: ZERO,
};

/// Splits `secs` into `(floor(secs), fract(secs) * 1e6)`.
///
/// The microseconds are rounded to the nearest integer rather than truncated:
/// values like `1.000001` are not exactly representable and truncating them
/// would silently drop a microsecond. When rounding reaches a full second the
/// carry moves into `tv_sec`, so non-negative input always yields
/// `tv_usec` in `[0, 1_000_000)`.
///
/// A positive value below half a microsecond rounds to `(0, 0)`, which the
/// kernel reads as "disarm the timer".
///
/// Whole seconds outside the range of `time_t` saturate at its bounds, the
/// accessor rejects such values before they get here.
///
/// Negative input keeps the sign of the remainder, e.g. `-0.5` encodes as
/// `(-1, -500_000)`. The kernel rejects such a value with `EINVAL`.
pub fn encode(secs: f64) -> libc::timeval {
    let mut sec = secs.floor();
    let mut usec = (secs % 1.0 * USEC_PER_SEC).round();

    if usec >= USEC_PER_SEC {
        sec += 1.0;
        usec -= USEC_PER_SEC;
    }

    libc::timeval {
        tv_sec: sec as libc::time_t,
        tv_usec: usec as libc::suseconds_t,
    }
}

/// Returns `tv_sec + tv_usec / 1e6`.
pub fn decode(tv: &libc::timeval) -> f64 {
    tv.tv_sec as f64 + tv.tv_usec as f64 / USEC_PER_SEC
}
