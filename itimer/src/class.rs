use nix::sys::signal::Signal;
use std::fmt;

/// Decrements in real time and delivers `SIGALRM` on expiration.
pub const ITIMER_REAL: libc::c_int = libc::ITIMER_REAL;

/// Decrements only while the process runs in user mode, delivers `SIGVTALRM`.
pub const ITIMER_VIRTUAL: libc::c_int = libc::ITIMER_VIRTUAL;

/// Decrements while the process runs in user or kernel mode, delivers `SIGPROF`.
pub const ITIMER_PROF: libc::c_int = libc::ITIMER_PROF;

/// The three interval timers every process owns.
///
/// The numeric identifiers come from the platform headers, they are never
/// assumed to be `0`, `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerClass {
    Real,
    Virtual,
    Prof,
}

impl TimerClass {
    pub const ALL: [TimerClass; 3] = [TimerClass::Real, TimerClass::Virtual, TimerClass::Prof];

    pub const fn as_raw(self) -> libc::c_int {
        match self {
            TimerClass::Real => ITIMER_REAL,
            TimerClass::Virtual => ITIMER_VIRTUAL,
            TimerClass::Prof => ITIMER_PROF,
        }
    }

    /// Maps a raw `which` back to its class, `None` if the platform does not
    /// know it.
    pub const fn from_raw(which: libc::c_int) -> Option<Self> {
        match which {
            ITIMER_REAL => Some(TimerClass::Real),
            ITIMER_VIRTUAL => Some(TimerClass::Virtual),
            ITIMER_PROF => Some(TimerClass::Prof),
            _ => None,
        }
    }

    /// Signal the kernel sends to the process when this timer expires.
    pub const fn signal(self) -> Signal {
        match self {
            TimerClass::Real => Signal::SIGALRM,
            TimerClass::Virtual => Signal::SIGVTALRM,
            TimerClass::Prof => Signal::SIGPROF,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TimerClass::Real => "ITIMER_REAL",
            TimerClass::Virtual => "ITIMER_VIRTUAL",
            TimerClass::Prof => "ITIMER_PROF",
        }
    }

    // Position in `ALL`, used to lay out per-class storage.
    pub(crate) const fn index(self) -> usize {
        match self {
            TimerClass::Real => 0,
            TimerClass::Virtual => 1,
            TimerClass::Prof => 2,
        }
    }
}

impl From<TimerClass> for libc::c_int {
    fn from(class: TimerClass) -> Self {
        class.as_raw()
    }
}

impl TryFrom<libc::c_int> for TimerClass {
    type Error = libc::c_int;

    fn try_from(which: libc::c_int) -> Result<Self, Self::Error> {
        TimerClass::from_raw(which).ok_or(which)
    }
}

impl fmt::Display for TimerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
