use crate::sys::{Libc, TimerSys};
use crate::timer::Itimer;

/// What to do with a negative `value` or `interval`.
///
/// A negative number of seconds has no valid `timeval` encoding: the
/// microseconds come out negative and the kernel refuses them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NegativeDurations {
    /// Fail locally with `ItimerError::NegativeDuration` before any kernel call.
    #[default]
    Reject,

    /// Encode the value as is and let the kernel decide, which usually means
    /// `EINVAL`.
    PassThrough,
}

#[derive(Debug, Default, Clone)]
pub struct Builder {
    /// Defaults to `NegativeDurations::Reject`.
    pub(super) negative_durations: NegativeDurations,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    pub fn negative_durations(&mut self, policy: NegativeDurations) -> &mut Self {
        self.negative_durations = policy;
        self
    }

    /// Creates an `Itimer` that talks to the host kernel.
    pub fn build(&self) -> Itimer<Libc> {
        self.build_with(Libc)
    }

    /// Creates an `Itimer` on top of any [`TimerSys`] backend.
    pub fn build_with<S: TimerSys>(&self, sys: S) -> Itimer<S> {
        Itimer {
            sys,
            negative_durations: self.negative_durations,
        }
    }
}
