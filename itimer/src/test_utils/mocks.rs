use crate::TimerClass;
use crate::sys::TimerSys;
use crate::timer::TimerSpec;
use nix::errno::Errno;
use parking_lot::Mutex;
use std::time::{Duration, Instant};

const USEC_PER_SEC: i64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Call {
    Set(libc::c_int, TimerSpec),
    Get(libc::c_int),
}

/// In-memory stand-in for the kernel's per-process interval timers.
///
/// Validates requests the way Linux does (`EINVAL` for an unknown class or a
/// malformed `timeval`), and only moves time forward when told to. Its clock
/// starts at construction and advances together with the timers.
#[derive(Debug)]
pub(crate) struct FakeKernel {
    epoch: Instant,
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    // Microseconds, indexed by `TimerClass::index`.
    timers: [Slot; 3],
    elapsed: Duration,
    fail_next: Option<Errno>,
    calls: Vec<Call>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Slot {
    value: i64,
    interval: i64,
}

impl FakeKernel {
    pub(crate) fn new() -> Self {
        Self {
            epoch: Instant::now(),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Makes the next call fail with `errno` without touching any timer.
    pub(crate) fn fail_next(&self, errno: Errno) {
        self.inner.lock().fail_next = Some(errno);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.inner.lock().calls.clone()
    }

    pub(crate) fn raw(&self, class: TimerClass) -> libc::itimerval {
        self.inner.lock().timers[class.index()].to_itimerval()
    }

    /// Lets `elapsed` pass on every class. Expired periodic timers are
    /// reloaded from their interval, expired one-shot timers are disarmed.
    pub(crate) fn advance(&self, elapsed: Duration) {
        let mut inner = self.inner.lock();
        inner.elapsed += elapsed;

        let elapsed = elapsed.as_micros() as i64;

        for slot in inner.timers.iter_mut().filter(|slot| slot.value > 0) {
            if elapsed < slot.value {
                slot.value -= elapsed;
            } else if slot.interval == 0 {
                *slot = Slot::default();
            } else {
                let overshoot = (elapsed - slot.value) % slot.interval;
                slot.value = slot.interval - overshoot;
            }
        }
    }
}

impl Inner {
    fn begin(&mut self, call: Call, which: libc::c_int) -> nix::Result<usize> {
        self.calls.push(call);

        if let Some(errno) = self.fail_next.take() {
            return Err(errno);
        }

        TimerClass::from_raw(which)
            .map(TimerClass::index)
            .ok_or(Errno::EINVAL)
    }
}

impl Slot {
    fn from_itimerval(iv: &libc::itimerval) -> nix::Result<Self> {
        Ok(Self {
            value: micros(&iv.it_value)?,
            interval: micros(&iv.it_interval)?,
        })
    }

    fn to_itimerval(self) -> libc::itimerval {
        libc::itimerval {
            it_value: timeval(self.value),
            it_interval: timeval(self.interval),
        }
    }
}

fn micros(tv: &libc::timeval) -> nix::Result<i64> {
    let (sec, usec) = (tv.tv_sec as i64, tv.tv_usec as i64);

    if sec < 0 || !(0..USEC_PER_SEC).contains(&usec) {
        return Err(Errno::EINVAL);
    }

    Ok(sec * USEC_PER_SEC + usec)
}

fn timeval(micros: i64) -> libc::timeval {
    libc::timeval {
        tv_sec: (micros / USEC_PER_SEC) as libc::time_t,
        tv_usec: (micros % USEC_PER_SEC) as libc::suseconds_t,
    }
}

impl TimerSys for FakeKernel {
    fn setitimer(&self, which: libc::c_int, new: &libc::itimerval) -> nix::Result<libc::itimerval> {
        let mut inner = self.inner.lock();
        let idx = inner.begin(Call::Set(which, TimerSpec::from(*new)), which)?;
        let slot = Slot::from_itimerval(new)?;

        let old = std::mem::replace(&mut inner.timers[idx], slot);
        Ok(old.to_itimerval())
    }

    fn getitimer(&self, which: libc::c_int) -> nix::Result<libc::itimerval> {
        let mut inner = self.inner.lock();
        let idx = inner.begin(Call::Get(which), which)?;

        Ok(inner.timers[idx].to_itimerval())
    }

    fn now(&self) -> Instant {
        self.epoch + self.inner.lock().elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeval::ZERO_ITIMERVAL;

    #[test]
    fn test_rejects_malformed_timeval() {
        let kernel = FakeKernel::new();
        let mut new = ZERO_ITIMERVAL;
        new.it_value.tv_usec = 1_000_000;

        let res = kernel.setitimer(TimerClass::Real.as_raw(), &new);
        assert_eq!(res.err(), Some(Errno::EINVAL));
        assert_eq!(kernel.raw(TimerClass::Real).it_value.tv_usec, 0);
    }
}
