use crate::TimerClass;
use crate::sys::TimerSys;
use crate::timer::{Itimer, Result, TimerSpec};
use crate::timeval::ZERO_ITIMERVAL;
use std::fmt;

/// The state of all three interval timers at one point in time.
///
/// Each class is read with its own `getitimer(2)` call, so the three values
/// are not taken atomically with respect to each other.
#[derive(Clone, Copy)]
pub struct Snapshot {
    timers: [libc::itimerval; 3],
}

impl Snapshot {
    pub fn get(&self, class: TimerClass) -> TimerSpec {
        TimerSpec::from(self.timers[class.index()])
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimerClass, TimerSpec)> + '_ {
        TimerClass::ALL
            .into_iter()
            .map(move |class| (class, self.get(class)))
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<S: TimerSys> Itimer<S> {
    pub fn snapshot(&self) -> Result<Snapshot> {
        let mut timers = [ZERO_ITIMERVAL; 3];

        for class in TimerClass::ALL {
            timers[class.index()] = self.read(class.as_raw())?;
        }

        Ok(Snapshot { timers })
    }

    /// Re-arms every class with the values held by `snapshot`.
    ///
    /// Stops at the first class the kernel refuses, classes before it have
    /// already been restored.
    pub fn restore(&self, snapshot: &Snapshot) -> Result<()> {
        for class in TimerClass::ALL {
            self.swap(class.as_raw(), &snapshot.timers[class.index()])?;
        }

        tracing::trace!(?snapshot, "restored interval timers");
        Ok(())
    }
}
