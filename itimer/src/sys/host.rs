use super::TimerSys;
use crate::timeval::ZERO_ITIMERVAL;
use nix::errno::Errno;

/// The host kernel, reached through `libc`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Libc;

impl TimerSys for Libc {
    fn setitimer(&self, which: libc::c_int, new: &libc::itimerval) -> nix::Result<libc::itimerval> {
        let mut old = ZERO_ITIMERVAL;

        // SAFETY: both pointers come from live references for the duration of the call.
        let ret = unsafe { libc::setitimer(which, new, &mut old) };
        Errno::result(ret)?;

        Ok(old)
    }

    fn getitimer(&self, which: libc::c_int) -> nix::Result<libc::itimerval> {
        let mut curr = ZERO_ITIMERVAL;

        // SAFETY: `curr` outlives the call and is a valid itimerval.
        let ret = unsafe { libc::getitimer(which, &mut curr) };
        Errno::result(ret)?;

        Ok(curr)
    }
}
