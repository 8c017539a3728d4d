use nix::errno::Errno;
use std::fmt;
use std::io;

pub type Result<T, E = ItimerError> = std::result::Result<T, E>;

/// Kernel entry point that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syscall {
    Setitimer,
    Getitimer,
}

impl fmt::Display for Syscall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Syscall::Setitimer => f.write_str("setitimer"),
            Syscall::Getitimer => f.write_str("getitimer"),
        }
    }
}

/// Which half of a timer request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Value,
    Interval,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Value => f.write_str("value"),
            Field::Interval => f.write_str("interval"),
        }
    }
}

/// Errors returned by every timer operation.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ItimerError {
    /// The kernel rejected the call. Nothing is retried.
    #[error("{call}(which={which}) failed: {errno}")]
    SystemCall {
        call: Syscall,
        which: libc::c_int,
        #[source]
        errno: Errno,
    },

    #[error("timer {field} must not be negative, got {secs}s")]
    NegativeDuration { field: Field, secs: f64 },

    #[error("timer {field} must be finite, got {secs}")]
    NonFiniteDuration { field: Field, secs: f64 },

    /// The whole seconds do not fit the platform's `time_t`.
    #[error("timer {field} of {secs}s does not fit in time_t")]
    DurationOutOfRange { field: Field, secs: f64 },
}

impl ItimerError {
    pub(crate) fn system_call(call: Syscall, which: libc::c_int) -> impl FnOnce(Errno) -> Self {
        move |errno| ItimerError::SystemCall { call, which, errno }
    }

    pub fn errno(&self) -> Option<Errno> {
        match self {
            ItimerError::SystemCall { errno, .. } => Some(*errno),
            _ => None,
        }
    }

    pub fn raw_os_error(&self) -> Option<i32> {
        self.errno().map(|errno| errno as i32)
    }

    pub fn is_system_call(&self) -> bool {
        matches!(self, ItimerError::SystemCall { .. })
    }
}

impl From<ItimerError> for io::Error {
    fn from(err: ItimerError) -> Self {
        match err {
            ItimerError::SystemCall { errno, .. } => io::Error::from_raw_os_error(errno as i32),
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}
