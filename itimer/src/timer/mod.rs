mod alarm;

pub mod builder;
pub use builder::{Builder, NegativeDurations};

pub mod errors;
pub use errors::{Field, ItimerError, Result, Syscall};

pub mod guard;
pub use guard::TimerGuard;

mod itimer;
pub use itimer::Itimer;

pub mod snapshot;
pub use snapshot::Snapshot;

pub mod value;
pub use value::TimerSpec;
