use parking_lot::{Mutex, MutexGuard, const_mutex};

pub(crate) mod mocks;
pub(crate) use mocks::{Call, FakeKernel};

// The real interval timers are shared by every test thread in the process.
static HOST_TIMERS: Mutex<()> = const_mutex(());

/// Serializes tests that arm the host kernel's timers.
#[must_use]
pub(crate) fn lock_host_timers() -> MutexGuard<'static, ()> {
    HOST_TIMERS.lock()
}

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
