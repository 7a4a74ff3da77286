//! Detached units of work
//!
//! `spawn_detached` starts work that nobody joins and whose outcome nobody
//! observes. There is no queue bound: every call creates one more pending
//! unit, so a sustained burst can pile up threads.

use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;

const DETACHED_THREAD_NAME: &str = "log-handler";

/// Run `work` as an independent unit without waiting for it.
///
/// With the `tokio` feature and a current runtime the unit goes to the
/// runtime's blocking pool; a runtime that is shutting down may drop it
/// unrun. Otherwise it gets its own thread. If the OS refuses a new thread,
/// `work` runs inline on the caller's thread.
pub fn spawn_detached<F>(work: F)
where
    F: FnOnce() + Send + 'static,
{
    #[cfg(feature = "tokio")]
    let work = match tokio::runtime::Handle::try_current() {
        Ok(runtime) => {
            drop(runtime.spawn_blocking(work));
            return;
        }
        Err(_) => work,
    };

    let slot = Arc::new(Mutex::new(Some(work)));
    let remote = Arc::clone(&slot);

    let spawned = thread::Builder::new()
        .name(DETACHED_THREAD_NAME.to_string())
        .spawn(move || {
            if let Some(work) = remote.lock().take() {
                work();
            }
        });

    if spawned.is_err() {
        if let Some(work) = slot.lock().take() {
            work();
        }
    }
}
