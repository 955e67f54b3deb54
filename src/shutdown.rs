use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lightweight handle for checking shutdown state.
///
/// Set by SIGTERM/SIGINT/SIGHUP or by the UI itself. In raw mode Ctrl+C
/// arrives as a key press, so the signal path mostly covers `kill`.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the termination signals against this handle's flag.
    pub fn install_signal_handlers(&self) -> io::Result<()> {
        for signal in [SIGTERM, SIGINT, SIGHUP] {
            signal_hook::flag::register(signal, Arc::clone(&self.shutdown))?;
        }
        Ok(())
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("Shutdown requested");
        }
    }

    /// Signal shutdown when the returned guard drops, on every exit path.
    #[must_use = "shutdown is signalled when the guard is dropped"]
    pub fn signal_on_drop(&self) -> SignalOnDrop {
        SignalOnDrop(self.clone())
    }
}

pub struct SignalOnDrop(ShutdownHandle);

impl Drop for SignalOnDrop {
    fn drop(&mut self) {
        self.0.signal();
    }
}
