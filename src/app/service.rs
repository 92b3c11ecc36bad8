// SPDX-License-Identifier: MPL-2.0
//! A stand-in for a non-visual service module.
//!
//! The service runs on its own thread and has no access to the view tree,
//! so it reports through [`show_global_toast`].

use crate::toast::{show_global_toast, ToastRequest};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// How often the service reports.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(3);

/// Polling step while waiting, so stopping stays responsive.
const POLL_STEP: Duration = Duration::from_millis(50);

/// Background reporter. Stops when dropped.
#[derive(Debug)]
pub struct Service {
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl Service {
    /// Spawns the reporting thread.
    #[must_use]
    pub fn start(interval: Duration) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let worker = std::thread::spawn(move || {
            let mut round = 0_u32;
            while sleep_while_running(&flag, interval) {
                round += 1;
                if show_global_toast(ToastRequest::info(format!("Background sync #{round} done")))
                    .is_none()
                {
                    tracing::debug!(round, "service report dropped, no toast provider");
                }
            }
        });

        tracing::info!(?interval, "background service started");
        Self {
            running,
            worker: Some(worker),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Signals the thread to stop and waits for it.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("background service thread panicked");
            }
            tracing::info!("background service stopped");
        }
    }
}

impl Drop for Service {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Sleeps for `total` in small steps. Returns `false` as soon as `running`
/// is cleared.
fn sleep_while_running(running: &AtomicBool, total: Duration) -> bool {
    let mut waited = Duration::ZERO;
    while waited < total {
        if !running.load(Ordering::Relaxed) {
            return false;
        }
        let step = POLL_STEP.min(total - waited);
        std::thread::sleep(step);
        waited += step;
    }
    running.load(Ordering::Relaxed)
}
