use crossbeam_channel::{Receiver, Sender, TrySendError, bounded, select};
use std::thread;
use std::time::Duration;

/// The countdown tick source. Exactly one exists per running exam: created
/// when the session enters InProgress, stopped on any exit from it, so a
/// stale timer can never keep mutating a discarded session.
///
/// A dedicated worker thread emits on the tick channel at a fixed cadence.
/// Cancellation is signalled by dropping the cancel sender, which wakes the
/// worker immediately; `stop` then joins it. Ticks are sent with `try_send`
/// into a one-slot channel so a slow consumer coalesces ticks instead of
/// blocking the worker.
#[derive(Debug)]
pub struct ExamTimer {
    ticks: Receiver<()>,
    cancel: Option<Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ExamTimer {
    /// Starts a timer at the exam cadence of one tick per second.
    pub fn start() -> Self {
        Self::with_interval(Duration::from_secs(1))
    }

    /// Starts a timer with an explicit cadence. Tests use millisecond
    /// intervals.
    pub fn with_interval(interval: Duration) -> Self {
        let (tick_tx, tick_rx) = bounded(1);
        let (cancel_tx, cancel_rx) = bounded::<()>(0);

        let handle = thread::Builder::new()
            .name("exam-sim::timer".to_string())
            .spawn(move || {
                loop {
                    select! {
                        recv(cancel_rx) -> _ => break,
                        default(interval) => {
                            match tick_tx.try_send(()) {
                                Ok(()) | Err(TrySendError::Full(())) => {}
                                Err(TrySendError::Disconnected(())) => break,
                            }
                        }
                    }
                }
            })
            .expect("failed to spawn timer thread");

        Self {
            ticks: tick_rx,
            cancel: Some(cancel_tx),
            handle: Some(handle),
        }
    }

    /// The channel the main loop selects over.
    pub fn ticks(&self) -> &Receiver<()> {
        &self.ticks
    }

    /// Cancels the worker and waits for it to exit. Idempotent. After this
    /// returns, no further ticks are produced (one already buffered tick may
    /// still be in the channel; the session's phase guard absorbs it).
    pub fn stop(&mut self) {
        self.cancel.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ExamTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
