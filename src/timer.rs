use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use winit::event_loop::EventLoopProxy;

pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// User event delivered to the winit event loop once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent;

/// Hand-off from the timer thread to the UI thread. The timer never touches
/// UI-owned state directly.
pub trait TickSink: Clone + Send + 'static {
    /// Returns false once the receiving side is gone.
    fn deliver(&self) -> bool;
}

impl TickSink for EventLoopProxy<TickEvent> {
    fn deliver(&self) -> bool {
        self.send_event(TickEvent).is_ok()
    }
}

struct Worker {
    stop_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

/// Fires one tick per period on a background thread. `stop` is always safe;
/// `start` while already running is a caller error.
pub struct TickTimer<S: TickSink> {
    sink: S,
    period: Duration,
    worker: Option<Worker>,
}

impl<S: TickSink> TickTimer<S> {
    pub fn new(sink: S) -> Self {
        Self::with_period(sink, TICK_PERIOD)
    }

    fn with_period(sink: S, period: Duration) -> Self {
        Self {
            sink,
            period,
            worker: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    pub fn start(&mut self) {
        debug_assert!(self.worker.is_none(), "tick timer started twice");
        let (stop_tx, stop_rx) = mpsc::channel();
        let sink = self.sink.clone();
        let period = self.period;
        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    if !sink.deliver() {
                        break;
                    }
                }
                // stop signal or sender dropped
                _ => break,
            }
        });
        self.worker = Some(Worker { stop_tx, handle });
    }

    /// Stops the worker and waits for it to exit. No-op when not running.
    pub fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            drop(worker.stop_tx);
            let _ = worker.handle.join();
        }
    }
}

impl<S: TickSink> Drop for TickTimer<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
