//! Periodic timer for hosted targets
//!
//! Stands in for a hardware timer interrupt: a dedicated thread runs the
//! callback to completion once per period. Callbacks never overlap, and the
//! thread owns the callback's state outright.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub struct PeriodicTimer<S> {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<S>,
}

impl<S: Send + 'static> PeriodicTimer<S> {
    /// Fire `callback` every `period` with exclusive access to `state`.
    /// Returning `ControlFlow::Break` disarms the timer.
    pub fn start<F>(period: Duration, mut state: S, mut callback: F) -> Self
    where
        F: FnMut(&mut S) -> ControlFlow<()> + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        log::info!("Timer armed: period {:?}", period);

        let handle = thread::spawn(move || {
            let mut next = Instant::now() + period;
            while !stop_flag.load(Ordering::Acquire) {
                let now = Instant::now();
                if next > now {
                    thread::sleep(next - now);
                }
                // Fixed-rate schedule; a late tick does not shift later ones
                next += period;
                if stop_flag.load(Ordering::Acquire) {
                    break;
                }
                if callback(&mut state).is_break() {
                    stop_flag.store(true, Ordering::Release);
                }
            }
            state
        });

        Self { stop, handle }
    }

    /// Whether the timer is still firing
    pub fn is_running(&self) -> bool {
        !self.stop.load(Ordering::Acquire)
    }

    /// Disarm and hand back the callback state. `Err` carries the panic
    /// payload if the callback panicked.
    pub fn stop(self) -> thread::Result<S> {
        self.stop.store(true, Ordering::Release);
        let result = self.handle.join();
        log::info!("Timer stopped");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_and_returns_state() {
        let timer = PeriodicTimer::start(Duration::from_millis(1), 0u32, |count| {
            *count += 1;
            if *count == 5 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        let deadline = Instant::now() + Duration::from_secs(5);
        while timer.is_running() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        assert_eq!(timer.stop().unwrap(), 5);
    }

    #[test]
    fn test_stop_disarms() {
        let timer = PeriodicTimer::start(Duration::from_millis(1), 0u32, |count| {
            *count += 1;
            ControlFlow::Continue(())
        });
        thread::sleep(Duration::from_millis(10));
        let fired = timer.stop().unwrap();
        assert!(fired >= 1);
    }
}
