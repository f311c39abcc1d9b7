//! Fixed-cadence redraw loop used while previewing a template.
//!
//! The loop is cooperative: every tick checks a shared flag first and does
//! nothing once the flag is cleared. Frames only read geometry.

use crate::config::EditorConfig;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

/// What the loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Reschedule,
    Stopped,
}

/// Clonable handle that ends a running preview.
#[derive(Debug, Clone)]
pub struct PreviewHandle {
    running: Arc<AtomicBool>,
}

impl PreviewHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Redraw loop state.
#[derive(Debug)]
pub struct PreviewTicker {
    running: Arc<AtomicBool>,
    interval: Duration,
}

impl PreviewTicker {
    /// A running ticker firing every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
            interval,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.preview_interval())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn handle(&self) -> PreviewHandle {
        PreviewHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Run one frame unless the preview has been stopped.
    pub fn tick(&self, frame: impl FnOnce()) -> Tick {
        if !self.running.load(Ordering::SeqCst) {
            return Tick::Stopped;
        }
        frame();
        Tick::Reschedule
    }

    /// Drive the loop on its own thread until stopped.
    ///
    /// The thread yields the number of frames it drew.
    pub fn spawn<F>(self, mut frame: F) -> JoinHandle<u64>
    where
        F: FnMut() + Send + 'static,
    {
        std::thread::spawn(move || {
            log::info!("Preview loop started ({:?} per frame)", self.interval);
            let mut frames = 0u64;
            while self.tick(|| frame()) == Tick::Reschedule {
                frames += 1;
                std::thread::sleep(self.interval);
            }
            log::info!("Preview loop stopped after {} frames", frames);
            frames
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU64;

    #[test]
    fn test_tick_runs_frame_while_running() {
        let ticker = PreviewTicker::new(Duration::from_millis(1));
        let mut drawn = 0;
        assert_eq!(ticker.tick(|| drawn += 1), Tick::Reschedule);
        assert_eq!(drawn, 1);
    }

    #[test]
    fn test_tick_after_stop_is_noop() {
        let ticker = PreviewTicker::new(Duration::from_millis(1));
        ticker.handle().stop();
        let mut drawn = 0;
        assert_eq!(ticker.tick(|| drawn += 1), Tick::Stopped);
        assert_eq!(drawn, 0);
    }

    #[test]
    fn test_default_cadence_is_30_fps() {
        let ticker = PreviewTicker::from_config(&EditorConfig::default());
        assert_eq!(ticker.interval(), Duration::from_secs(1) / 30);
    }

    #[test]
    fn test_spawned_loop_stops_on_flag() {
        let ticker = PreviewTicker::new(Duration::from_millis(1));
        let handle = ticker.handle();
        let counter = Arc::new(AtomicU64::new(0));
        let frame_counter = Arc::clone(&counter);

        let join = ticker.spawn(move || {
            frame_counter.fetch_add(1, Ordering::SeqCst);
        });
        while counter.load(Ordering::SeqCst) < 3 {
            std::thread::yield_now();
        }
        handle.stop();
        let frames = join.join().unwrap();

        assert!(!handle.is_running());
        assert_eq!(frames, counter.load(Ordering::SeqCst));
        assert!(frames >= 3);
    }
}
