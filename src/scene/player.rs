//! Fixed-rate frame loop with cooperative cancellation.

use crate::image::PixelBuffer;
use crate::scene::Scene;
use crate::trace::{trace_debug, trace_event, trace_span};
use crate::util::SpinResult;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Cloneable handle that asks a running [`Player`] to stop.
///
/// The flag is checked once per frame, so the loop exits after the frame in
/// progress has been published.
#[derive(Clone, Debug)]
pub struct StopHandle {
    playing: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.playing.store(false, Ordering::Release);
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }
}

/// Drives a [`Scene`] one frame per interval on the calling thread.
#[derive(Debug)]
pub struct Player {
    interval: Duration,
    max_frames: Option<u64>,
    playing: Arc<AtomicBool>,
}

impl Player {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_frames: None,
            playing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Stops on its own after `frames` frames.
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            playing: Arc::clone(&self.playing),
        }
    }

    /// Plays until stopped or the frame limit is hit; returns frames shown.
    ///
    /// Each iteration advances and paints the scene, sleeps for whatever is
    /// left of the frame interval and then hands the canvas to `on_frame`.
    /// Stop requests made before `run` is entered are discarded.
    pub fn run<F>(&self, scene: &mut Scene, mut on_frame: F) -> SpinResult<u64>
    where
        F: FnMut(u64, &PixelBuffer) -> SpinResult<()>,
    {
        self.playing.store(true, Ordering::Release);
        let mut frames = 0u64;
        let result = loop {
            if !self.playing.load(Ordering::Acquire) {
                break Ok(frames);
            }
            if self.max_frames.is_some_and(|max| frames >= max) {
                break Ok(frames);
            }

            let started = Instant::now();
            let _span = trace_span!("frame", index = frames).entered();
            if let Err(err) = scene.paint(true) {
                break Err(err);
            }
            let remaining = self.interval.saturating_sub(started.elapsed());
            trace_debug!("frame_painted", index = frames, idle_us = remaining.as_micros() as u64);
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
            if let Err(err) = on_frame(frames, scene.canvas()) {
                break Err(err);
            }
            frames += 1;
        };
        self.playing.store(false, Ordering::Release);
        trace_event!("player_stopped", frames = frames);
        result
    }
}
