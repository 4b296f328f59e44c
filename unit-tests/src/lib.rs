//! Host-side doubles for driving the ring engine in tests.

use embedded_hal_async::delay::DelayNs;
use ringlight_composer::{Rgb, StripSink};

/// Sink that records every latched frame
#[derive(Debug)]
pub struct RecordingSink<const N: usize> {
    pixels: [Rgb; N],
    /// Frames latched by `refresh`, oldest first
    pub frames: Vec<[Rgb; N]>,
    pub set_calls: usize,
}

impl<const N: usize> RecordingSink<N> {
    pub fn new() -> Self {
        Self {
            pixels: [Rgb::default(); N],
            frames: Vec::new(),
            set_calls: 0,
        }
    }

    pub fn refreshes(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&[Rgb; N]> {
        self.frames.last()
    }
}

impl<const N: usize> Default for RecordingSink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StripSink for RecordingSink<N> {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        self.set_calls += 1;
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn refresh(&mut self) {
        self.frames.push(self.pixels);
    }
}

/// Delay that returns immediately and records what was asked for
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub waits_ns: Vec<u64>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested waits in whole milliseconds
    pub fn waits_ms(&self) -> Vec<u64> {
        self.waits_ns.iter().map(|ns| ns / 1_000_000).collect()
    }

    pub fn total_ms(&self) -> u64 {
        self.waits_ns.iter().sum::<u64>() / 1_000_000
    }
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.push(u64::from(ns));
    }

    async fn delay_us(&mut self, us: u32) {
        self.waits_ns.push(u64::from(us) * 1_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waits_ns.push(u64::from(ms) * 1_000_000);
    }
}
