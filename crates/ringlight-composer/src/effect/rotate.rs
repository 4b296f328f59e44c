//! Rotating segment ("marquee") effect

use embassy_time::Duration;

use super::FrameGenerator;
use crate::color::Rgb;
use crate::frame::PixelBuffer;

/// A segment of `segment_len` lit pixels that advances one position per
/// frame, for `revolutions` full turns of the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateEffect {
    color: Rgb,
    segment_len: usize,
    revolutions: usize,
    period: Duration,
}

impl RotateEffect {
    pub const fn new(color: Rgb, segment_len: usize, revolutions: usize, period: Duration) -> Self {
        Self {
            color,
            segment_len,
            revolutions,
            period,
        }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl<const N: usize> FrameGenerator<N> for RotateEffect {
    fn frame_count(&self) -> usize {
        self.revolutions * N
    }

    fn frame_period(&self) -> Duration {
        self.period
    }

    fn render(&self, step: usize, frame: &mut PixelBuffer<N>) {
        frame.clear();
        if N == 0 {
            return;
        }
        for offset in 0..self.segment_len.min(N) {
            frame.set((step + offset) % N, self.color);
        }
    }
}
