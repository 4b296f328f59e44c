//! Frame generators with compile-time known variants
//!
//! Every animation is data: a color, a step count and a frame period.
//! One pacing loop in the engine drives any [`FrameGenerator`], so the
//! ambient marquee and the fault pulse share their timing code.

mod pulse;
mod rotate;

pub use pulse::PulseEffect;
pub use rotate::RotateEffect;

use embassy_time::Duration;

use crate::frame::PixelBuffer;

/// Trait for frame generators
///
/// A generator maps a step index to a frame; it keeps no state between
/// frames, so replaying a step always draws the same picture.
pub trait FrameGenerator<const N: usize> {
    /// Number of frames in one run of the animation
    fn frame_count(&self) -> usize;

    /// Time each frame stays on the ring
    fn frame_period(&self) -> Duration;

    /// Draw frame `step` (in `0..frame_count()`) into `frame`
    fn render(&self, step: usize, frame: &mut PixelBuffer<N>);
}

/// Effect slot - enum containing all generators the engine plays
///
/// Using an enum instead of trait objects allows:
/// - Zero heap allocations
/// - Known size at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSlot {
    /// Lit segment walking around the ring
    Rotate(RotateEffect),
    /// Whole ring breathing up and down
    Pulse(PulseEffect),
}

impl<const N: usize> FrameGenerator<N> for EffectSlot {
    fn frame_count(&self) -> usize {
        match self {
            Self::Rotate(effect) => FrameGenerator::<N>::frame_count(effect),
            Self::Pulse(effect) => FrameGenerator::<N>::frame_count(effect),
        }
    }

    fn frame_period(&self) -> Duration {
        match self {
            Self::Rotate(effect) => FrameGenerator::<N>::frame_period(effect),
            Self::Pulse(effect) => FrameGenerator::<N>::frame_period(effect),
        }
    }

    fn render(&self, step: usize, frame: &mut PixelBuffer<N>) {
        match self {
            Self::Rotate(effect) => effect.render(step, frame),
            Self::Pulse(effect) => effect.render(step, frame),
        }
    }
}
