//! Whole-ring brightness pulse

use embassy_time::Duration;

use super::FrameGenerator;
use crate::color::{Rgb, dim};
use crate::frame::PixelBuffer;
use crate::math8::triangle;

/// Every pixel ramps linearly from off to `color` over `steps + 1` frames,
/// then back down over another `steps + 1` frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseEffect {
    color: Rgb,
    steps: u16,
    period: Duration,
}

impl PulseEffect {
    pub const fn new(color: Rgb, steps: u16, period: Duration) -> Self {
        Self {
            color,
            steps,
            period,
        }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Color shown at `step`
    #[allow(clippy::cast_possible_truncation)]
    pub fn color_at(&self, step: usize) -> Rgb {
        let level = triangle(step, usize::from(self.steps));
        dim(self.color, level as u16, self.steps)
    }
}

impl<const N: usize> FrameGenerator<N> for PulseEffect {
    fn frame_count(&self) -> usize {
        2 * (usize::from(self.steps) + 1)
    }

    fn frame_period(&self) -> Duration {
        self.period
    }

    fn render(&self, step: usize, frame: &mut PixelBuffer<N>) {
        frame.fill(self.color_at(step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BLACK;

    const WHITE: Rgb = Rgb {
        r: 75,
        g: 75,
        b: 75,
    };

    fn pulse() -> PulseEffect {
        PulseEffect::new(WHITE, 50, Duration::from_millis(20))
    }

    #[test]
    fn ramps_up_and_down_in_51_steps_each() {
        let pulse = pulse();
        assert_eq!(FrameGenerator::<24>::frame_count(&pulse), 102);
        assert_eq!(pulse.color_at(0), BLACK);
        assert_eq!(pulse.color_at(50), WHITE);
        assert_eq!(pulse.color_at(51), WHITE);
        assert_eq!(pulse.color_at(101), BLACK);
    }

    #[test]
    fn brightness_is_monotonic_on_each_side() {
        let pulse = pulse();
        for step in 1..=50 {
            assert!(pulse.color_at(step).r >= pulse.color_at(step - 1).r);
        }
        for step in 52..102 {
            assert!(pulse.color_at(step).r <= pulse.color_at(step - 1).r);
        }
    }

    #[test]
    fn fills_every_pixel() {
        let mut frame = PixelBuffer::<24>::new();
        pulse().render(25, &mut frame);
        assert!(frame.iter().all(|pixel| *pixel == Rgb::new(37, 37, 37)));
    }
}
