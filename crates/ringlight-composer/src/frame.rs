//! Pixel buffer owned by the render task

use core::ops::Index;

use crate::color::{BLACK, Rgb};
use crate::command::{Command, PixelTarget, PixelUpdate};

/// Fixed-size ordered sequence of colors mirroring the physical ring.
///
/// Length is fixed at compile time; writes to out-of-range indices are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgb; N],
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a buffer with every pixel off
    pub const fn new() -> Self {
        Self { pixels: [BLACK; N] }
    }

    /// Number of pixels in the ring
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    /// Set one pixel; returns `false` (and changes nothing) when `index`
    /// is out of range.
    pub fn set(&mut self, index: usize, color: Rgb) -> bool {
        match self.pixels.get_mut(index) {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels = [color; N];
    }

    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    pub fn as_array(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rgb> {
        self.pixels.iter()
    }

    /// Apply a single update; returns whether it touched the buffer.
    pub fn apply_update(&mut self, update: &PixelUpdate) -> bool {
        match update.target() {
            Some(PixelTarget::All) => {
                self.fill(update.color);
                true
            }
            Some(PixelTarget::Index(index)) => self.set(index, update.color),
            None => false,
        }
    }

    /// Apply every update of `command` in order.
    ///
    /// Updates addressing a pixel outside the ring are skipped without
    /// stopping the rest. Returns the number of updates that were applied.
    pub fn apply(&mut self, command: &Command) -> usize {
        let mut applied = 0;
        for update in command.iter() {
            if self.apply_update(update) {
                applied += 1;
            } else {
                log::debug!("engine: ignoring update for pixel id {}", update.id);
            }
        }
        applied
    }
}

impl<const N: usize> Index<usize> for PixelBuffer<N> {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.pixels[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    fn command(updates: &[PixelUpdate]) -> Command {
        let mut command = Command::new();
        for update in updates {
            command.push(*update).unwrap();
        }
        command
    }

    #[test]
    fn distinct_updates_land_on_their_pixels() {
        let mut frame = PixelBuffer::<24>::new();
        let applied = frame.apply(&command(&[
            PixelUpdate::new(0, RED),
            PixelUpdate::new(5, BLUE),
            PixelUpdate::new(23, RED),
        ]));

        assert_eq!(applied, 3);
        for (index, pixel) in frame.iter().enumerate() {
            let expected = match index {
                0 | 23 => RED,
                5 => BLUE,
                _ => BLACK,
            };
            assert_eq!(*pixel, expected, "pixel {index}");
        }
    }

    #[test]
    fn out_of_range_update_does_not_stop_the_rest() {
        let mut frame = PixelBuffer::<4>::new();
        let applied = frame.apply(&command(&[
            PixelUpdate::new(4, RED),
            PixelUpdate::new(-7, RED),
            PixelUpdate::new(1, BLUE),
        ]));

        assert_eq!(applied, 1);
        assert_eq!(frame.as_array(), &[BLACK, BLUE, BLACK, BLACK]);
    }

    #[test]
    fn later_update_wins_on_same_pixel() {
        let mut frame = PixelBuffer::<4>::new();
        frame.apply(&command(&[PixelUpdate::new(2, RED), PixelUpdate::new(2, BLUE)]));
        assert_eq!(frame[2], BLUE);
    }

    #[test]
    fn set_reports_bounds() {
        let mut frame = PixelBuffer::<2>::new();
        assert!(frame.set(1, RED));
        assert!(!frame.set(2, RED));
        assert_eq!(frame.get(2), None);
    }
}
