//! Color type and the fixed palette of the ring

use smart_leds::RGB8;

use crate::math8::scale_ratio;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Marquee color shown while no controller is attached
pub const AMBIENT_RED: Rgb = Rgb { r: 75, g: 0, b: 0 };

/// First fault accent (dim white)
pub const FAULT_WHITE: Rgb = Rgb { r: 75, g: 75, b: 75 };

/// Second fault accent (dim red)
pub const FAULT_RED: Rgb = Rgb { r: 75, g: 0, b: 0 };

/// Scale every channel of `color` by `level / max`.
///
/// `level` is clamped to `max`; a zero `max` yields black.
#[inline]
pub fn dim(color: Rgb, level: u16, max: u16) -> Rgb {
    Rgb {
        r: scale_ratio(color.r, level, max),
        g: scale_ratio(color.g, level, max),
        b: scale_ratio(color.b, level, max),
    }
}
