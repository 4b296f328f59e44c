//! LED strip abstraction layer
//!
//! Provides a trait-based abstraction for the physical ring,
//! allowing the render engine to be hardware-agnostic.

use crate::color::Rgb;

/// Abstract LED strip sink
///
/// Implement this trait to support different hardware platforms.
/// Writes are buffered by the sink and only become visible on
/// [`StripSink::refresh`]. The engine bounds-checks every index before
/// calling [`StripSink::set_pixel`].
pub trait StripSink {
    /// Stage one pixel color
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Push staged colors to the hardware
    ///
    /// Failures are the sink's to report or suppress.
    fn refresh(&mut self);
}

impl<S: StripSink + ?Sized> StripSink for &mut S {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        (**self).set_pixel(index, color);
    }

    fn refresh(&mut self) {
        (**self).refresh();
    }
}
