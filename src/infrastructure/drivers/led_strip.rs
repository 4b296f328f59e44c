use ringlight_composer::{Rgb, StripSink, color::BLACK};
use smart_leds::SmartLedsWrite;

/// [`StripSink`] over any `smart-leds` writer
///
/// Keeps a shadow frame; `set_pixel` only touches the shadow, `refresh`
/// streams all of it to the strip.
pub struct SmartLedsSink<W, const N: usize>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    writer: W,
    frame: [Rgb; N],
}

impl<W, const N: usize> SmartLedsSink<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [BLACK; N],
        }
    }

    /// Turn every pixel off and latch immediately
    pub fn clear(&mut self) {
        self.frame = [BLACK; N];
        self.refresh();
    }

    pub fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> StripSink for SmartLedsSink<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    fn refresh(&mut self) {
        if self.writer.write(self.frame.iter().copied()).is_err() {
            log::warn!("strip: refresh failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Capture {
        writes: Vec<Vec<Rgb>>,
        fail: bool,
    }

    impl SmartLedsWrite for Capture {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.writes.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn refresh_streams_shadow_frame() {
        let mut sink = SmartLedsSink::<_, 3>::new(Capture {
            writes: Vec::new(),
            fail: false,
        });
        sink.set_pixel(1, Rgb::new(1, 2, 3));
        sink.set_pixel(7, Rgb::new(9, 9, 9));
        assert!(sink.writer().writes.is_empty());

        sink.refresh();
        sink.clear();

        let writes = &sink.writer().writes;
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0], vec![BLACK, Rgb::new(1, 2, 3), BLACK]);
        assert_eq!(writes[1], vec![BLACK; 3]);
    }

    #[test]
    fn refresh_failure_is_suppressed() {
        let mut sink = SmartLedsSink::<_, 2>::new(Capture {
            writes: Vec::new(),
            fail: true,
        });
        sink.set_pixel(0, Rgb::new(5, 5, 5));
        sink.refresh();
        assert_eq!(sink.frame()[0], Rgb::new(5, 5, 5));
    }
}
