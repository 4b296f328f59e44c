/// Scale an 8-bit value by the ratio `num / den`.
///
/// Uses integer math for efficiency on embedded systems. The result is
/// truncated toward zero, `num` is clamped to `den`, and a zero `den`
/// yields zero.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn scale_ratio(value: u8, num: u16, den: u16) -> u8 {
    if den == 0 {
        return 0;
    }
    let num = u32::from(num.min(den));
    ((u32::from(value) * num) / u32::from(den)) as u8
}

/// Triangle wave over `0..=peak`: rises for `peak + 1` steps, then falls for
/// `peak + 1` steps back to zero.
///
/// Steps past the end of the wave return zero.
#[inline]
pub fn triangle(step: usize, peak: usize) -> usize {
    let rising = peak + 1;
    if step < rising {
        step
    } else if step < 2 * rising {
        2 * rising - 1 - step
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_ratio_truncates() {
        assert_eq!(scale_ratio(75, 1, 50), 1);
        assert_eq!(scale_ratio(75, 49, 50), 73);
        assert_eq!(scale_ratio(255, 50, 50), 255);
    }

    #[test]
    fn triangle_rises_then_falls() {
        assert_eq!(triangle(0, 50), 0);
        assert_eq!(triangle(50, 50), 50);
        assert_eq!(triangle(51, 50), 50);
        assert_eq!(triangle(101, 50), 0);
        assert_eq!(triangle(102, 50), 0);
    }
}
