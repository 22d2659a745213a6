//! Contrast inversion used to pick a readable counterpart for any color.

use crate::color::ColorInput;
use crate::convert::to_hsl;
use crate::Hsl;

/// Replace lightness with a stepped opposite guaranteed to contrast with
/// the input, leaving hue and saturation untouched.
///
/// The steps pair dark with medium-bright and medium-dark with bright, so
/// the result never lands near the original lightness:
/// `l <= 25 -> 75`, `l <= 50 -> 90`, `l <= 75 -> 10`, otherwise `25`.
///
/// ```rust
/// use tinct::{invert_hsl, Hsl};
/// assert_eq!(invert_hsl(Hsl::new(210.0, 65.0, 13.0)).lightness, 75.0);
/// ```
pub fn invert_hsl<'a>(input: impl Into<ColorInput<'a>>) -> Hsl {
    let hsl = to_hsl(input);

    let lightness = if hsl.lightness <= 25.0 {
        75.0
    } else if hsl.lightness <= 50.0 {
        90.0
    } else if hsl.lightness <= 75.0 {
        10.0
    } else {
        25.0
    };

    Hsl::new(hsl.hue, hsl.saturation, lightness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightness_steps_through_the_four_buckets() {
        assert_eq!(invert_hsl(Hsl::new(0.0, 0.0, 10.0)).lightness, 75.0);
        assert_eq!(invert_hsl(Hsl::new(0.0, 0.0, 40.0)).lightness, 90.0);
        assert_eq!(invert_hsl(Hsl::new(0.0, 0.0, 60.0)).lightness, 10.0);
        assert_eq!(invert_hsl(Hsl::new(0.0, 0.0, 90.0)).lightness, 25.0);
    }

    #[test]
    fn bucket_boundaries_are_inclusive() {
        assert_eq!(invert_hsl(Hsl::new(0.0, 0.0, 25.0)).lightness, 75.0);
        assert_eq!(invert_hsl(Hsl::new(0.0, 0.0, 50.0)).lightness, 90.0);
        assert_eq!(invert_hsl(Hsl::new(0.0, 0.0, 75.0)).lightness, 10.0);
    }

    #[test]
    fn hue_and_saturation_are_untouched() {
        let inverted = invert_hsl(Hsl::new(210.0, 65.0, 13.0));
        assert_eq!(inverted.hue, 210.0);
        assert_eq!(inverted.saturation, 65.0);
    }

    #[test]
    fn input_is_coerced_before_inversion() {
        // Black text comes back medium-bright.
        assert_eq!(invert_hsl("#000000").lightness, 75.0);
        // Unparseable input inverts the zero value.
        assert_eq!(invert_hsl("not-a-color"), Hsl::new(0.0, 0.0, 75.0));
    }
}
