//! Coercions between the two color kinds and the textual forms.
//!
//! Every function accepts any [`ColorInput`] and never fails: text that
//! matches none of the grammars coerces to the zero value of the requested
//! kind. An input already carrying the requested kind is returned before
//! any other work, so repeated coercions are loss-free.

use crate::color::ColorInput;
use crate::{parse, Hsl, Rgb};

/// Coerce any input to an RGB-kind value.
///
/// Raw text is matched against the `rgb()` grammar, then `#rrggbb`, then
/// `hsl()`; anything else yields [`Rgb::BLACK`].
///
/// ```rust
/// use tinct::{to_rgb, Rgb};
/// assert_eq!(to_rgb("#0c2238"), Rgb::new(12.0, 34.0, 56.0));
/// assert_eq!(to_rgb("not-a-color"), Rgb::BLACK);
/// ```
pub fn to_rgb<'a>(input: impl Into<ColorInput<'a>>) -> Rgb {
    match input.into() {
        ColorInput::Rgb(rgb) => rgb,
        ColorInput::Hsl(hsl) => hsl_to_rgb(hsl),
        ColorInput::Raw(text) => {
            if let Some(rgb) = parse::parse_rgb(text) {
                rgb
            } else if let Some(rgb) = parse::parse_hex(text) {
                rgb
            } else if let Some(hsl) = parse::parse_hsl(text) {
                hsl_to_rgb(hsl)
            } else {
                Rgb::BLACK
            }
        }
    }
}

/// Coerce any input to an HSL-kind value.
///
/// Raw text is matched against the `hsl()` grammar first; `rgb()` and
/// `#rrggbb` text is parsed and converted; anything else yields
/// [`Hsl::ZERO`].
pub fn to_hsl<'a>(input: impl Into<ColorInput<'a>>) -> Hsl {
    match input.into() {
        ColorInput::Hsl(hsl) => hsl,
        ColorInput::Rgb(rgb) => rgb_to_hsl(rgb),
        ColorInput::Raw(text) => {
            if let Some(hsl) = parse::parse_hsl(text) {
                hsl
            } else if let Some(rgb) = parse::parse_rgb(text).or_else(|| parse::parse_hex(text)) {
                rgb_to_hsl(rgb)
            } else {
                Hsl::ZERO
            }
        }
    }
}

/// Convert any input to the RGB notation.
///
/// An input that is already RGB-kind is returned unchanged; anything else
/// is first coerced to HSL.
pub fn hsl_to_rgb<'a>(input: impl Into<ColorInput<'a>>) -> Rgb {
    let input = input.into();
    if let ColorInput::Rgb(rgb) = input {
        return rgb;
    }

    let hsl = to_hsl(input);
    util::hsl_to_rgb(&hsl.to_components()).into()
}

/// Convert any input to the HSL notation.
///
/// An input that is already HSL-kind is returned unchanged; anything else
/// is first coerced to RGB.
pub fn rgb_to_hsl<'a>(input: impl Into<ColorInput<'a>>) -> Hsl {
    let input = input.into();
    if let ColorInput::Hsl(hsl) = input {
        return hsl;
    }

    let rgb = to_rgb(input);
    util::rgb_to_hsl(&rgb.to_components()).into()
}

mod util {
    use crate::color::{Component, Components};

    /// Convert `(hue deg, saturation %, lightness %)` to whole `(r, g, b)`
    /// channels.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let saturation = from.1 / 100.0;
        let lightness = from.2 / 100.0;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let offset = lightness - chroma / 2.0;

        // A finite hue outside [0, 360) wraps back into range; the grammar
        // accepts values up to 999.
        let hue = if from.0.is_finite() {
            from.0.rem_euclid(360.0)
        } else {
            from.0
        };
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());

        let (red, green, blue) = if (0.0..60.0).contains(&hue) {
            (chroma, x, 0.0)
        } else if (60.0..120.0).contains(&hue) {
            (x, chroma, 0.0)
        } else if (120.0..180.0).contains(&hue) {
            (0.0, chroma, x)
        } else if (180.0..240.0).contains(&hue) {
            (0.0, x, chroma)
        } else if (240.0..300.0).contains(&hue) {
            (x, 0.0, chroma)
        } else if (300.0..360.0).contains(&hue) {
            (chroma, 0.0, x)
        } else {
            // A non-finite hue selects no sector.
            (0.0, 0.0, 0.0)
        };

        Components(red, green, blue).map(|channel| ((channel + offset) * 255.0).round())
    }

    /// Convert whole `(r, g, b)` channels to `(hue deg, saturation %,
    /// lightness %)` with a whole-degree hue and one-decimal percentages.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = from.map(|channel| channel / 255.0);

        let min = red.min(green).min(blue);
        let max = red.max(green).max(blue);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == red {
            ((green - blue) / delta) % 6.0
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };
        let hue = (hue * 60.0).round();
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        let lightness = (max + min) / 2.0;
        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Components(
            hue,
            to_tenth(saturation * 100.0),
            to_tenth(lightness * 100.0),
        )
    }

    /// Round a percentage to one decimal place.
    fn to_tenth(value: Component) -> Component {
        (value * 10.0).round() / 10.0
    }
}
