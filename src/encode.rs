//! Render colors as the CSS functional syntax.

use std::fmt;

use crate::color::ColorInput;
use crate::convert::{to_hsl, to_rgb};
use crate::{Hsl, Rgb};

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Coerce any input to RGB and render it as `rgb(R, G, B)`.
pub fn encode_rgb<'a>(input: impl Into<ColorInput<'a>>) -> String {
    to_rgb(input).to_string()
}

/// Coerce any input to HSL and render it as `hsl(H, S%, L%)`.
pub fn encode_hsl<'a>(input: impl Into<ColorInput<'a>>) -> String {
    to_hsl(input).to_string()
}
