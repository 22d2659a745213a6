//! tinct parses, converts, inverts and encodes colors between the RGB and
//! HSL notations of the sRGB color space, accepting either structured
//! values or text in the CSS `rgb()`/`hsl()`/`#rrggbb` forms.
//!
//! No operation here can fail: text that matches none of the supported
//! grammars coerces to the zero value of the requested kind.

#![deny(missing_docs)]

mod color;
mod contrast;
mod convert;
mod encode;
mod hsl;
mod parse;
mod rgb;

#[cfg(test)]
mod test;

pub use color::{ColorInput, Component, Components};
pub use contrast::invert_hsl;
pub use convert::{hsl_to_rgb, rgb_to_hsl, to_hsl, to_rgb};
pub use encode::{encode_hsl, encode_rgb};
pub use hsl::Hsl;
pub use parse::is_valid_rgb;
pub use rgb::Rgb;
