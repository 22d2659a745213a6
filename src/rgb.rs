//! Model a color with the RGB notation in the sRGB color space.

use crate::color::Component;

tinct_macros::gen_model! {
    /// A color specified with the RGB notation in the sRGB color space.
    ///
    /// Channels are integral-valued after any parse or conversion. They are
    /// not clamped to `[0, 255]`; out-of-range input propagates unchanged.
    pub struct Rgb {
        /// The red channel of the color.
        pub red: Component,
        /// The green channel of the color.
        pub green: Component,
        /// The blue channel of the color.
        pub blue: Component,
    }
}

impl Rgb {
    /// The zero value that unrecognized input coerces to.
    pub const BLACK: Rgb = Rgb {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };
}
