//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

tinct_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    ///
    /// Hue is in degrees, saturation and lightness in percent. Conversion
    /// from RGB rounds hue to a whole degree and saturation/lightness to one
    /// decimal place. None of the components are clamped; out-of-range input
    /// propagates unchanged.
    pub struct Hsl {
        /// The hue component of the color.
        pub hue: Component,
        /// The saturation component of the color.
        pub saturation: Component,
        /// The lightness component of the color.
        pub lightness: Component,
    }
}

impl Hsl {
    /// The zero value that unrecognized input coerces to.
    pub const ZERO: Hsl = Hsl {
        hue: 0.0,
        saturation: 0.0,
        lightness: 0.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Components;

    #[test]
    fn model_stores_components_in_order() {
        let hsl = Hsl::new(210.0, 65.0, 13.0);
        assert_eq!(hsl.hue, 210.0);
        assert_eq!(hsl.saturation, 65.0);
        assert_eq!(hsl.lightness, 13.0);
        assert_eq!(hsl.to_components(), Components(210.0, 65.0, 13.0));
        assert_eq!(Hsl::from(Components(210.0, 65.0, 13.0)), hsl);
    }

    #[test]
    fn zero_is_the_zero_value() {
        assert_eq!(Hsl::ZERO, Hsl::new(0.0, 0.0, 0.0));
    }
}
