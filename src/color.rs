//! Generic component storage shared by both color notations, and the
//! [`ColorInput`] value that every coercion function accepts.

use crate::{Hsl, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// Any value accepted by the coercion functions: a structured color of
/// either kind, or raw text yet to be matched against the supported
/// grammars.
///
/// The variant is the kind tag. Raw text that matches none of the grammars
/// coerces to the zero value of whichever kind the caller asked for.
#[derive(Clone, Copy, Debug)]
pub enum ColorInput<'a> {
    /// A color already carrying the RGB kind.
    Rgb(Rgb),
    /// A color already carrying the HSL kind.
    Hsl(Hsl),
    /// Unparsed text in one of the supported grammars.
    Raw(&'a str),
}

impl From<Rgb> for ColorInput<'_> {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<&Rgb> for ColorInput<'_> {
    fn from(value: &Rgb) -> Self {
        Self::Rgb(*value)
    }
}

impl From<Hsl> for ColorInput<'_> {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

impl From<&Hsl> for ColorInput<'_> {
    fn from(value: &Hsl) -> Self {
        Self::Hsl(*value)
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Raw(value)
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Raw(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_map_applies_to_each_component() {
        let doubled = Components(1.0, 2.0, 3.0).map(|c| c * 2.0);
        assert_eq!(doubled, Components(2.0, 4.0, 6.0));
    }

    #[test]
    fn inputs_carry_their_kind() {
        assert!(matches!(
            ColorInput::from(Rgb::new(1.0, 2.0, 3.0)),
            ColorInput::Rgb(_)
        ));
        assert!(matches!(
            ColorInput::from(Hsl::new(1.0, 2.0, 3.0)),
            ColorInput::Hsl(_)
        ));
        assert!(matches!(ColorInput::from("#ffffff"), ColorInput::Raw(_)));

        let owned = String::from("rgb(1, 2, 3)");
        assert!(matches!(ColorInput::from(&owned), ColorInput::Raw(_)));
    }
}
