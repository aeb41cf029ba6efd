//! Strongly typed unit helpers and quantity abstractions.

use std::fmt;
use std::marker::PhantomData;

use crate::math::Scalar;

/// Marker trait for physical units carried by [`Quantity`].
pub trait Unit {
    /// Display symbol, e.g. `"Ω"`.
    const SYMBOL: &'static str;
}

/// Volts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volt;
impl Unit for Volt {
    const SYMBOL: &'static str = "V";
}

/// Amperes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ampere;
impl Unit for Ampere {
    const SYMBOL: &'static str = "A";
}

/// Ohms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ohm;
impl Unit for Ohm {
    const SYMBOL: &'static str = "Ω";
}

/// Farads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Farad;
impl Unit for Farad {
    const SYMBOL: &'static str = "F";
}

/// Henries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Henry;
impl Unit for Henry {
    const SYMBOL: &'static str = "H";
}

/// Scalar magnitude tagged with a unit marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<S, U: Unit> {
    value: S,
    _unit: PhantomData<U>,
}

impl<S, U: Unit> Quantity<S, U> {
    /// Wraps a raw magnitude.
    #[must_use]
    pub const fn new(value: S) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }
}

impl<S: Copy, U: Unit> Quantity<S, U> {
    /// Returns the raw magnitude.
    #[must_use]
    pub fn value(&self) -> S {
        self.value
    }
}

impl<U: Unit> fmt::Display for Quantity<Scalar, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, U::SYMBOL)
    }
}

/// Voltage magnitude in volts.
pub type Voltage<S> = Quantity<S, Volt>;
/// Current magnitude in amperes.
pub type Current<S> = Quantity<S, Ampere>;
/// Impedance magnitude in ohms.
pub type Impedance<S> = Quantity<S, Ohm>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_roundtrips_value() {
        let r: Impedance<Scalar> = Impedance::new(50.0);
        assert_eq!(r.value(), 50.0);
    }

    #[test]
    fn display_appends_symbol() {
        let u: Voltage<Scalar> = Voltage::new(12.0);
        assert_eq!(u.to_string(), "12 V");
    }
}
