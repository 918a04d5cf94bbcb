//! Element capability traits
//!
//! Matrices store any element type. The algebra operations are gated on
//! these traits, each adding one capability on top of the previous one:
//!
//! - [`Additive`]: elementwise addition and subtraction
//! - [`Numeric`]: zero, one and multiplication (products, identity)
//! - [`SignedNumeric`]: negation (determinant, cofactor, adjugate)
//! - [`FloatingPoint`]: division (inverse)
//!
//! The first three are blanket-implemented; [`FloatingPoint`] is implemented
//! for `f32` and `f64` only, so integer division never reaches `inverse`.

use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{One, Zero};

/// Types that support addition and subtraction
pub trait Additive: Clone + Add<Output = Self> + Sub<Output = Self> {}

impl<T> Additive for T where T: Clone + Add<Output = T> + Sub<Output = T> {}

/// Types with additive and multiplicative identities and multiplication
pub trait Numeric: Additive + Mul<Output = Self> + Zero + One {}

impl<T> Numeric for T where T: Additive + Mul<Output = T> + Zero + One {}

/// Numeric types that can be negated
pub trait SignedNumeric: Numeric + Neg<Output = Self> {}

impl<T> SignedNumeric for T where T: Numeric + Neg<Output = T> {}

/// Floating-point element types
///
/// Division follows the type's own semantics, so dividing by zero yields
/// infinities or NaN rather than an error.
pub trait FloatingPoint: SignedNumeric + Div<Output = Self> + PartialOrd + Copy {
    /// Absolute value
    fn magnitude(self) -> Self {
        if self < Self::zero() {
            -self
        } else {
            self
        }
    }

    /// Whether two values differ by at most `epsilon`
    fn approx_eq(self, other: Self, epsilon: Self) -> bool {
        (self - other).magnitude() <= epsilon
    }
}

impl FloatingPoint for f32 {}

impl FloatingPoint for f64 {}
