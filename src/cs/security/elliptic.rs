//! DISCLAIMER: This library is a **toy** example of elliptic curve arithmetic in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes. Absolutely DO NOT use it
//! for real cryptographic or security-sensitive operations. Nothing here runs in constant
//! time. If you need ECC in production, please use a vetted, well-reviewed library.

//! # Overview
//! Group law on a short-Weierstrass curve `y^2 = x^3 + a*x + b (mod p)`:
//! 1. A `Point` type representing a coordinate pair or `Infinity` as the identity.
//! 2. Point addition, doubling and negation.
//! 3. Double-and-add scalar multiplication.
//!
//! Inverses are taken with Fermat's little theorem, `x^(p-2) mod p`, so the modulus is
//! assumed to be prime.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use super::curve::Curve;

/// A point on the elliptic curve in short Weierstrass form (x, y) mod p,
/// plus a special "Infinity" variant for the identity element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity (identity).
    Infinity,
    /// An affine coordinate pair (x, y).
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    pub fn affine(x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        Point::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// The affine x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// The affine y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "O"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

/// Helper function for modular subtraction that avoids underflow
pub(crate) fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a_mod = a % m;
    let b_mod = b % m;
    if a_mod >= b_mod {
        a_mod - b_mod
    } else {
        m - (b_mod - a_mod)
    }
}

/// Helper function for modular addition
pub(crate) fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a % m + b % m) % m
}

/// Helper function for modular multiplication
pub(crate) fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a % m) * (b % m) % m
}

/// Modular inverse in a prime field: `x^(p-2) mod p`. Zero maps to zero.
fn mod_inv(x: &BigUint, p: &BigUint) -> BigUint {
    x.modpow(&(p - 2u32), p)
}

/// Point addition in short Weierstrass form:
/// - `Infinity` is the identity on either side
/// - equal x with differing y, or y == 0, means `Q == -P` => `Infinity`
/// - equal points use the tangent slope `(3x^2 + a) / 2y`, distinct points the chord slope
pub fn point_add(c: &Curve, p1: &Point, p2: &Point) -> Point {
    match (p1, p2) {
        (Point::Infinity, _) => p2.clone(),
        (_, Point::Infinity) => p1.clone(),
        (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
            let p = c.p();
            if x1 == x2 && (y1 != y2 || y1.is_zero()) {
                return Point::Infinity;
            }

            let slope = if p1 == p2 {
                // (3x^2 + a) / (2y)
                let x_squared = mod_mul(x1, x1, p);
                let numerator = mod_add(&mod_mul(&BigUint::from(3u32), &x_squared, p), c.a(), p);
                let two_y = mod_mul(&BigUint::from(2u32), y1, p);
                mod_mul(&numerator, &mod_inv(&two_y, p), p)
            } else {
                // (y2 - y1) / (x2 - x1)
                let dy = mod_sub(y2, y1, p);
                let dx = mod_sub(x2, x1, p);
                mod_mul(&dy, &mod_inv(&dx, p), p)
            };

            // x3 = slope^2 - x1 - x2
            let slope_squared = mod_mul(&slope, &slope, p);
            let x3 = mod_sub(&mod_sub(&slope_squared, x1, p), x2, p);

            // y3 = slope*(x1 - x3) - y1
            let x1_minus_x3 = mod_sub(x1, &x3, p);
            let y3 = mod_sub(&mod_mul(&slope, &x1_minus_x3, p), y1, p);

            Point::Affine { x: x3, y: y3 }
        }
    }
}

/// Point doubling, `P + P`.
pub fn point_double(c: &Curve, p: &Point) -> Point {
    point_add(c, p, p)
}

/// Point negation: `(x, y) -> (x, -y mod p)`.
pub fn point_neg(c: &Curve, p: &Point) -> Point {
    match p {
        Point::Infinity => Point::Infinity,
        Point::Affine { x, y } => Point::Affine {
            x: x.clone(),
            y: mod_sub(&BigUint::zero(), y, c.p()),
        },
    }
}

/// Scalar multiplication `k*P` by double-and-add over the bits of `k`, lowest first.
/// `k == 0` gives `Infinity`. Not optimized.
pub fn scalar_multiply(c: &Curve, k: &BigUint, p: &Point) -> Point {
    let mut result = Point::Infinity;
    let mut addend = p.clone();
    for i in 0..k.bits() {
        if k.bit(i) {
            result = point_add(c, &result, &addend);
        }
        addend = point_double(c, &addend);
    }
    result
}
