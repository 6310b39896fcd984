//! DISCLAIMER: Toy curve parameter generation, for demonstration and educational purposes
//! only. Random curves are checked for non-singularity and nothing else: no point counting,
//! no twist security, no checks against known-weak classes.
//!
//! # Overview
//! A `Curve` holds the domain `(p, a, b)` of `y^2 = x^3 + a*x + b (mod p)`. Curves are
//! immutable once built and every constructor enforces `4a^3 + 27b^2 != 0 (mod p)`.

use log::debug;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use super::elliptic::{mod_add, mod_mul, Point};
use super::sampling::{random_in_range, sample_until, SamplingConfig};
use crate::error::{Error, Result};

/// Domain parameters of a short Weierstrass curve over a prime field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    p: BigUint,
    a: BigUint,
    b: BigUint,
}

impl Curve {
    /// Build a curve from explicit parameters. `a` and `b` are reduced mod `p`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] when `p < 3` or the curve is singular.
    pub fn new(p: BigUint, a: BigUint, b: BigUint) -> Result<Self> {
        if p < BigUint::from(3u32) {
            return Err(Error::invalid_argument(
                "Curve::new",
                format!("field modulus must be at least 3, got {}", p),
            ));
        }
        let a = a % &p;
        let b = b % &p;
        let curve = Curve { p, a, b };
        if curve.discriminant().is_zero() {
            return Err(Error::invalid_argument(
                "Curve::new",
                format!("singular curve: 4a^3 + 27b^2 = 0 mod {}", curve.p),
            ));
        }
        Ok(curve)
    }

    /// The field modulus.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// `(4a^3 + 27b^2) mod p`; zero exactly when the curve is singular.
    pub fn discriminant(&self) -> BigUint {
        let a_cubed = self.a.modpow(&BigUint::from(3u32), &self.p);
        let b_squared = mod_mul(&self.b, &self.b, &self.p);
        mod_add(
            &mod_mul(&BigUint::from(4u32), &a_cubed, &self.p),
            &mod_mul(&BigUint::from(27u32), &b_squared, &self.p),
            &self.p,
        )
    }

    /// Right-hand side `x^3 + a*x + b (mod p)`.
    fn rhs(&self, x: &BigUint) -> BigUint {
        let x_cubed = x.modpow(&BigUint::from(3u32), &self.p);
        let ax = mod_mul(&self.a, x, &self.p);
        mod_add(&mod_add(&x_cubed, &ax, &self.p), &self.b, &self.p)
    }

    pub fn contains(&self, point: &Point) -> bool {
        is_on_curve(self, point)
    }
}

/// Draw `a, b` uniformly in `[0, p-1]` until the curve they define is non-singular.
pub fn random_curve<R>(p: &BigUint, rng: &mut R, config: &SamplingConfig) -> Result<Curve>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if *p < BigUint::from(3u32) {
        return Err(Error::invalid_argument(
            "random_curve",
            format!("field modulus must be at least 3, got {}", p),
        ));
    }
    let zero = BigUint::zero();
    let max = p - BigUint::one();
    let curve = sample_until("random_curve", config, || {
        let a = random_in_range(&zero, &max, rng)?;
        let b = random_in_range(&zero, &max, rng)?;
        let curve = Curve {
            p: p.clone(),
            a,
            b,
        };
        Ok((!curve.discriminant().is_zero()).then_some(curve))
    })?;
    debug!("chose curve y^2 = x^3 + {}x + {} over a {}-bit field", curve.a, curve.b, p.bits());
    Ok(curve)
}

/// Whether `point` satisfies the curve equation. The identity is always on the curve.
pub fn is_on_curve(curve: &Curve, point: &Point) -> bool {
    match point {
        Point::Infinity => true,
        Point::Affine { x, y } => mod_mul(y, y, &curve.p) == curve.rhs(x),
    }
}

/// Sample a uniformly random `x` until `x^3 + a*x + b` is a quadratic residue, then take
/// the root `y = rhs^((p+1)/4) mod p`.
///
/// # Errors
/// [`Error::InvalidArgument`] when `p % 4 != 3`, where that closed-form root does not hold.
pub fn random_curve_point<R>(curve: &Curve, rng: &mut R, config: &SamplingConfig) -> Result<Point>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let p = &curve.p;
    if p % 4u32 != BigUint::from(3u32) {
        return Err(Error::invalid_argument(
            "random_curve_point",
            format!("field modulus must be 3 mod 4, got {}", p),
        ));
    }
    let zero = BigUint::zero();
    let max = p - BigUint::one();
    // Euler's criterion exponent and square-root exponent.
    let euler = &max >> 1u32;
    let root = (p + BigUint::one()) >> 2u32;

    sample_until("random_curve_point", config, || {
        let x = random_in_range(&zero, &max, rng)?;
        let rhs = curve.rhs(&x);
        if rhs.modpow(&euler, p).is_one() {
            let y = rhs.modpow(&root, p);
            Ok(Some(Point::Affine { x, y }))
        } else {
            Ok(None)
        }
    })
}
