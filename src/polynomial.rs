use std::fmt;

use k256::{elliptic_curve::Field, Scalar};
use rand::{CryptoRng, RngCore};
use tracing::{debug, error};

use crate::{
    errors::{Result, ShamirError},
    share::{Share, ShareIndex},
};

/// `a0 + a1*x + ... + a_{k-1}*x^{k-1}` over the secp256k1 scalar field.
/// `size` coefficients means `size` shares are needed to recover `a0`.
#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<Scalar>,
}

impl Polynomial {
    /// Sample a polynomial with `size` coefficients. When `fixed_constant` is
    /// given it becomes `a0`, every other coefficient is drawn from `rng`.
    pub fn generate<R: RngCore + CryptoRng>(
        size: usize,
        fixed_constant: Option<Scalar>,
        rng: &mut R,
    ) -> Result<Self> {
        if size == 0 {
            error!("Refusing to generate a polynomial with no coefficients");
            return Err(ShamirError::EmptyPolynomial);
        }

        let mut coefficients = Vec::with_capacity(size);
        coefficients.push(fixed_constant.unwrap_or_else(|| Scalar::random(&mut *rng)));
        for _ in 1..size {
            coefficients.push(Scalar::random(&mut *rng));
        }
        debug!(size, fixed = fixed_constant.is_some(), "generated sharing polynomial");

        Ok(Polynomial { coefficients })
    }

    pub fn from_coefficients(coefficients: Vec<Scalar>) -> Result<Self> {
        if coefficients.is_empty() {
            error!("Polynomial needs at least one coefficient");
            return Err(ShamirError::EmptyPolynomial);
        }
        Ok(Polynomial { coefficients })
    }

    pub fn coefficients(&self) -> &[Scalar] {
        &self.coefficients
    }

    /// Number of coefficients, which is also the reconstruction threshold.
    pub fn size(&self) -> usize {
        self.coefficients.len()
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn constant_term(&self) -> &Scalar {
        &self.coefficients[0]
    }

    /// `sum_i a_i * x^i mod n`.
    pub fn evaluate_at(&self, x: &Scalar) -> Scalar {
        let mut result = Scalar::ZERO;
        let mut x_pow_i = Scalar::ONE;

        for coefficient in &self.coefficients {
            result += coefficient * &x_pow_i;
            x_pow_i *= x;
        }

        result
    }

    pub fn evaluate(&self, index: ShareIndex) -> Scalar {
        self.evaluate_at(&index.to_scalar())
    }

    pub fn share(&self, index: ShareIndex) -> Share {
        Share::new(index, self.evaluate(index))
    }

    /// Shares for participants `1..=count`.
    pub fn shares(&self, count: u32) -> Vec<Share> {
        ShareIndex::range(count).map(|i| self.share(i)).collect()
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("size", &self.coefficients.len())
            .field("coefficients", &"[redacted]")
            .finish()
    }
}

pub fn generate_polynomial<R: RngCore + CryptoRng>(
    size: usize,
    fixed_constant: Option<Scalar>,
    rng: &mut R,
) -> Result<Polynomial> {
    Polynomial::generate(size, fixed_constant, rng)
}

pub fn evaluate_share(polynomial: &Polynomial, index: ShareIndex) -> Scalar {
    polynomial.evaluate(index)
}
