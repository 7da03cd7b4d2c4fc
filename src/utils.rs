//! Conversions between curve scalars and arbitrary-precision integers.

use k256::{elliptic_curve::PrimeField, FieldBytes, Scalar};
use num_bigint::BigUint;
use tracing::error;

use crate::{
    context::curve_order,
    errors::{Result, ShamirError},
};

const SCALAR_BYTES: usize = 32;

/// Convert a big integer into a [`Scalar`]. Values outside `[0, n)` are
/// rejected rather than silently reduced.
pub fn scalar_from_biguint(value: &BigUint) -> Result<Scalar> {
    if value >= curve_order() {
        error!("Integer is not a canonical residue modulo the group order");
        return Err(ShamirError::NonCanonicalScalar);
    }
    let bytes = value.to_bytes_be();
    let mut repr = FieldBytes::default();
    repr[SCALAR_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Option::<Scalar>::from(Scalar::from_repr(repr)).ok_or_else(|| {
        error!("Failed to convert BigUint into k256::Scalar");
        ShamirError::NonCanonicalScalar
    })
}

/// Convert a big integer into a [`Scalar`], reducing it modulo `n` first.
pub fn scalar_from_biguint_reduced(value: &BigUint) -> Result<Scalar> {
    scalar_from_biguint(&(value % curve_order()))
}

pub fn scalar_to_biguint(value: &Scalar) -> BigUint {
    BigUint::from_bytes_be(&value.to_bytes())
}

////////////////////////////
// Test Utility Functions //
////////////////////////////
