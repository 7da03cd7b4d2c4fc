//! Curve constants shared by every sharing session.

use k256::Scalar;
use lazy_static::lazy_static;
use num_bigint::BigUint;

use crate::{curve::GroupElement, utils::scalar_to_biguint};

lazy_static! {
    static ref SECP256K1: CurveContext = CurveContext::build_secp256k1();
}

/// Read-only description of the discrete-log group the shares live in.
/// Built once per process and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveContext {
    /// Prime order `n` of the group; all scalar arithmetic is mod `n`.
    pub order: BigUint,
    pub generator: GroupElement,
    pub identity: GroupElement,
}

impl CurveContext {
    pub fn secp256k1() -> &'static CurveContext {
        &SECP256K1
    }

    fn build_secp256k1() -> Self {
        // -1 is the largest canonical residue, n - 1.
        let order = scalar_to_biguint(&-Scalar::ONE) + 1u32;
        CurveContext {
            order,
            generator: GroupElement::GENERATOR,
            identity: GroupElement::IDENTITY,
        }
    }
}

pub fn curve_order() -> &'static BigUint {
    &CurveContext::secp256k1().order
}

pub fn generator() -> GroupElement {
    CurveContext::secp256k1().generator
}

pub fn identity() -> GroupElement {
    CurveContext::secp256k1().identity
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Num;

    #[test]
    fn order_matches_secp256k1() {
        let expected = BigUint::from_str_radix(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
            16,
        )
        .unwrap();
        assert_eq!(curve_order(), &expected);
    }

    #[test]
    fn generator_and_identity() {
        assert_eq!(generator(), GroupElement::scale_generator(&Scalar::ONE));
        assert!(identity().is_identity());
        assert_eq!(generator() + identity(), generator());
    }

    #[test]
    fn context_is_shared() {
        assert!(std::ptr::eq(
            CurveContext::secp256k1(),
            CurveContext::secp256k1()
        ));
    }
}
