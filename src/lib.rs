//! Shamir secret sharing over the secp256k1 scalar field, with Lagrange
//! reconstruction both of scalars and "in the exponent" on curve points.
//! These are the arithmetic building blocks of threshold ECDSA.

pub mod context;
pub mod curve;
pub mod errors;
pub mod keypair;
pub mod lagrange;
pub mod polynomial;
pub mod share;
pub mod sharing;
pub mod utils;
pub mod verify;

pub use context::*;
pub use curve::*;
pub use errors::*;
pub use keypair::*;
pub use lagrange::*;
pub use polynomial::*;
pub use share::*;
pub use sharing::*;
pub use utils::{scalar_from_biguint, scalar_from_biguint_reduced, scalar_to_biguint};
pub use verify::*;

pub use k256::Scalar;
