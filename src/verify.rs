use k256::{
    ecdsa::{signature::hazmat::PrehashVerifier, Signature, VerifyingKey},
    elliptic_curve::{ops::Reduce, scalar::IsHigh},
    Scalar, U256,
};
use sha2::{Digest, Sha256};
use tracing::error;

use crate::{
    curve::GroupElement,
    errors::{Result, ShamirError},
};

/// SHA-256 of `message`, reduced into the scalar field.
pub fn hash_message(message: &[u8]) -> Scalar {
    let digest = Sha256::digest(message);
    <Scalar as Reduce<U256>>::reduce_bytes(&digest)
}

/// Standard ECDSA verification of `(r, s)` over the already hashed message
/// `prehash`. A signature assembled from shares may come out with a high `s`;
/// it is normalized before checking.
pub fn verify_signature(
    public_key: &GroupElement,
    prehash: &Scalar,
    r: &Scalar,
    s: &Scalar,
) -> Result<()> {
    let s = if bool::from(s.is_high()) { -*s } else { *s };

    let signature = Signature::from_scalars(r.to_bytes(), s.to_bytes()).map_err(|e| {
        error!("Failed to assemble ECDSA signature from (r, s): {e:?}");
        ShamirError::InvalidSignature
    })?;
    let verifying_key = VerifyingKey::from_affine(public_key.to_affine()).map_err(|e| {
        error!("Public key is not a valid verifying key: {e:?}");
        ShamirError::InvalidPoint
    })?;

    verifying_key
        .verify_prehash(&prehash.to_bytes(), &signature)
        .map_err(|_| {
            error!("ECDSA verification failed");
            ShamirError::InvalidSignature
        })
}
