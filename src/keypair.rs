use std::fmt;

use k256::{elliptic_curve::rand_core::OsRng, NonZeroScalar, Scalar};
use rand::{CryptoRng, RngCore};
use tracing::error;

use crate::{
    curve::GroupElement,
    errors::{Result, ShamirError},
};

/// A top-level secp256k1 key, for callers that need a whole key rather than
/// a share of one.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    secret: Scalar,
    public: GroupElement,
}

impl KeyPair {
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let secret = generate_private(rng);
        KeyPair {
            secret,
            public: get_public(&secret),
        }
    }

    pub fn from_secret(secret: Scalar) -> Result<Self> {
        if bool::from(secret.is_zero()) {
            error!("Private key must be non-zero");
            return Err(ShamirError::ZeroSecretKey);
        }
        Ok(KeyPair {
            secret,
            public: get_public(&secret),
        })
    }

    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    pub fn public(&self) -> &GroupElement {
        &self.public
    }

    /// Uncompressed SEC1 encoding, `04 || X || Y`.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.public.to_sec1_bytes(false)
    }
}

impl Default for KeyPair {
    fn default() -> Self {
        KeyPair::generate(&mut OsRng)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("secret", &"[redacted]")
            .field("public", &self.public)
            .finish()
    }
}

/// A uniformly random non-zero scalar.
pub fn generate_private<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    *NonZeroScalar::random(rng)
}

pub fn get_public(secret: &Scalar) -> GroupElement {
    GroupElement::scale_generator(secret)
}
