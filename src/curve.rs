//! secp256k1 group elements

use std::{iter::Sum, ops::Add};

use k256::{
    elliptic_curve::{
        group::Group,
        ops::Reduce,
        sec1::{FromEncodedPoint, ToEncodedPoint},
    },
    AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar, U256,
};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use tracing::error;

use crate::errors::{Result, ShamirError};

/// A point on secp256k1. Shares moved "into the exponent" are carried as
/// `GroupElement`s so that interpolation never touches the raw scalars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupElement(pub(crate) ProjectivePoint);

impl GroupElement {
    pub const GENERATOR: Self = GroupElement(ProjectivePoint::GENERATOR);
    /// The neutral element, used to start an aggregation.
    pub const IDENTITY: Self = GroupElement(ProjectivePoint::IDENTITY);

    pub fn generator() -> Self {
        Self::GENERATOR
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// `g^k` for the curve generator `g`.
    pub fn scale_generator(k: &Scalar) -> Self {
        GroupElement(ProjectivePoint::GENERATOR * k)
    }

    pub fn mul(&self, k: &Scalar) -> Self {
        GroupElement(self.0 * k)
    }

    pub fn is_identity(&self) -> bool {
        bool::from(self.0.is_identity())
    }

    pub fn to_affine(&self) -> AffinePoint {
        self.0.to_affine()
    }

    pub fn as_projective(&self) -> &ProjectivePoint {
        &self.0
    }

    /// Parse a SEC1 encoded point (compressed, uncompressed or identity).
    /// Anything that is not on the curve is rejected.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| {
            error!("Failed to parse bytes as a SEC1 encoded point");
            ShamirError::InvalidPoint
        })?;
        let point: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
        match point {
            Some(point) => Ok(GroupElement(point.into())),
            None => {
                error!("SEC1 encoding does not describe a point on secp256k1");
                Err(ShamirError::InvalidPoint)
            }
        }
    }

    pub fn to_sec1_bytes(&self, compressed: bool) -> Vec<u8> {
        self.0
            .to_affine()
            .to_encoded_point(compressed)
            .as_bytes()
            .to_vec()
    }

    /// Big-endian affine X coordinate.
    pub fn x_affine(&self) -> Result<FieldBytes> {
        let encoded = self.0.to_affine().to_encoded_point(false);
        encoded.x().copied().ok_or(ShamirError::IdentityPoint)
    }

    /// Big-endian affine Y coordinate.
    pub fn y_affine(&self) -> Result<FieldBytes> {
        let encoded = self.0.to_affine().to_encoded_point(false);
        encoded.y().copied().ok_or(ShamirError::IdentityPoint)
    }

    /// The affine X coordinate reduced modulo the group order. This is the
    /// `r` component of an ECDSA signature when the point is `g^k`.
    pub fn x_coordinate(&self) -> Result<Scalar> {
        let x = self.x_affine().map_err(|e| {
            error!("Unable to compute x-projection of the identity point");
            e
        })?;
        Ok(<Scalar as Reduce<U256>>::reduce_bytes(&x))
    }
}

impl Add for GroupElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        GroupElement(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a GroupElement> for GroupElement {
    type Output = Self;

    fn add(self, rhs: &'a GroupElement) -> Self::Output {
        GroupElement(self.0 + rhs.0)
    }
}

impl Sum for GroupElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(GroupElement::IDENTITY, Add::add)
    }
}

impl<'a> Sum<&'a GroupElement> for GroupElement {
    fn sum<I: Iterator<Item = &'a GroupElement>>(iter: I) -> Self {
        iter.fold(GroupElement::IDENTITY, |acc, p| acc + p)
    }
}

impl From<ProjectivePoint> for GroupElement {
    fn from(p: ProjectivePoint) -> Self {
        GroupElement(p)
    }
}

impl From<AffinePoint> for GroupElement {
    fn from(p: AffinePoint) -> Self {
        GroupElement(p.into())
    }
}

impl From<GroupElement> for ProjectivePoint {
    fn from(p: GroupElement) -> Self {
        p.0
    }
}

impl Serialize for GroupElement {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.to_sec1_bytes(true))
    }
}

impl<'de> Deserialize<'de> for GroupElement {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        GroupElement::from_sec1_bytes(&bytes).map_err(D::Error::custom)
    }
}
