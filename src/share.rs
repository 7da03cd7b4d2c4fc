use std::fmt;

use k256::Scalar;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    curve::GroupElement,
    errors::{Result, ShamirError},
};

/// Position of a participant on the sharing polynomial. Always non-zero:
/// evaluating at zero would hand out the secret itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ShareIndex(u32);

impl ShareIndex {
    pub fn new(index: u32) -> Result<Self> {
        if index == 0 {
            error!("Share index 0 would expose the shared secret");
            return Err(ShamirError::ZeroIndex(0));
        }
        Ok(ShareIndex(index))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn to_scalar(&self) -> Scalar {
        Scalar::from(self.0)
    }

    /// Indices `1..=count`.
    pub fn range(count: u32) -> impl Iterator<Item = ShareIndex> {
        (1..=count).map(ShareIndex)
    }
}

impl TryFrom<u32> for ShareIndex {
    type Error = ShamirError;

    fn try_from(index: u32) -> Result<Self> {
        ShareIndex::new(index)
    }
}

impl From<ShareIndex> for u32 {
    fn from(index: ShareIndex) -> u32 {
        index.0
    }
}

impl From<ShareIndex> for Scalar {
    fn from(index: ShareIndex) -> Scalar {
        index.to_scalar()
    }
}

impl fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant's evaluation `p(index)` of a sharing polynomial.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    index: ShareIndex,
    value: Scalar,
}

impl Share {
    pub fn new(index: ShareIndex, value: Scalar) -> Self {
        Share { index, value }
    }

    pub fn index(&self) -> ShareIndex {
        self.index
    }

    pub fn value(&self) -> &Scalar {
        &self.value
    }

    /// `g^value`, the share moved into the exponent.
    pub fn exponentiate(&self) -> GroupElement {
        GroupElement::scale_generator(&self.value)
    }
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("index", &self.index)
            .field("value", &"[redacted]")
            .finish()
    }
}
