use k256::Scalar;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    curve::GroupElement,
    errors::{Result, ShamirError},
    lagrange::{reconstruct_point, reconstruct_secret},
    polynomial::Polynomial,
    share::{Share, ShareIndex},
};

/// A `(threshold, share_count)` Shamir sharing: `threshold` of the
/// `share_count` shares recover the secret. Only constructible through
/// [`SharingParameters::new`], deserialization included.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawSharingParameters")]
pub struct SharingParameters {
    threshold: usize,
    share_count: usize,
}

/// Unvalidated wire form of [`SharingParameters`].
#[derive(Deserialize)]
struct RawSharingParameters {
    threshold: usize,
    share_count: usize,
}

impl TryFrom<RawSharingParameters> for SharingParameters {
    type Error = ShamirError;

    fn try_from(raw: RawSharingParameters) -> Result<Self> {
        SharingParameters::new(raw.threshold, raw.share_count)
    }
}

impl SharingParameters {
    pub fn new(threshold: usize, share_count: usize) -> Result<Self> {
        if threshold == 0 || threshold > share_count || u32::try_from(share_count).is_err() {
            error!(
                "Invalid sharing parameters: threshold {}, share count {}",
                threshold, share_count
            );
            return Err(ShamirError::InvalidParameters {
                threshold,
                share_count,
            });
        }
        Ok(SharingParameters {
            threshold,
            share_count,
        })
    }

    /// Shares needed to reconstruct, which is also the polynomial size.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn share_count(&self) -> usize {
        self.share_count
    }

    /// Load parameters from JSON, e.g. `{"threshold": 5, "share_count": 9}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSharingParameters = serde_json::from_str(json).map_err(|e| {
            error!("Failed to parse sharing parameters: {}", e);
            ShamirError::from(e)
        })?;
        SharingParameters::try_from(raw)
    }

    /// Split `secret` (or a fresh random secret) into `share_count` shares at
    /// indices `1..=share_count`.
    pub fn deal<R: RngCore + CryptoRng>(
        &self,
        secret: Option<Scalar>,
        rng: &mut R,
    ) -> Result<(Polynomial, Vec<Share>)> {
        let count = u32::try_from(self.share_count).map_err(|_| {
            error!("Share count {} does not fit a share index", self.share_count);
            ShamirError::InvalidParameters {
                threshold: self.threshold,
                share_count: self.share_count,
            }
        })?;
        let polynomial = Polynomial::generate(self.threshold, secret, rng)?;
        let shares = polynomial.shares(count);
        Ok((polynomial, shares))
    }

    fn check_quorum(&self, supplied: usize) -> Result<()> {
        if supplied < self.threshold {
            error!(
                "Reconstruction needs {} shares, only {} supplied",
                self.threshold, supplied
            );
            return Err(ShamirError::InsufficientShares {
                supplied,
                required: self.threshold,
            });
        }
        Ok(())
    }

    pub fn reconstruct(&self, shares: &[Share]) -> Result<Scalar> {
        self.check_quorum(shares.len())?;
        reconstruct_secret(shares)
    }

    pub fn reconstruct_point(&self, points: &[(ShareIndex, GroupElement)]) -> Result<GroupElement> {
        self.check_quorum(points.len())?;
        reconstruct_point(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::init_testing;

    #[test]
    fn parameters_are_validated() {
        assert!(SharingParameters::new(3, 5).is_ok());
        assert!(SharingParameters::new(5, 5).is_ok());
        assert_eq!(
            SharingParameters::new(6, 5),
            Err(ShamirError::InvalidParameters {
                threshold: 6,
                share_count: 5
            })
        );
        assert!(SharingParameters::new(0, 5).is_err());
        if let Ok(huge) = usize::try_from(u64::from(u32::MAX) + 3) {
            assert!(SharingParameters::new(2, huge).is_err());
        }
    }

    #[test]
    fn deserialization_is_validated() {
        let zero = serde_json::from_str::<SharingParameters>(r#"{"threshold":0,"share_count":0}"#);
        assert!(zero.is_err());
        let inverted =
            serde_json::from_str::<SharingParameters>(r#"{"threshold":4,"share_count":3}"#);
        assert!(inverted.is_err());

        let params: SharingParameters =
            serde_json::from_str(r#"{"threshold":2,"share_count":3}"#).unwrap();
        assert_eq!(params.threshold(), 2);
        assert_eq!(params.share_count(), 3);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(serde_json::from_str::<SharingParameters>(&json).unwrap(), params);
    }

    #[test]
    fn empty_share_set_is_never_a_secret() {
        let params = SharingParameters::new(1, 1).unwrap();
        assert_eq!(
            params.reconstruct(&[]),
            Err(ShamirError::InsufficientShares {
                supplied: 0,
                required: 1
            })
        );
    }

    #[test]
    fn parameters_load_from_json() {
        let params = SharingParameters::from_json(r#"{"threshold": 5, "share_count": 9}"#).unwrap();
        assert_eq!(params, SharingParameters::new(5, 9).unwrap());

        assert!(matches!(
            SharingParameters::from_json(r#"{"threshold": 5}"#),
            Err(ShamirError::Config(_))
        ));
        assert!(matches!(
            SharingParameters::from_json(r#"{"threshold": 10, "share_count": 9}"#),
            Err(ShamirError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn deal_and_reconstruct() {
        let mut rng = init_testing();
        let params = SharingParameters::new(3, 5).unwrap();
        let secret = Scalar::from(42u32);
        let (polynomial, shares) = params.deal(Some(secret), &mut rng).unwrap();

        assert_eq!(polynomial.size(), 3);
        assert_eq!(shares.len(), 5);
        assert_eq!(params.reconstruct(&shares[1..4]).unwrap(), secret);
        assert_eq!(params.reconstruct(&shares).unwrap(), secret);
    }

    #[test]
    fn too_few_shares_is_an_error() {
        let mut rng = init_testing();
        let params = SharingParameters::new(3, 5).unwrap();
        let (_, shares) = params.deal(None, &mut rng).unwrap();

        assert_eq!(
            params.reconstruct(&shares[..2]),
            Err(ShamirError::InsufficientShares {
                supplied: 2,
                required: 3
            })
        );
        let points: Vec<(ShareIndex, GroupElement)> = shares[..2]
            .iter()
            .map(|s| (s.index(), s.exponentiate()))
            .collect();
        assert!(matches!(
            params.reconstruct_point(&points),
            Err(ShamirError::InsufficientShares { .. })
        ));
    }

    #[test]
    fn reconstruct_in_the_exponent() {
        let mut rng = init_testing();
        let params = SharingParameters::new(2, 4).unwrap();
        let secret = Scalar::from(10u32);
        let (_, shares) = params.deal(Some(secret), &mut rng).unwrap();
        let points: Vec<(ShareIndex, GroupElement)> = shares[2..]
            .iter()
            .map(|s| (s.index(), s.exponentiate()))
            .collect();
        assert_eq!(
            params.reconstruct_point(&points).unwrap(),
            GroupElement::scale_generator(&secret)
        );
    }
}
