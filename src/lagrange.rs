//! Lagrange interpolation at the origin, in the scalar field and in the
//! exponent.

use k256::Scalar;
use tracing::error;

use crate::{
    curve::GroupElement,
    errors::{Result, ShamirError},
    share::{Share, ShareIndex},
};

/// Nodes must be non-zero and pairwise distinct. A repeated node makes a
/// denominator vanish; a zero node is the secret's own position.
fn validate_indices(indices: &[Scalar]) -> Result<()> {
    for (i, xi) in indices.iter().enumerate() {
        if bool::from(xi.is_zero()) {
            error!("Interpolation node at position {} is zero", i);
            return Err(ShamirError::ZeroIndex(i));
        }
        if let Some(j) = indices[..i].iter().position(|xj| xj == xi) {
            error!("Interpolation nodes at positions {} and {} coincide", j, i);
            return Err(ShamirError::DuplicateIndex(j, i));
        }
    }
    Ok(())
}

fn check_lengths(values: usize, indices: usize) -> Result<()> {
    if values != indices {
        error!(
            "Interpolation given {} values but {} indices",
            values, indices
        );
        return Err(ShamirError::InvalidInput { values, indices });
    }
    Ok(())
}

/// The basis coefficients `l_i(0) = prod_{j != i} (-x_j) / (x_i - x_j)` for the
/// nodes `indices`. Both interpolators combine values with these.
pub fn lagrange_coefficients_at_zero(indices: &[Scalar]) -> Result<Vec<Scalar>> {
    validate_indices(indices)?;

    let n = indices.len();
    let mut coefficients = Vec::with_capacity(n);
    for i in 0..n {
        let xi = &indices[i];
        let mut num = Scalar::ONE;
        let mut den = Scalar::ONE;

        for j in 0..n {
            if i != j {
                let xj = &indices[j];
                num *= Scalar::ZERO - xj;
                den *= xi - xj;
            }
        }

        let den_inv = Option::<Scalar>::from(den.invert()).ok_or_else(|| {
            error!("Lagrange denominator for position {} is not invertible", i);
            ShamirError::DuplicateIndex(i, i)
        })?;
        coefficients.push(num * den_inv);
    }
    Ok(coefficients)
}

/// Recover `p(0)` from `shares[i] = p(indices[i])`.
///
/// No degree check is done here: with fewer points than the polynomial has
/// coefficients the result is well defined but meaningless.
pub fn interpolate_scalar(shares: &[Scalar], indices: &[Scalar]) -> Result<Scalar> {
    check_lengths(shares.len(), indices.len())?;
    let coefficients = lagrange_coefficients_at_zero(indices)?;

    let mut acc = Scalar::ZERO;
    for (basis, share) in coefficients.iter().zip(shares) {
        acc += basis * share;
    }
    Ok(acc)
}

/// Recover `g^p(0)` from `points[i] = g^p(indices[i])` without ever seeing the
/// scalars.
pub fn interpolate_point(points: &[GroupElement], indices: &[Scalar]) -> Result<GroupElement> {
    check_lengths(points.len(), indices.len())?;
    let coefficients = lagrange_coefficients_at_zero(indices)?;

    Ok(coefficients
        .iter()
        .zip(points)
        .map(|(basis, point)| point.mul(basis))
        .sum())
}

/// [`interpolate_scalar`] over a set of [`Share`]s.
pub fn reconstruct_secret(shares: &[Share]) -> Result<Scalar> {
    let (indices, values): (Vec<Scalar>, Vec<Scalar>) = shares
        .iter()
        .map(|s| (s.index().to_scalar(), *s.value()))
        .unzip();
    interpolate_scalar(&values, &indices)
}

/// [`interpolate_point`] over indexed group elements.
pub fn reconstruct_point(points: &[(ShareIndex, GroupElement)]) -> Result<GroupElement> {
    let (indices, elements): (Vec<Scalar>, Vec<GroupElement>) =
        points.iter().map(|(i, p)| (i.to_scalar(), *p)).unzip();
    interpolate_point(&elements, &indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{polynomial::Polynomial, utils::testing::init_testing};
    use k256::elliptic_curve::Field;

    fn nodes(xs: &[u32]) -> Vec<Scalar> {
        xs.iter().map(|&x| Scalar::from(x)).collect()
    }

    #[test]
    fn coefficients_sum_to_one() {
        let coefficients = lagrange_coefficients_at_zero(&nodes(&[3, 5, 7])).unwrap();
        let sum = coefficients.iter().fold(Scalar::ZERO, |acc, c| acc + c);
        assert_eq!(sum, Scalar::ONE);
    }

    #[test]
    fn interpolates_known_polynomial() {
        // f(x) = 3 + 5x + 7x^2
        let f = |x: u32| {
            let x = Scalar::from(x);
            Scalar::from(3u32) + Scalar::from(5u32) * x + Scalar::from(7u32) * x * x
        };
        let xs = [1u32, 2, 4];
        let values: Vec<Scalar> = xs.iter().map(|&x| f(x)).collect();
        assert_eq!(
            interpolate_scalar(&values, &nodes(&xs)).unwrap(),
            Scalar::from(3u32)
        );
    }

    #[test]
    fn result_is_independent_of_order() {
        let mut rng = init_testing();
        let poly = Polynomial::generate(3, None, &mut rng).unwrap();
        let shares = poly.shares(3);
        let mut reversed = shares.clone();
        reversed.reverse();
        assert_eq!(
            reconstruct_secret(&shares).unwrap(),
            reconstruct_secret(&reversed).unwrap()
        );
        assert_eq!(reconstruct_secret(&shares).unwrap(), *poly.constant_term());
    }

    #[test]
    fn length_mismatch_is_invalid_input() {
        let values = nodes(&[11, 12, 13]);
        let indices = nodes(&[1, 2]);
        assert_eq!(
            interpolate_scalar(&values, &indices),
            Err(ShamirError::InvalidInput {
                values: 3,
                indices: 2
            })
        );

        let points = vec![GroupElement::GENERATOR; 3];
        assert_eq!(
            interpolate_point(&points, &indices),
            Err(ShamirError::InvalidInput {
                values: 3,
                indices: 2
            })
        );
    }

    #[test]
    fn duplicate_and_zero_nodes_are_rejected() {
        let values = nodes(&[1, 2, 3]);
        assert_eq!(
            interpolate_scalar(&values, &nodes(&[1, 2, 1])),
            Err(ShamirError::DuplicateIndex(0, 2))
        );
        assert_eq!(
            interpolate_scalar(&values, &nodes(&[1, 0, 3])),
            Err(ShamirError::ZeroIndex(1))
        );
        let points = vec![GroupElement::GENERATOR; 2];
        assert_eq!(
            interpolate_point(&points, &nodes(&[4, 4])),
            Err(ShamirError::DuplicateIndex(0, 1))
        );
        assert_eq!(
            interpolate_point(&points, &nodes(&[0, 2])),
            Err(ShamirError::ZeroIndex(0))
        );
    }

    #[test]
    fn point_interpolation_tracks_scalar_interpolation() {
        let mut rng = init_testing();
        let poly = Polynomial::generate(3, None, &mut rng).unwrap();
        let shares = poly.shares(5);

        let subset = [&shares[0], &shares[2], &shares[4]];
        let indexed: Vec<(ShareIndex, GroupElement)> = subset
            .iter()
            .map(|s| (s.index(), s.exponentiate()))
            .collect();
        let secret = reconstruct_secret(&subset.map(|s| *s)).unwrap();

        assert_eq!(
            reconstruct_point(&indexed).unwrap(),
            GroupElement::scale_generator(&secret)
        );
    }

    #[test]
    fn too_few_points_give_a_wrong_answer() {
        let mut rng = init_testing();
        let secret = Scalar::random(&mut rng);
        let poly = Polynomial::generate(3, Some(secret), &mut rng).unwrap();
        let shares = poly.shares(2);
        assert_ne!(reconstruct_secret(&shares).unwrap(), secret);
    }
}
