use crate::{traits::*, G1Point, G1Projective, Scalar};

/// Multi-scalar multiplication over G1 that passes the points straight to blst.
///
/// Returns `None` if the number of points and scalars differ.
///
/// blst returns the identity for the whole MSM if any of the points is the
/// identity, so callers must know that `points` contains no identity element.
/// See `blst_identity_footgun` below.
pub fn g1_lincomb_unchecked(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    (points.len() == scalars.len()).then(|| {
        let proj_points: Vec<_> = points.iter().map(Into::into).collect();
        G1Projective::multi_exp(&proj_points, scalars)
    })
}

/// Multi-scalar multiplication over G1.
///
/// Returns `None` if the number of points and scalars differ. Identity points
/// are removed before calling into blst.
pub fn g1_lincomb(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    if points.len() != scalars.len() {
        return None;
    }

    let (points_filtered, scalars_filtered): (Vec<_>, Vec<_>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, _)| !bool::from(point.is_identity()))
        .map(|(point, scalar)| (*point, *scalar))
        .unzip();

    if points_filtered.is_empty() {
        return Some(G1Projective::identity());
    }

    g1_lincomb_unchecked(&points_filtered, &scalars_filtered)
}
