use pairing::{MillerLoopResult, MultiMillerLoop};
use traits::*;

pub mod batch_inversion;
pub mod fixed_base_msm;
pub mod lincomb;

// Re-export ff and group, so other crates do not need to directly import(and independently version) them
pub use ff;
pub use group;

pub mod traits {
    pub use ff::{Field, PrimeField};
    pub use group::{prime::PrimeCurveAffine, Curve, Group};
}

/// Affine representation of a point in the BLS12-381 G1 curve group.
pub type G1Point = blstrs::G1Affine;

/// Projective representation of a point in the BLS12-381 G1 curve group.
pub type G1Projective = blstrs::G1Projective;

/// Affine representation of a point in the BLS12-381 G2 curve group.
pub type G2Point = blstrs::G2Affine;

/// Projective representation of a point in the BLS12-381 G2 curve group.
pub type G2Projective = blstrs::G2Projective;

/// A G2 point with its Miller loop lines precomputed.
///
/// The verification keys hold their G2 points in this form since the same
/// points are paired against on every verification.
pub type G2Prepared = blstrs::G2Prepared;

/// Element of the scalar field of BLS12-381.
pub type Scalar = blstrs::Scalar;

/// Returns true if the product of the pairings `e(g1_i, g2_i)` is the identity in GT.
///
/// A single final exponentiation is shared by all pairs.
pub fn multi_pairings(pairs: &[(&G1Point, &G2Prepared)]) -> bool {
    blstrs::Bls12::multi_miller_loop(pairs)
        .final_exponentiation()
        .is_identity()
        .into()
}

/// Converts projective G1 points into affine form with a single shared inversion.
///
/// blst maps the whole batch to the identity if any input is the identity, so
/// identity points are set aside and written back into their original slots.
pub fn g1_batch_normalize(projective_points: &[G1Projective]) -> Vec<G1Point> {
    let mut affine_points = vec![G1Point::identity(); projective_points.len()];

    let (positions, non_identity): (Vec<usize>, Vec<G1Projective>) = projective_points
        .iter()
        .enumerate()
        .filter(|(_, point)| !bool::from(point.is_identity()))
        .map(|(index, point)| (index, *point))
        .unzip();

    if non_identity.is_empty() {
        return affine_points;
    }

    // SAFETY: `G1Projective` has the same memory layout as `blst_p1`.
    let raw_points = unsafe {
        std::slice::from_raw_parts(
            non_identity.as_ptr().cast::<blst::blst_p1>(),
            non_identity.len(),
        )
    };
    let normalized = blst::p1_affines::from(raw_points);

    for (position, point) in positions.into_iter().zip(normalized.as_slice()) {
        affine_points[position] =
            G1Point::from_raw_unchecked(point.x.into(), point.y.into(), false);
    }

    affine_points
}

/// Interprets `bytes` as a big-endian integer and reduces it modulo the scalar field order.
///
/// This is used to turn hash digests into Fiat-Shamir challenges. The result
/// is slightly biased, which is acceptable for a 256-bit digest and a 255-bit modulus.
pub fn reduce_bytes_to_scalar_bias(bytes: [u8; 32]) -> Scalar {
    let mut out = blst::blst_fr::default();

    unsafe {
        let mut s = blst::blst_scalar::default();
        blst::blst_scalar_from_bendian(&raw mut s, bytes.as_ptr());
        blst::blst_fr_from_scalar(&raw mut out, std::ptr::addr_of!(s));
    }

    Scalar::from(out)
}

/// Returns `[1, x, x^2, ..., x^{n-1}]`.
pub fn compute_powers(x: Scalar, n: usize) -> Vec<Scalar> {
    let mut powers = Vec::with_capacity(n);
    let mut current = Scalar::ONE;
    for _ in 0..n {
        powers.push(current);
        current *= x;
    }
    powers
}
