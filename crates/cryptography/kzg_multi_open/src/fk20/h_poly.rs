//! The `h` polynomials of FK20.
//!
//! Write `f(X) = sum_m X^{m·l} g_m(X)` with every `g_m` of degree below `l`.
//! Dividing `f` by `X^l - z` leaves the quotient
//!
//! ```text
//! q_z(X) = sum_{s >= 0} z^s h_s(X),   h_s(X) = floor(f(X) / X^{(s+1)·l})
//! ```
//!
//! so the proofs for every coset are one FFT away from the commitments
//! `[h_s(τ)]₁`. Grouping the coefficients of `f` by their index modulo `l`
//! turns those commitments into a sum of `l` Toeplitz matrix-vector products
//! against fixed vectors of setup points.

use bls12_381::{G1Point, G1Projective, Scalar};

use crate::fk20::{batch_toeplitz::BatchToeplitzMatrixVecMul, toeplitz::ToeplitzMatrix};

/// The fixed vectors `Q_r[v] = [τ^{(M - 1 - v)·l + r}]₁` for `r < l`, `v < M`,
/// with `M = poly_len / l`.
pub(crate) fn setup_vectors(g1s: &[G1Point], poly_len: usize, l: usize) -> Vec<Vec<G1Point>> {
    assert!(g1s.len() >= poly_len, "not enough setup points");
    let num_blocks = poly_len / l;

    (0..l)
        .map(|r| {
            (0..num_blocks)
                .map(|v| g1s[(num_blocks - 1 - v) * l + r])
                .collect()
        })
        .collect()
}

/// Builds, for each residue `r < l`, the strictly upper triangular Toeplitz
/// matrix with `T_r[s][v] = f_{(M + s - v)·l + r}` whenever `v > s`.
///
/// Then `sum_r T_r · Q_r` is the vector of commitments `[h_s(τ)]₁`.
pub(crate) fn toeplitz_matrices(coefficients: &[Scalar], l: usize) -> Vec<ToeplitzMatrix> {
    let poly_len = coefficients.len();
    assert!(
        poly_len % l == 0,
        "polynomial length {poly_len} is not a multiple of {l}"
    );
    let num_blocks = poly_len / l;

    (0..l)
        .map(|r| {
            let mut row = vec![Scalar::from(0u64); num_blocks];
            for (v, entry) in row.iter_mut().enumerate().skip(1) {
                *entry = coefficients[(num_blocks - v) * l + r];
            }
            let col = vec![Scalar::from(0u64); num_blocks];
            ToeplitzMatrix::new(row, col)
        })
        .collect()
}

/// Returns `[h_s(τ)]₁` for `s < poly_len / l`. The last one is always the identity.
pub(crate) fn compute_h_poly_commitments(
    batch_toeplitz: &BatchToeplitzMatrixVecMul,
    coefficients: &[Scalar],
    l: usize,
) -> Vec<G1Projective> {
    let matrices = toeplitz_matrices(coefficients, l);
    batch_toeplitz.sum_matrix_vector_mul(&matrices)
}
