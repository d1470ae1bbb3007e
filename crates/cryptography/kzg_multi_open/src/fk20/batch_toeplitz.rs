use bls12_381::{
    fixed_base_msm::{FixedBaseMSM, UsePrecomp},
    g1_batch_normalize, G1Point, G1Projective, Scalar,
};
use maybe_rayon::prelude::*;
use polynomial::domain::Domain;

use crate::fk20::toeplitz::ToeplitzMatrix;

/// Computes `sum_r T_r * v_r` for Toeplitz matrices `T_r` that change on every
/// call and G1 vectors `v_r` that are fixed at construction.
///
/// Each product is a cyclic convolution after embedding `T_r` into a circulant
/// matrix, so in the FFT domain the sum becomes, for every frequency `p`,
/// `sum_r fft(c_r)[p] * fft(v_r)[p]`: one fixed-base MSM per frequency and a
/// single inverse FFT at the end.
#[derive(Debug)]
pub(crate) struct BatchToeplitzMatrixVecMul {
    /// `msm_per_frequency[p]` has the bases `fft(v_r)[p]` for every `r`.
    msm_per_frequency: Vec<FixedBaseMSM>,
    num_vectors: usize,
    vector_len: usize,
    circulant_domain: Domain,
}

impl BatchToeplitzMatrixVecMul {
    pub(crate) fn new(vectors: &[Vec<G1Point>], use_precomp: UsePrecomp) -> Self {
        assert!(!vectors.is_empty(), "need at least one vector");
        let vector_len = vectors[0].len();
        assert!(
            vectors.iter().all(|vector| vector.len() == vector_len),
            "all vectors must have the same length"
        );
        assert!(
            vector_len.is_power_of_two(),
            "vector length must be a power of two, found {vector_len}"
        );

        let circulant_domain = Domain::new(2 * vector_len);

        let vector_ffts: Vec<Vec<G1Point>> = vectors
            .maybe_into_par_iter()
            .map(|vector| {
                let projective = vector.iter().map(|point| G1Projective::from(*point)).collect();
                g1_batch_normalize(&circulant_domain.fft_g1(projective))
            })
            .collect();

        let msm_per_frequency = transpose(vector_ffts)
            .maybe_into_par_iter()
            .map(|bases| FixedBaseMSM::new(bases, use_precomp))
            .collect();

        Self {
            msm_per_frequency,
            num_vectors: vectors.len(),
            vector_len,
            circulant_domain,
        }
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub(crate) fn sum_matrix_vector_mul(&self, matrices: &[ToeplitzMatrix]) -> Vec<G1Projective> {
        assert_eq!(
            matrices.len(),
            self.num_vectors,
            "need one matrix per fixed vector"
        );
        assert!(matrices
            .iter()
            .all(|matrix| matrix.size() == self.vector_len));

        let column_ffts: Vec<Vec<Scalar>> = matrices
            .maybe_into_par_iter()
            .map(|matrix| {
                self.circulant_domain
                    .fft_scalars(matrix.circulant_column().into())
            })
            .collect();
        let scalars_per_frequency = transpose(column_ffts);

        let circulant_product: Vec<G1Projective> = {
            #[cfg(feature = "tracing")]
            let _span = tracing::info_span!("fixed-base msm per frequency").entered();
            self.msm_per_frequency
                .maybe_par_iter()
                .zip(scalars_per_frequency)
                .map(|(msm, scalars)| msm.msm(&scalars))
                .collect()
        };

        // Rows past `vector_len` belong to the circulant padding.
        self.circulant_domain
            .ifft_g1_take_n(circulant_product, Some(self.vector_len))
    }
}

/// Swaps rows and columns of a rectangular matrix.
pub(crate) fn transpose<T: Clone>(matrix: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let Some(num_cols) = matrix.first().map(Vec::len) else {
        return Vec::new();
    };

    let mut columns = vec![Vec::with_capacity(matrix.len()); num_cols];
    for row in matrix {
        for (column, element) in columns.iter_mut().zip(row) {
            column.push(element);
        }
    }
    columns
}
