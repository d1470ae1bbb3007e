use bls12_381::{fixed_base_msm::UsePrecomp, g1_batch_normalize, G1Point, Scalar};
use polynomial::{domain::Domain, poly_coeff::PolyCoeff, reverse_bit_order};

use crate::{
    commit_key::CommitKey,
    fk20::{
        batch_toeplitz::BatchToeplitzMatrixVecMul,
        h_poly::{compute_h_poly_commitments, setup_vectors},
    },
};

/// What the prover is given to open.
#[derive(Debug, Clone)]
pub enum Input {
    /// Coefficients of the polynomial.
    PolyCoeff(PolyCoeff),
    /// Evaluations of the polynomial over the domain of size `poly_len`, in
    /// bit-reversed order.
    ///
    /// With this input the first `poly_len / coset_size` cosets hold the data
    /// itself, in the order it was given.
    Data(Vec<Scalar>),
}

/// Creates multi-point opening proofs for every coset of size `coset_size` in a
/// domain of `num_points` points, all at once, using FK20.
///
/// Cosets and proofs are returned in bit-reversed order: coset `k` is
/// `h_k·H` with `h_k = w^{reverse_bits(k)}`.
///
/// See <https://eprint.iacr.org/2023/033> for the algorithm.
#[derive(Debug)]
pub struct FK20Prover {
    batch_toeplitz: BatchToeplitzMatrixVecMul,
    coset_size: usize,
    num_points: usize,
    /// Size `num_points / coset_size`, turns the `h` commitments into proofs.
    proof_domain: Domain,
    evaluation_domain: Domain,
    poly_domain: Domain,
    commit_key: CommitKey,
}

impl FK20Prover {
    pub fn new(
        commit_key: CommitKey,
        poly_len: usize,
        coset_size: usize,
        num_points: usize,
        use_precomp: UsePrecomp,
    ) -> Self {
        assert!(
            poly_len.is_power_of_two()
                && coset_size.is_power_of_two()
                && num_points.is_power_of_two(),
            "FK20 parameters must be powers of two"
        );
        assert!(coset_size < poly_len && poly_len < num_points);
        assert!(
            commit_key.g1s.len() >= poly_len,
            "commit key has {} points, need {poly_len}",
            commit_key.g1s.len()
        );

        let batch_toeplitz = BatchToeplitzMatrixVecMul::new(
            &setup_vectors(&commit_key.g1s, poly_len, coset_size),
            use_precomp,
        );

        Self {
            batch_toeplitz,
            coset_size,
            num_points,
            proof_domain: Domain::new(num_points / coset_size),
            evaluation_domain: Domain::new(num_points),
            poly_domain: Domain::new(poly_len),
            commit_key,
        }
    }

    pub fn num_proofs(&self) -> usize {
        self.num_points / self.coset_size
    }

    pub fn poly_len(&self) -> usize {
        self.poly_domain.size()
    }

    fn to_poly_coeff(&self, input: Input) -> PolyCoeff {
        match input {
            Input::PolyCoeff(polynomial) => polynomial,
            Input::Data(mut data) => {
                reverse_bit_order(&mut data);
                self.poly_domain.ifft_scalars(data)
            }
        }
    }

    pub fn commit(&self, input: Input) -> G1Point {
        let polynomial = self.to_poly_coeff(input);
        self.commit_key.commit_g1(&polynomial).into()
    }

    /// Evaluates the polynomial over every coset, in bit-reversed order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_coset_evaluations(&self, input: Input) -> Vec<Vec<Scalar>> {
        let polynomial = self.to_poly_coeff(input);
        self.coset_evaluations(polynomial)
    }

    fn coset_evaluations(&self, polynomial: PolyCoeff) -> Vec<Vec<Scalar>> {
        let mut evaluations = self.evaluation_domain.fft_scalars(polynomial);
        reverse_bit_order(&mut evaluations);
        evaluations
            .chunks_exact(self.coset_size)
            .map(<[Scalar]>::to_vec)
            .collect()
    }

    /// Returns one proof per coset together with the coset evaluations.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_multi_opening_proofs(&self, input: Input) -> (Vec<G1Point>, Vec<Vec<Scalar>>) {
        let mut polynomial = self.to_poly_coeff(input);
        assert!(
            polynomial.len() <= self.poly_len(),
            "polynomial has more than {} coefficients",
            self.poly_len()
        );
        polynomial.resize(self.poly_len(), Scalar::from(0u64));

        let proofs = self.compute_proofs(&polynomial);
        (proofs, self.coset_evaluations(polynomial))
    }

    /// Proof `j` in natural order is `sum_s z_j^s [h_s(τ)]₁` with
    /// `z_j = w^{j·coset_size}`, i.e. an FFT of the `h` commitments over the
    /// proof domain.
    fn compute_proofs(&self, polynomial: &PolyCoeff) -> Vec<G1Point> {
        let h_commitments =
            compute_h_poly_commitments(&self.batch_toeplitz, polynomial, self.coset_size);
        let mut proofs = g1_batch_normalize(&self.proof_domain.fft_g1(h_commitments));
        reverse_bit_order(&mut proofs);
        proofs
    }
}
