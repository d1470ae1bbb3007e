use std::mem::size_of;

use bls12_381::{
    compute_powers, g1_batch_normalize, lincomb::g1_lincomb, multi_pairings,
    reduce_bytes_to_scalar_bias, traits::*, G1Point, G2Prepared, Scalar,
};
use itertools::izip;
use polynomial::{coset_fft::CosetFFT, domain::Domain, poly_coeff::PolyCoeff, reverse_bit_order};
use sha2::{Digest, Sha256};

use crate::{
    fk20::{cosets::coset_gens, errors::VerifierError},
    verification_key::VerificationKey,
};

/// Position of a coset in bit-reversed coset order.
pub type CosetIndex = u64;

/// Position of a commitment in the list of distinct commitments handed to the verifier.
pub type CommitmentIndex = u64;

/// Checks batches of multi-point openings over the cosets produced by
/// [`FK20Prover`](crate::fk20::Prover).
///
/// The proofs need not come from FK20, any valid KZG quotient commitment for
/// `X^n - h_k^n` verifies.
#[derive(Debug)]
pub struct FK20Verifier {
    pub verification_key: VerificationKey,
    coset_domain: Domain,
    /// `h_k` in bit-reversed order, prepared for coset inverse FFTs.
    coset_ffts: Vec<CosetFFT>,
    /// `h_k^n` in bit-reversed order, `n` being the coset size.
    coset_gens_pow_n: Vec<Scalar>,
    tau_pow_n: G2Prepared,
    neg_g2_gen: G2Prepared,
}

impl FK20Verifier {
    pub fn new(verification_key: VerificationKey, num_points: usize, num_cosets: usize) -> Self {
        let coset_size = num_points / num_cosets;
        assert_eq!(
            coset_size, verification_key.coset_size,
            "verification key was made for cosets of size {}",
            verification_key.coset_size
        );

        let gens = coset_gens(num_points, num_cosets, true);
        let coset_gens_pow_n = gens
            .iter()
            .map(|gen| gen.pow_vartime([coset_size as u64]))
            .collect();
        let coset_ffts = gens.into_iter().map(CosetFFT::new).collect();

        Self {
            coset_domain: Domain::new(coset_size),
            coset_ffts,
            coset_gens_pow_n,
            tau_pow_n: G2Prepared::from(verification_key.tau_pow_coset_size()),
            neg_g2_gen: G2Prepared::from(-verification_key.g2_gen()),
            verification_key,
        }
    }

    pub fn num_cosets(&self) -> usize {
        self.coset_ffts.len()
    }

    fn validate(
        &self,
        deduplicated_commitments: &[G1Point],
        commitment_indices: &[CommitmentIndex],
        coset_indices: &[CosetIndex],
        coset_evals: &[Vec<Scalar>],
        proofs: &[G1Point],
    ) -> Result<(), VerifierError> {
        let batch_size = proofs.len();
        if commitment_indices.len() != batch_size
            || coset_indices.len() != batch_size
            || coset_evals.len() != batch_size
        {
            return Err(VerifierError::BatchVerificationInputsMustHaveSameLength {
                commitment_indices_len: commitment_indices.len(),
                coset_indices_len: coset_indices.len(),
                coset_evaluations_len: coset_evals.len(),
                proofs_len: batch_size,
            });
        }

        if let Some(&commitment_index) = commitment_indices
            .iter()
            .find(|&&index| index >= deduplicated_commitments.len() as u64)
        {
            return Err(VerifierError::InvalidCommitmentIndex {
                commitment_index,
                num_commitments: deduplicated_commitments.len(),
            });
        }

        if let Some(&coset_index) = coset_indices
            .iter()
            .find(|&&index| index >= self.num_cosets() as u64)
        {
            return Err(VerifierError::InvalidCosetIndex {
                coset_index,
                num_cosets: self.num_cosets(),
            });
        }

        let expected = self.verification_key.coset_size;
        if let Some(evals) = coset_evals.iter().find(|evals| evals.len() != expected) {
            return Err(VerifierError::CosetEvaluationsHaveInvalidLength {
                length: evals.len(),
                expected,
            });
        }

        Ok(())
    }

    /// Verifies that, for every `i`, `proofs[i]` shows the polynomial committed
    /// in `deduplicated_commitments[commitment_indices[i]]` takes the values
    /// `coset_evals[i]` (bit-reversed) on coset `coset_indices[i]`.
    ///
    /// With `r` a Fiat-Shamir challenge over all inputs, the openings are folded
    /// into one pairing check:
    ///
    /// ```text
    /// e(sum r^i π_i, [τ^n]₂) = e(sum r^i C_i - [sum r^i I_i(τ)]₁ + sum r^i h_i^n π_i, [1]₂)
    /// ```
    ///
    /// where `I_i` interpolates the coset evaluations. An empty batch is valid.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(batch_size = proofs.len()))
    )]
    pub fn verify_multi_opening(
        &self,
        deduplicated_commitments: &[G1Point],
        commitment_indices: &[CommitmentIndex],
        coset_indices: &[CosetIndex],
        coset_evals: &[Vec<Scalar>],
        proofs: &[G1Point],
    ) -> Result<(), VerifierError> {
        self.validate(
            deduplicated_commitments,
            commitment_indices,
            coset_indices,
            coset_evals,
            proofs,
        )?;

        let batch_size = proofs.len();
        if batch_size == 0 {
            return Ok(());
        }

        let r = compute_fiat_shamir_challenge(
            &self.verification_key,
            deduplicated_commitments,
            commitment_indices,
            coset_indices,
            coset_evals,
            proofs,
        );
        let r_powers = compute_powers(r, batch_size);

        let sum_proofs = g1_lincomb(proofs, &r_powers).expect("one power per proof");

        let shifted_r_powers: Vec<Scalar> = izip!(coset_indices, &r_powers)
            .map(|(&coset_index, r_power)| r_power * self.coset_gens_pow_n[coset_index as usize])
            .collect();
        let sum_shifted_proofs = g1_lincomb(proofs, &shifted_r_powers).expect("lengths match");

        // Openings of the same commitment share one base in the MSM.
        let mut commitment_weights = vec![Scalar::ZERO; deduplicated_commitments.len()];
        for (&commitment_index, r_power) in izip!(commitment_indices, &r_powers) {
            commitment_weights[commitment_index as usize] += r_power;
        }
        let sum_commitments = g1_lincomb(deduplicated_commitments, &commitment_weights)
            .expect("one weight per commitment");

        let interpolation_poly =
            self.sum_interpolation_polys(coset_indices, coset_evals, &r_powers);
        let sum_interpolations = self.verification_key.commit_g1(&interpolation_poly);

        let rhs = sum_commitments - sum_interpolations + sum_shifted_proofs;
        let pairing_inputs = g1_batch_normalize(&[sum_proofs, rhs]);

        multi_pairings(&[
            (&pairing_inputs[0], &self.tau_pow_n),
            (&pairing_inputs[1], &self.neg_g2_gen),
        ])
        .then_some(())
        .ok_or(VerifierError::InvalidProof)
    }

    /// Returns `sum_i r^i I_i(X)`.
    ///
    /// Interpolation is linear, so the weighted evaluations are summed per coset
    /// first and each distinct coset costs one inverse FFT.
    fn sum_interpolation_polys(
        &self,
        coset_indices: &[CosetIndex],
        coset_evals: &[Vec<Scalar>],
        r_powers: &[Scalar],
    ) -> PolyCoeff {
        let coset_size = self.verification_key.coset_size;
        let mut aggregated: Vec<Option<Vec<Scalar>>> = vec![None; self.num_cosets()];

        for (&coset_index, evals, r_power) in izip!(coset_indices, coset_evals, r_powers) {
            let slot = aggregated[coset_index as usize]
                .get_or_insert_with(|| vec![Scalar::ZERO; coset_size]);
            for (acc, eval) in slot.iter_mut().zip(evals) {
                *acc += eval * r_power;
            }
        }

        let mut sum = PolyCoeff(vec![Scalar::ZERO; coset_size]);
        for (coset_fft, evals) in self.coset_ffts.iter().zip(aggregated) {
            let Some(mut evals) = evals else {
                continue;
            };
            reverse_bit_order(&mut evals);
            let interpolation = self.coset_domain.coset_ifft_scalars(evals, coset_fft);
            for (acc, coeff) in sum.iter_mut().zip(interpolation.iter()) {
                *acc += coeff;
            }
        }
        sum
    }
}

/// Derives the batching challenge from everything the verifier was given.
///
/// ```text
/// "RCKZGCBATCH__V1_" || u64 poly_len || u64 coset_size || u64 #commitments || u64 #openings
///   || commitments || (u64 commitment_index || u64 coset_index || evaluations || proof)*
/// ```
///
/// Integers are big-endian, scalars are 32 bytes big-endian, points are compressed.
pub(crate) fn compute_fiat_shamir_challenge(
    verification_key: &VerificationKey,
    commitments: &[G1Point],
    commitment_indices: &[CommitmentIndex],
    coset_indices: &[CosetIndex],
    coset_evals: &[Vec<Scalar>],
    proofs: &[G1Point],
) -> Scalar {
    const DOMAIN_SEP: &[u8; 16] = b"RCKZGCBATCH__V1_";
    const SCALAR_SIZE: usize = 32;
    const G1_COMPRESSED_SIZE: usize = 48;

    let num_openings = coset_indices.len();
    let hash_input_size = DOMAIN_SEP.len()
        + 4 * size_of::<u64>()
        + commitments.len() * G1_COMPRESSED_SIZE
        + num_openings
            * (2 * size_of::<u64>()
                + verification_key.coset_size * SCALAR_SIZE
                + G1_COMPRESSED_SIZE);

    let mut hash_input = Vec::with_capacity(hash_input_size);
    hash_input.extend_from_slice(DOMAIN_SEP);
    hash_input.extend((verification_key.num_coefficients_in_polynomial as u64).to_be_bytes());
    hash_input.extend((verification_key.coset_size as u64).to_be_bytes());
    hash_input.extend((commitments.len() as u64).to_be_bytes());
    hash_input.extend((num_openings as u64).to_be_bytes());

    for commitment in commitments {
        hash_input.extend(commitment.to_compressed());
    }

    for (commitment_index, coset_index, evals, proof) in
        izip!(commitment_indices, coset_indices, coset_evals, proofs)
    {
        hash_input.extend(commitment_index.to_be_bytes());
        hash_input.extend(coset_index.to_be_bytes());
        for eval in evals {
            hash_input.extend(eval.to_bytes_be());
        }
        hash_input.extend(proof.to_compressed());
    }
    debug_assert_eq!(hash_input.len(), hash_input_size);

    let digest: [u8; 32] = Sha256::digest(&hash_input).into();
    reduce_bytes_to_scalar_bias(digest)
}
