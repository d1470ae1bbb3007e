use bls12_381::{
    lincomb::g1_lincomb, multi_pairings, traits::*, G1Point, G1Projective, G2Point, G2Prepared,
    Scalar,
};
use itertools::{chain, izip, Itertools};
use polynomial::domain::Domain;

use crate::{evaluation::compute_evaluation, VerifierError};

#[derive(Debug)]
pub struct VerificationKey {
    pub gen_g1: G1Point,
    pub gen_g2: G2Point,
    pub tau_g2: G2Point,
    neg_gen_g2_prepared: G2Prepared,
    tau_g2_prepared: G2Prepared,
}

impl VerificationKey {
    pub fn new(gen_g1: G1Point, gen_g2: G2Point, tau_g2: G2Point) -> Self {
        Self {
            gen_g1,
            gen_g2,
            tau_g2,
            neg_gen_g2_prepared: G2Prepared::from(-gen_g2),
            tau_g2_prepared: G2Prepared::from(tau_g2),
        }
    }
}

#[derive(Debug)]
pub struct Verifier {
    pub domain: Domain,
    pub verification_key: VerificationKey,
}

impl Verifier {
    pub fn new(domain_size: usize, verification_key: VerificationKey) -> Self {
        Self {
            domain: Domain::new(domain_size),
            verification_key,
        }
    }

    /// Evaluates the polynomial with the given natural-order evaluations at `z`.
    pub fn evaluate(&self, evaluations: &[Scalar], z: Scalar) -> Scalar {
        compute_evaluation(&self.domain, evaluations, z)
    }

    /// Checks that `proof` opens `commitment` to `y` at `z`.
    ///
    /// The textbook check is `e(C - [y]₁, [1]₂) = e(π, [τ - z]₂)`. Moving `z`
    /// to the G1 side keeps both G2 points fixed, so they can be prepared once:
    /// `e(C - [y]₁ + z·π, -[1]₂) · e(π, [τ]₂) = 1`.
    pub fn verify_kzg_proof(
        &self,
        commitment: G1Point,
        z: Scalar,
        y: Scalar,
        proof: G1Point,
    ) -> Result<(), VerifierError> {
        let vk = &self.verification_key;

        let lhs_g1 = (G1Projective::from(commitment) - vk.gen_g1 * y + proof * z).to_affine();

        multi_pairings(&[
            (&lhs_g1, &vk.neg_gen_g2_prepared),
            (&proof, &vk.tau_g2_prepared),
        ])
        .then_some(())
        .ok_or(VerifierError::InvalidProof)
    }

    /// Verifies many openings at once using the random weights `r_powers`.
    ///
    /// Sums the single-proof equations weighted by `r^i`:
    /// `e(sum r^i (C_i - [y_i]₁ + z_i·π_i), -[1]₂) · e(sum r^i π_i, [τ]₂) = 1`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_kzg_proof_batch(
        &self,
        commitments: &[G1Point],
        zs: &[Scalar],
        ys: &[Scalar],
        proofs: &[G1Point],
        r_powers: &[Scalar],
    ) -> Result<(), VerifierError> {
        let n = commitments.len();
        if [zs.len(), ys.len(), proofs.len(), r_powers.len()]
            .iter()
            .any(|len| *len != n)
        {
            return Err(VerifierError::BatchVerificationInputsMustHaveSameLength {
                commitments_len: n,
                points_len: zs.len(),
                evaluations_len: ys.len(),
                proofs_len: proofs.len(),
                weights_len: r_powers.len(),
            });
        }

        let vk = &self.verification_key;

        let lhs_g1 = {
            let points = chain![commitments, [&vk.gen_g1], proofs]
                .copied()
                .collect_vec();

            let weighted_y_sum: Scalar = izip!(r_powers, ys).map(|(r_i, y_i)| r_i * y_i).sum();
            let weighted_zs = izip!(r_powers, zs).map(|(r_i, z_i)| r_i * z_i);
            let scalars = chain![r_powers.iter().copied(), [-weighted_y_sum], weighted_zs]
                .collect_vec();

            g1_lincomb(&points, &scalars)
                .expect("points.len() == scalars.len()")
                .to_affine()
        };

        let rhs_g1 = g1_lincomb(proofs, r_powers)
            .expect("proofs.len() == r_powers.len()")
            .to_affine();

        multi_pairings(&[
            (&lhs_g1, &vk.neg_gen_g2_prepared),
            (&rhs_g1, &vk.tau_g2_prepared),
        ])
        .then_some(())
        .ok_or(VerifierError::InvalidProof)
    }
}
