use bls12_381::{lincomb::g1_lincomb, G1Point, Scalar};
use polynomial::domain::Domain;

use crate::evaluation::compute_evaluation_and_quotient;

/// The setup points `[L_i(τ)]₁` for the Lagrange basis of the domain, in natural order.
#[derive(Debug, Clone)]
pub struct CommitKey {
    pub g1_lagrange: Vec<G1Point>,
}

impl CommitKey {
    pub fn new(g1_lagrange: Vec<G1Point>) -> Self {
        assert!(
            !g1_lagrange.is_empty(),
            "cannot initialize `CommitKey` with no g1 points"
        );
        Self { g1_lagrange }
    }

    /// Commits to the polynomial whose evaluations over the domain are `evaluations`.
    ///
    /// `evaluations` may be shorter than the key, missing values are zero.
    pub fn commit_g1(&self, evaluations: &[Scalar]) -> G1Point {
        assert!(
            evaluations.len() <= self.g1_lagrange.len(),
            "polynomial has more evaluations than the commit key has points"
        );
        g1_lincomb(&self.g1_lagrange[..evaluations.len()], evaluations)
            .expect("number of points and scalars are equal")
            .into()
    }
}

#[derive(Debug)]
pub struct Prover {
    pub domain: Domain,
    pub commit_key: CommitKey,
}

impl Prover {
    pub fn new(domain_size: usize, commit_key: CommitKey) -> Self {
        let domain = Domain::new(domain_size);
        assert_eq!(
            domain.size(),
            commit_key.g1_lagrange.len(),
            "commit key must have one point per domain element"
        );
        Self { domain, commit_key }
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn commit(&self, evaluations: &[Scalar]) -> G1Point {
        self.commit_key.commit_g1(evaluations)
    }

    /// Opens the polynomial at `z`, returning the proof and `f(z)`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_kzg_proof(&self, evaluations: &[Scalar], z: Scalar) -> (G1Point, Scalar) {
        let (y, quotient) = compute_evaluation_and_quotient(&self.domain, evaluations, z);

        let proof = {
            #[cfg(feature = "tracing")]
            let _span = tracing::info_span!("commit quotient").entered();
            self.commit_key.commit_g1(&quotient)
        };

        (proof, y)
    }
}
