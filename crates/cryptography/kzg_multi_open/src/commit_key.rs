use bls12_381::{lincomb::g1_lincomb, G1Point, G1Projective, Scalar};

/// Powers of the secret in G1, `[τ^i]₁`, used to commit to polynomials in
/// coefficient form.
#[derive(Debug, Clone)]
pub struct CommitKey {
    pub g1s: Vec<G1Point>,
}

impl CommitKey {
    /// # Panics
    ///
    /// Panics if `g1s` is empty.
    pub fn new(g1s: Vec<G1Point>) -> Self {
        assert!(
            !g1s.is_empty(),
            "cannot initialize `CommitKey` with no g1 points"
        );
        Self { g1s }
    }

    /// Returns `[p(τ)]₁` for `p` given by its coefficients.
    ///
    /// # Panics
    ///
    /// Panics if the polynomial has more coefficients than the key has points.
    pub fn commit_g1(&self, coefficients: &[Scalar]) -> G1Projective {
        assert!(
            coefficients.len() <= self.g1s.len(),
            "polynomial has {} coefficients but the commit key only has {} points",
            coefficients.len(),
            self.g1s.len()
        );
        g1_lincomb(&self.g1s[..coefficients.len()], coefficients)
            .expect("number of points and coefficients are equal")
    }
}
