use bls12_381::{lincomb::g1_lincomb, G1Point, G1Projective, G2Point, Scalar};

/// The setup points needed to check openings over cosets of size `coset_size`.
#[derive(Clone, Debug)]
pub struct VerificationKey {
    /// `[τ^i]₁` for `i < coset_size`, enough to commit to an interpolation polynomial.
    pub g1s: Vec<G1Point>,
    /// `[τ^i]₂` for `i <= coset_size`.
    pub g2s: Vec<G2Point>,
    /// Number of points a single proof attests to.
    pub coset_size: usize,
    /// Number of coefficients of the committed polynomials.
    pub num_coefficients_in_polynomial: usize,
}

impl VerificationKey {
    /// # Panics
    ///
    /// Panics if there are fewer than `coset_size` G1 points or fewer than
    /// `coset_size + 1` G2 points.
    pub fn new(
        g1s: Vec<G1Point>,
        g2s: Vec<G2Point>,
        coset_size: usize,
        num_coefficients_in_polynomial: usize,
    ) -> Self {
        assert!(
            g1s.len() >= coset_size,
            "need {coset_size} g1 points to commit to interpolation polynomials, found {}",
            g1s.len()
        );
        assert!(
            g2s.len() > coset_size,
            "need [τ^{coset_size}]₂, found only {} g2 points",
            g2s.len()
        );

        Self {
            g1s,
            g2s,
            coset_size,
            num_coefficients_in_polynomial,
        }
    }

    pub fn g2_gen(&self) -> G2Point {
        self.g2s[0]
    }

    /// `[τ^coset_size]₂`, the commitment to the vanishing polynomial's leading term.
    pub fn tau_pow_coset_size(&self) -> G2Point {
        self.g2s[self.coset_size]
    }

    /// Commits to a polynomial in coefficient form using the G1 points.
    pub fn commit_g1(&self, coefficients: &[Scalar]) -> G1Projective {
        assert!(coefficients.len() <= self.g1s.len());
        g1_lincomb(&self.g1s[..coefficients.len()], coefficients)
            .expect("number of points and coefficients are equal")
    }
}
