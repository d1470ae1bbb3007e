use std::{collections::HashSet, ops::Deref};

use bls12_381::{
    batch_inversion::batch_inverse,
    ff::{Field, PrimeField},
    Scalar,
};
use polynomial::{
    coset_fft::CosetFFT,
    domain::Domain,
    poly_coeff::{vanishing_poly, PolyCoeff},
};

use crate::errors::RSError;

/// Offsets, inside each block, of the symbols that are missing.
///
/// The codeword is viewed as `num_blocks` consecutive blocks of `block_size`
/// symbols. An offset `b` in this list means symbol `b` is missing from every
/// block, i.e. every codeword index congruent to `b` modulo `block_size`.
#[derive(Debug, Clone, Default)]
pub struct BlockErasures(pub Vec<usize>);

impl Deref for BlockErasures {
    type Target = Vec<usize>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Where the erasures in a received codeword are.
enum Erasures {
    Blocks(BlockErasures),
    #[cfg(test)]
    Positions(Vec<usize>),
}

/// A Reed-Solomon code whose codewords are the evaluations of a polynomial with
/// `poly_len` coefficients over a domain `expansion_factor` times larger.
#[derive(Debug)]
pub struct ReedSolomon {
    poly_len: usize,
    expansion_factor: usize,
    block_size: usize,
    num_blocks: usize,
    evaluation_domain: Domain,
    block_size_domain: Domain,
    /// Shift of a coset on which the vanishing polynomial has no roots
    fft_coset_gen: CosetFFT,
}

impl ReedSolomon {
    pub fn new(poly_len: usize, expansion_factor: usize, block_size: usize) -> Self {
        assert!(
            poly_len.is_power_of_two()
                && expansion_factor.is_power_of_two()
                && block_size.is_power_of_two(),
            "reed-solomon parameters must be powers of two"
        );

        let codeword_length = poly_len * expansion_factor;
        assert!(block_size <= codeword_length);

        Self {
            poly_len,
            expansion_factor,
            block_size,
            num_blocks: codeword_length / block_size,
            evaluation_domain: Domain::new(codeword_length),
            block_size_domain: Domain::new(block_size),
            fft_coset_gen: CosetFFT::new(Scalar::MULTIPLICATIVE_GENERATOR),
        }
    }

    pub const fn codeword_length(&self) -> usize {
        self.poly_len * self.expansion_factor
    }

    /// The number of missing symbols after which the polynomial is no longer determined.
    const fn acceptable_num_erasures(&self) -> usize {
        self.codeword_length() - self.poly_len
    }

    pub const fn acceptable_num_block_erasures(&self) -> usize {
        self.acceptable_num_erasures() / self.num_blocks
    }

    /// Evaluates the polynomial over the codeword domain, in natural order.
    pub fn encode(&self, poly_coefficient_form: PolyCoeff) -> Result<Vec<Scalar>, RSError> {
        if poly_coefficient_form.len() > self.poly_len {
            return Err(RSError::PolynomialHasTooManyCoefficients {
                num_coefficients: poly_coefficient_form.len(),
                max_num_coefficients: self.poly_len,
            });
        }
        Ok(self.evaluation_domain.fft_scalars(poly_coefficient_form))
    }

    /// Recovers the polynomial from a codeword whose erased symbols are
    /// described by `erasures`.
    ///
    /// The values at erased positions are ignored, callers usually set them to zero.
    pub fn recover_polynomial_coefficient(
        &self,
        codeword_with_erasures: Vec<Scalar>,
        erasures: BlockErasures,
    ) -> Result<PolyCoeff, RSError> {
        self.recover(codeword_with_erasures, Erasures::Blocks(erasures))
    }

    fn validate_block_erasures(&self, erasures: &BlockErasures) -> Result<(), RSError> {
        let mut seen = HashSet::with_capacity(erasures.len());
        for &block_index in erasures.iter() {
            if block_index >= self.block_size {
                return Err(RSError::InvalidBlockIndex {
                    block_index,
                    block_size: self.block_size,
                });
            }
            if !seen.insert(block_index) {
                return Err(RSError::DuplicateBlockIndex { block_index });
            }
        }

        if erasures.len() > self.acceptable_num_block_erasures() {
            return Err(RSError::TooManyBlockErasures {
                num_block_erasures: erasures.len(),
                max_num_block_erasures_accepted: self.acceptable_num_block_erasures(),
            });
        }

        Ok(())
    }

    /// Builds the polynomial vanishing on every erased position of the codeword.
    ///
    /// `Z_0(X) = prod_b (X - w_B^b)` vanishes on offset `b` of a domain of
    /// size `block_size`. Substituting `X -> X^num_blocks` gives a polynomial
    /// whose roots are all `x` with `x^num_blocks = w_B^b`, which over the
    /// codeword domain are exactly the indices `b + k * block_size`.
    fn block_vanishing_poly(&self, erasures: &BlockErasures) -> PolyCoeff {
        let roots: Vec<_> = erasures
            .iter()
            .map(|&offset| self.block_size_domain.roots[offset])
            .collect();
        let z_first_block = vanishing_poly(&roots);

        let mut z = vec![Scalar::ZERO; self.codeword_length()];
        for (i, coeff) in z_first_block.0.into_iter().enumerate() {
            // i <= erasures.len() < block_size, so the index stays in bounds
            z[i * self.num_blocks] = coeff;
        }

        z.into()
    }

    fn vanishing_poly_for(&self, erasures: Erasures) -> Result<PolyCoeff, RSError> {
        match erasures {
            Erasures::Blocks(blocks) => {
                self.validate_block_erasures(&blocks)?;
                Ok(self.block_vanishing_poly(&blocks))
            }
            #[cfg(test)]
            Erasures::Positions(positions) => {
                assert!(positions.len() <= self.acceptable_num_erasures());
                let roots: Vec<_> = positions
                    .into_iter()
                    .map(|index| self.evaluation_domain.roots[index])
                    .collect();
                Ok(vanishing_poly(&roots))
            }
        }
    }

    /// Erasure decoding.
    ///
    /// With `E` the received evaluations (zero where erased) and `Z` the
    /// vanishing polynomial of the erasures, `E * Z = P * Z` holds on the whole
    /// domain. `(P * Z)` has degree below the domain size, so it is recovered
    /// by an inverse FFT. Dividing by `Z` is done pointwise on a coset where
    /// `Z` has no roots.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn recover(&self, codeword: Vec<Scalar>, erasures: Erasures) -> Result<PolyCoeff, RSError> {
        if codeword.len() != self.codeword_length() {
            return Err(RSError::CodewordHasInvalidLength {
                length: codeword.len(),
                expected: self.codeword_length(),
            });
        }

        let z_coeffs = self.vanishing_poly_for(erasures)?;
        let z_evals = self.evaluation_domain.fft_scalars(z_coeffs.clone());

        let ez_evals: Vec<_> = z_evals
            .into_iter()
            .zip(codeword)
            .map(|(z, e)| z * e)
            .collect();
        let pz_coeffs = self.evaluation_domain.ifft_scalars(ez_evals);

        let pz_coset_evals = self
            .evaluation_domain
            .coset_fft_scalars(pz_coeffs, &self.fft_coset_gen);
        let mut z_coset_evals = self
            .evaluation_domain
            .coset_fft_scalars(z_coeffs, &self.fft_coset_gen);
        // Z has all of its roots in the evaluation domain, none on the coset
        batch_inverse(&mut z_coset_evals);

        let p_coset_evals: Vec<_> = pz_coset_evals
            .into_iter()
            .zip(z_coset_evals)
            .map(|(pz, z_inv)| pz * z_inv)
            .collect();
        let mut p_coeffs = self
            .evaluation_domain
            .coset_ifft_scalars(p_coset_evals, &self.fft_coset_gen);

        if let Some(highest) = p_coeffs.iter().rposition(|c| !bool::from(c.is_zero())) {
            if highest >= self.poly_len {
                return Err(RSError::PolynomialHasInvalidLength {
                    num_coefficients: highest + 1,
                    expected_num_coefficients: self.poly_len,
                });
            }
        }

        p_coeffs.truncate(self.poly_len);
        Ok(p_coeffs)
    }
}
