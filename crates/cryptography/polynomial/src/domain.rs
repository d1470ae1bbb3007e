use bls12_381::{
    ff::{Field, PrimeField},
    group::Group,
    G1Projective, Scalar,
};

use crate::{
    coset_fft::CosetFFT,
    fft::{fft_inplace, precompute_twiddles},
    poly_coeff::PolyCoeff,
};

/// A multiplicative subgroup of the scalar field generated by a root of unity.
///
/// Holds the precomputed tables needed to move between coefficient form and
/// evaluation form over the subgroup (or one of its cosets). All evaluation
/// vectors are in natural order, i.e. index `i` corresponds to `generator^i`.
#[derive(Debug, Clone)]
pub struct Domain {
    /// `[1, w, w^2, ..., w^{n-1}]`
    pub roots: Vec<Scalar>,
    pub domain_size: Scalar,
    pub domain_size_inv: Scalar,
    /// Element of order `n`
    pub generator: Scalar,
    pub generator_inv: Scalar,
    twiddles: Vec<Scalar>,
    twiddles_inv: Vec<Scalar>,
}

impl Domain {
    /// Creates the domain of the given size, rounded up to a power of two.
    pub fn new(size: usize) -> Self {
        let size = size.next_power_of_two();

        let generator = Self::compute_generator_for_size(size);
        let generator_inv = generator.invert().expect("generator should not be zero");

        let domain_size = Scalar::from(size as u64);
        let domain_size_inv = domain_size.invert().expect("size should not be zero");

        let mut roots = Vec::with_capacity(size);
        let mut current = Scalar::ONE;
        for _ in 0..size {
            roots.push(current);
            current *= generator;
        }

        Self {
            roots,
            domain_size,
            domain_size_inv,
            generator,
            generator_inv,
            twiddles: precompute_twiddles(generator, size),
            twiddles_inv: precompute_twiddles(generator_inv, size),
        }
    }

    fn compute_generator_for_size(size: usize) -> Scalar {
        let log_size = size.trailing_zeros();
        assert!(
            log_size <= Scalar::S,
            "two adicity is {} but group size needed is 2^{log_size}",
            Scalar::S
        );

        // ROOT_OF_UNITY has order 2^S
        let exponent = 1u64 << (Scalar::S - log_size);
        Scalar::ROOT_OF_UNITY.pow_vartime([exponent])
    }

    pub fn size(&self) -> usize {
        self.roots.len()
    }

    /// Evaluates the polynomial over the domain.
    ///
    /// The polynomial is zero-padded to the domain size; it must not have more
    /// coefficients than the domain has points.
    pub fn fft_scalars(&self, mut polynomial: PolyCoeff) -> Vec<Scalar> {
        assert!(polynomial.len() <= self.size());
        polynomial.resize(self.size(), Scalar::ZERO);

        fft_inplace(&self.twiddles, &mut polynomial);

        polynomial.0
    }

    /// Evaluates the polynomial over the coset `coset.generator * H`.
    pub fn coset_fft_scalars(&self, mut polynomial: PolyCoeff, coset: &CosetFFT) -> Vec<Scalar> {
        let mut scale = Scalar::ONE;
        for coeff in polynomial.iter_mut() {
            *coeff *= scale;
            scale *= coset.generator;
        }

        self.fft_scalars(polynomial)
    }

    /// Interpolates evaluations over the domain into coefficient form.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn ifft_scalars(&self, mut evaluations: Vec<Scalar>) -> PolyCoeff {
        assert!(evaluations.len() <= self.size());
        evaluations.resize(self.size(), Scalar::ZERO);

        fft_inplace(&self.twiddles_inv, &mut evaluations);

        for element in &mut evaluations {
            *element *= self.domain_size_inv;
        }

        evaluations.into()
    }

    /// Interpolates evaluations over the coset `coset.generator * H`.
    pub fn coset_ifft_scalars(&self, evaluations: Vec<Scalar>, coset: &CosetFFT) -> PolyCoeff {
        let mut polynomial = self.ifft_scalars(evaluations);

        let mut scale = Scalar::ONE;
        for coeff in polynomial.iter_mut() {
            *coeff *= scale;
            scale *= coset.generator_inv;
        }

        polynomial
    }

    /// The FFT applied to group elements, i.e. `out_k = sum_j w^{jk} * points_j`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn fft_g1(&self, mut points: Vec<G1Projective>) -> Vec<G1Projective> {
        assert!(points.len() <= self.size());
        points.resize(self.size(), G1Projective::identity());

        fft_inplace(&self.twiddles, &mut points);

        points
    }

    pub fn ifft_g1(&self, points: Vec<G1Projective>) -> Vec<G1Projective> {
        self.ifft_g1_take_n(points, None)
    }

    /// Inverse FFT over group elements, keeping only the first `n` outputs if given.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn ifft_g1_take_n(
        &self,
        mut points: Vec<G1Projective>,
        n: Option<usize>,
    ) -> Vec<G1Projective> {
        assert!(points.len() <= self.size());
        points.resize(self.size(), G1Projective::identity());

        fft_inplace(&self.twiddles_inv, &mut points);

        let out_len = n.unwrap_or(points.len());
        assert!(out_len <= points.len());
        points.truncate(out_len);

        for point in &mut points {
            *point *= self.domain_size_inv;
        }

        points
    }
}
