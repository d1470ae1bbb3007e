use bls12_381::{ff::Field, Scalar};

/// The shift `g` of a coset `g·H` of a domain `H`, together with its inverse.
///
/// A coset FFT evaluates `f(g·x)` over `H`, which is the same as evaluating
/// `f` over `g·H`.
#[derive(Debug, Clone)]
pub struct CosetFFT {
    pub generator: Scalar,
    pub generator_inv: Scalar,
}

impl CosetFFT {
    pub fn new(generator: Scalar) -> Self {
        Self {
            generator,
            generator_inv: generator
                .invert()
                .expect("coset generator must be non-zero"),
        }
    }
}
