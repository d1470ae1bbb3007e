//! KZG openings of a polynomial over many cosets at once.
//!
//! A polynomial with `poly_len` coefficients is evaluated over a domain of
//! `num_points` roots of unity, split into cosets of `coset_size` points. The
//! [`Prover`] produces a proof for every coset with FK20, and the [`Verifier`]
//! checks any batch of coset openings with a single pairing equation.

pub mod commit_key;
pub mod fk20;
pub mod verification_key;

pub use fk20::{
    coset_gens, recover_evaluations_in_domain_order, CommitmentIndex, CosetIndex, Input, Prover,
    Verifier, VerifierError,
};
