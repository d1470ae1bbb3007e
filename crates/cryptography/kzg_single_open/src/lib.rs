//! KZG commitments to polynomials given by their evaluations over a
//! roots-of-unity domain, together with single-point opening proofs.
//!
//! Everything in this crate works on evaluations in natural domain order.
//! Callers holding bit-reversed data must reorder it first.

mod errors;
pub mod evaluation;
pub mod prover;
pub mod verifier;

pub use errors::VerifierError;
