//! Commitments and opening proofs for blobs.
//!
//! A blob is 4096 scalars, the evaluations of a polynomial of degree below
//! 4096 over the 4096'th roots of unity, stored in bit-reversed order.

mod errors;
mod fiat_shamir;
mod prover;
mod trusted_setup;
mod verifier;

pub use errors::{Error, ErrorKind, SerializationError, VerifierError};
pub use serialization::{constants, types::*};
pub use ::trusted_setup::TrustedSetup;

#[rustfmt::skip]
// Note: adding rustfmt::skip so that `cargo fmt` does not mix the
// public re-exported types with the following private imports.
use kzg_single_open::{prover::Prover, verifier::Verifier};
use serialization::constants::FIELD_ELEMENTS_PER_BLOB;
use crate::trusted_setup::{commit_key_from_setup, verification_key_from_setup};

/// Prover and verifier state for blob proofs, built once from a setup.
#[derive(Debug)]
pub struct Context {
    prover: Prover,
    verifier: Verifier,
}

impl Context {
    pub fn new(trusted_setup: &TrustedSetup) -> Self {
        Self {
            prover: Prover::new(
                FIELD_ELEMENTS_PER_BLOB,
                commit_key_from_setup(trusted_setup),
            ),
            verifier: Verifier::new(
                FIELD_ELEMENTS_PER_BLOB,
                verification_key_from_setup(trusted_setup),
            ),
        }
    }
}
