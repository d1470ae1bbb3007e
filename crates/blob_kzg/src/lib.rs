//! KZG commitments over BLS12-381 for blobs and their erasure-coded cells.
//!
//! A [`Context`] built from a [`TrustedSetup`] commits to blobs, opens and
//! verifies them at single points, extends them into 128 cells with a proof
//! per cell, recovers all cells from any half of them, and verifies cell
//! proofs in batch.

#[cfg(all(feature = "singlethreaded", feature = "multithreaded"))]
compile_error!("`singlethreaded` and `multithreaded` cannot be enabled simultaneously");

mod blob_methods;
mod errors;
mod prover;
mod recovery;
mod shared;
mod trusted_setup;
mod verifier;

pub use bls12_381::fixed_base_msm::UsePrecomp;
pub use errors::{Error, ErrorKind, ProverError, RecoveryError, VerifierError};
pub use serialization::{constants, types::*, SerializationError};
pub use shared::SharedContext;
/// The powers-of-tau points every proof is made and checked against.
pub use ::trusted_setup::{SetupError, TrustedSetup};

use prover::ProverContext;
use verifier::VerifierContext;

/// Everything needed to prove and verify, derived once from a setup.
///
/// The context is immutable and can be shared between threads.
#[derive(Debug)]
pub struct Context {
    prover_ctx: ProverContext,
    verifier_ctx: VerifierContext,
    blob_ctx: blobs::Context,
}

impl Context {
    /// Builds a context from `trusted_setup`.
    ///
    /// `use_precomp` selects whether the cell prover precomputes fixed-base
    /// tables for its multi-scalar multiplications. `UsePrecomp::Yes { width: 8 }`
    /// speeds up `compute_cells_and_kzg_proofs` at the cost of memory.
    pub fn new(trusted_setup: &TrustedSetup, use_precomp: UsePrecomp) -> Self {
        Self {
            prover_ctx: ProverContext::new(trusted_setup, use_precomp),
            verifier_ctx: VerifierContext::new(trusted_setup),
            blob_ctx: blobs::Context::new(trusted_setup),
        }
    }
}
