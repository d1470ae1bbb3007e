mod batch_toeplitz;
mod cosets;
mod errors;
mod h_poly;
#[cfg(test)]
mod naive;
mod prover;
mod toeplitz;
mod verifier;

pub use cosets::{coset_gens, recover_evaluations_in_domain_order};
pub use errors::VerifierError;
pub use prover::{FK20Prover as Prover, Input};
pub use verifier::{CommitmentIndex, CosetIndex, FK20Verifier as Verifier};
