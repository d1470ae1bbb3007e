use kzg_single_open::{prover::CommitKey, verifier::VerificationKey};
use ::trusted_setup::TrustedSetup;

pub(crate) fn commit_key_from_setup(setup: &TrustedSetup) -> CommitKey {
    CommitKey::new(setup.g1_lagrange.clone())
}

pub(crate) fn verification_key_from_setup(setup: &TrustedSetup) -> VerificationKey {
    VerificationKey::new(
        setup.g1_monomial[0],
        setup.g2_monomial[0],
        setup.g2_monomial[1],
    )
}
