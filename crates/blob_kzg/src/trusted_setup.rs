use ::trusted_setup::TrustedSetup;
use kzg_multi_open::{commit_key::CommitKey, verification_key::VerificationKey};

use crate::constants::{FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_CELL, NUM_G2_POINTS};

pub(crate) fn commit_key_from_setup(setup: &TrustedSetup) -> CommitKey {
    CommitKey::new(setup.g1_monomial.clone())
}

pub(crate) fn verification_key_from_setup(setup: &TrustedSetup) -> VerificationKey {
    // Committing to a cell's interpolation polynomial needs as many G1
    // powers as there are points in a cell.
    let g1_points = setup.g1_monomial[..NUM_G2_POINTS].to_vec();
    let g2_points = setup.g2_monomial[..NUM_G2_POINTS].to_vec();

    VerificationKey::new(
        g1_points,
        g2_points,
        FIELD_ELEMENTS_PER_CELL,
        FIELD_ELEMENTS_PER_BLOB,
    )
}
