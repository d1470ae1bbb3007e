#![allow(dead_code)]

use std::sync::OnceLock;

use blob_kzg::{
    constants::{BYTES_PER_BLOB, FIELD_ELEMENTS_PER_BLOB, NUM_G2_POINTS},
    Context, TrustedSetup, UsePrecomp,
};
use bls12_381::{compute_powers, g1_batch_normalize, traits::*, G1Projective, G2Projective, Scalar};
use polynomial::domain::Domain;
use rand::{rngs::StdRng, SeedableRng};

/// A setup whose secret is public. Only for tests.
pub fn create_insecure_setup() -> TrustedSetup {
    let powers = compute_powers(Scalar::from(1337u64), FIELD_ELEMENTS_PER_BLOB);

    let g1_monomial: Vec<_> = powers
        .iter()
        .map(|power| G1Projective::generator() * power)
        .collect();
    let g1_lagrange = Domain::new(FIELD_ELEMENTS_PER_BLOB).ifft_g1(g1_monomial.clone());
    let g2_monomial = powers[..NUM_G2_POINTS]
        .iter()
        .map(|power| (G2Projective::generator() * power).to_affine())
        .collect();

    TrustedSetup::from_points(
        g1_batch_normalize(&g1_monomial),
        g1_batch_normalize(&g1_lagrange),
        g2_monomial,
    )
    .expect("insecure setup has the right number of points")
}

pub fn context() -> &'static Context {
    static CONTEXT: OnceLock<Context> = OnceLock::new();
    CONTEXT.get_or_init(|| Context::new(&create_insecure_setup(), UsePrecomp::No))
}

pub fn blob_from_scalars(scalars: &[Scalar]) -> Box<[u8; BYTES_PER_BLOB]> {
    let bytes: Vec<u8> = scalars.iter().flat_map(|s| s.to_bytes_be()).collect();
    bytes.into_boxed_slice().try_into().unwrap()
}

pub fn random_blob(seed: u64) -> Box<[u8; BYTES_PER_BLOB]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let scalars: Vec<_> = (0..FIELD_ELEMENTS_PER_BLOB)
        .map(|_| Scalar::random(&mut rng))
        .collect();
    blob_from_scalars(&scalars)
}

/// The compressed point at infinity.
pub fn identity_bytes() -> [u8; 48] {
    let mut bytes = [0u8; 48];
    bytes[0] = 0xc0;
    bytes
}
