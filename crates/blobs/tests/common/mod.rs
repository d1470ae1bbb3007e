#![allow(dead_code)]

use std::sync::OnceLock;

use blob_kzg_blobs::{
    constants::{BYTES_PER_BLOB, FIELD_ELEMENTS_PER_BLOB},
    Context, TrustedSetup,
};
use bls12_381::{
    batch_inversion::batch_inverse, compute_powers, g1_batch_normalize, traits::*, G1Projective,
    G2Projective, Scalar,
};
use polynomial::domain::Domain;
use rand::{rngs::StdRng, SeedableRng};
use serialization::constants::NUM_G2_POINTS;

/// A setup whose secret is public. Only for tests.
///
/// The Lagrange points are computed from `L_i(τ) = ω^i (τ^n - 1) / (n (τ - ω^i))`
/// instead of with a G1 FFT.
pub fn create_insecure_setup() -> TrustedSetup {
    let tau = Scalar::from(1337u64);
    let n = FIELD_ELEMENTS_PER_BLOB;
    let domain = Domain::new(n);

    let powers = compute_powers(tau, n);
    let g1_monomial: Vec<_> = powers
        .iter()
        .map(|power| G1Projective::generator() * power)
        .collect();

    let vanishing_at_tau = tau.pow_vartime([n as u64]) - Scalar::ONE;
    let mut denominators: Vec<_> = domain
        .roots
        .iter()
        .map(|root| (tau - root) * Scalar::from(n as u64))
        .collect();
    batch_inverse(&mut denominators);
    let g1_lagrange: Vec<_> = domain
        .roots
        .iter()
        .zip(&denominators)
        .map(|(root, inv)| G1Projective::generator() * (*root * vanishing_at_tau * inv))
        .collect();

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
    CONTEXT.get_or_init(|| Context::new(&create_insecure_setup()))
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

pub fn random_scalar_bytes(seed: u64) -> [u8; 32] {
    Scalar::random(StdRng::seed_from_u64(seed)).to_bytes_be()
}

/// The compressed point at infinity.
pub fn identity_bytes() -> [u8; 48] {
    let mut bytes = [0u8; 48];
    bytes[0] = 0xc0;
    bytes
}
