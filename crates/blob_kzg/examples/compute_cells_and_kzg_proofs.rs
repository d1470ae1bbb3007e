use std::time::Instant;

use blob_kzg::{
    constants::{BYTES_PER_BLOB, FIELD_ELEMENTS_PER_BLOB, NUM_G2_POINTS},
    Context, TrustedSetup, UsePrecomp,
};
use bls12_381::{compute_powers, g1_batch_normalize, traits::*, G1Projective, G2Projective, Scalar};
use polynomial::domain::Domain;
use tracing_forest::{util::LevelFilter, ForestLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

// Built from a known secret; never use it outside of demos.
fn insecure_setup() -> TrustedSetup {
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
    .expect("setup has the right number of points")
}

fn dummy_blob() -> Box<[u8; BYTES_PER_BLOB]> {
    let blob: Vec<u8> = (0..FIELD_ELEMENTS_PER_BLOB)
        .flat_map(|i| (-Scalar::from(i as u64)).to_bytes_be())
        .collect();
    blob.into_boxed_slice()
        .try_into()
        .expect("blob has the right length")
}

fn main() {
    let ctx = Context::new(&insecure_setup(), UsePrecomp::Yes { width: 8 });
    let blob = dummy_blob();

    println!("Warming up for 3 seconds...");

    let start = Instant::now();
    while start.elapsed().as_secs() < 3 {
        ctx.compute_cells_and_kzg_proofs(&blob)
            .expect("failed to compute cells and proofs");
    }

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let commitment = ctx
        .blob_to_kzg_commitment(&blob)
        .expect("failed to commit to blob");
    let (_, proofs) = ctx
        .compute_cells_and_kzg_proofs(&blob)
        .expect("failed to compute cells and proofs");

    println!("commitment: 0x{}", hex::encode(commitment));
    println!("first cell proof: 0x{}", hex::encode(proofs[0]));
}
