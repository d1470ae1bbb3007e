use blob_kzg::{
    constants::{BYTES_PER_BLOB, CELLS_PER_EXT_BLOB, FIELD_ELEMENTS_PER_BLOB, NUM_G2_POINTS},
    Bytes48Ref, CellIndex, CellRef, Context, RowIndex, TrustedSetup, UsePrecomp,
};
use bls12_381::{compute_powers, g1_batch_normalize, traits::*, G1Projective, G2Projective, Scalar};
use criterion::{criterion_group, criterion_main, Criterion};
use polynomial::domain::Domain;
use rand::{rngs::StdRng, SeedableRng};

fn insecure_setup() -> TrustedSetup {
    let secret = Scalar::random(&mut StdRng::seed_from_u64(0));
    let powers = compute_powers(secret, FIELD_ELEMENTS_PER_BLOB);

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

pub fn bench_init_context(c: &mut Criterion) {
    let setup = insecure_setup();

    c.bench_function("init context", |b| {
        b.iter(|| Context::new(&setup, UsePrecomp::No));
    });
    c.bench_function("init context with precomputation", |b| {
        b.iter(|| Context::new(&setup, UsePrecomp::Yes { width: 8 }));
    });
}

pub fn bench_cells(c: &mut Criterion) {
    let setup = insecure_setup();
    let blob = dummy_blob();

    for (name, use_precomp) in [
        ("no precomputation", UsePrecomp::No),
        ("precomputation width 8", UsePrecomp::Yes { width: 8 }),
    ] {
        let ctx = Context::new(&setup, use_precomp);
        c.bench_function(&format!("compute_cells_and_kzg_proofs - {name}"), |b| {
            b.iter(|| ctx.compute_cells_and_kzg_proofs(&blob));
        });
    }

    let ctx = Context::new(&setup, UsePrecomp::No);
    c.bench_function("compute_cells", |b| {
        b.iter(|| ctx.compute_cells(&blob));
    });

    let cells = ctx.compute_cells(&blob).expect("blob is canonical");
    let cell_refs: Vec<CellRef> = cells.iter().map(|cell| &**cell).collect();
    c.bench_function("cells_to_blob", |b| {
        b.iter(|| ctx.cells_to_blob(&cell_refs));
    });
}

pub fn bench_recover_cells_and_kzg_proofs(c: &mut Criterion) {
    let ctx = Context::new(&insecure_setup(), UsePrecomp::No);
    let cells = ctx.compute_cells(&dummy_blob()).expect("blob is canonical");

    // Worst case: only the extension survives.
    let indices: Vec<CellIndex> =
        (CELLS_PER_EXT_BLOB as u64 / 2..CELLS_PER_EXT_BLOB as u64).collect();
    let half: Vec<CellRef> = indices.iter().map(|&i| &*cells[i as usize]).collect();

    c.bench_function("recover_cells_and_kzg_proofs - half missing", |b| {
        b.iter(|| ctx.recover_cells_and_kzg_proofs(&indices, &half));
    });
}

pub fn bench_verify_cell_kzg_proof_batch(c: &mut Criterion) {
    let ctx = Context::new(&insecure_setup(), UsePrecomp::No);
    let blob = dummy_blob();
    let commitment = ctx.blob_to_kzg_commitment(&blob).expect("blob is canonical");
    let (cells, proofs) = ctx
        .compute_cells_and_kzg_proofs(&blob)
        .expect("blob is canonical");

    let row_indices: Vec<RowIndex> = vec![0; CELLS_PER_EXT_BLOB];
    let cell_indices: Vec<CellIndex> = (0..CELLS_PER_EXT_BLOB as u64).collect();
    let cell_refs: Vec<CellRef> = cells.iter().map(|cell| &**cell).collect();
    let proof_refs: Vec<Bytes48Ref> = proofs.iter().collect();

    c.bench_function("verify_cell_kzg_proof_batch - one blob", |b| {
        b.iter(|| {
            ctx.verify_cell_kzg_proof_batch(
                &[&commitment],
                &row_indices,
                &cell_indices,
                &cell_refs,
                &proof_refs,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_init_context,
    bench_cells,
    bench_recover_cells_and_kzg_proofs,
    bench_verify_cell_kzg_proof_batch
);
criterion_main!(benches);
