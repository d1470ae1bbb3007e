use blob_kzg_bls12_381::{
    batch_inversion::batch_inverse,
    ff::Field,
    fixed_base_msm::{FixedBaseMSM, UsePrecomp},
    group::Group,
    lincomb::g1_lincomb,
    G1Point, G1Projective, Scalar,
};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

fn random_inputs(length: usize) -> (Vec<G1Point>, Vec<Scalar>) {
    let mut rng = StdRng::seed_from_u64(5);
    let points = (0..length)
        .map(|_| G1Projective::random(&mut rng).into())
        .collect();
    let scalars = (0..length).map(|_| Scalar::random(&mut rng)).collect();
    (points, scalars)
}

pub fn bench_batch_inversion(c: &mut Criterion) {
    const NUM_ELEMENTS: usize = 8192;
    let (_, elements) = random_inputs(NUM_ELEMENTS);

    c.bench_function(&format!("batch_inversion size={NUM_ELEMENTS}"), |b| {
        b.iter(|| {
            let mut elements = elements.clone();
            batch_inverse(&mut elements);
        });
    });
}

pub fn bench_fixed_base_msm(c: &mut Criterion) {
    let (points, scalars) = random_inputs(64);

    for use_precomp in [UsePrecomp::No, UsePrecomp::Yes { width: 8 }] {
        let msm = FixedBaseMSM::new(points.clone(), use_precomp);
        c.bench_function(&format!("fixed_base_msm length=64 {use_precomp:?}"), |b| {
            b.iter(|| msm.msm(&scalars));
        });
    }
}

pub fn bench_g1_lincomb(c: &mut Criterion) {
    let (points, scalars) = random_inputs(4096);
    c.bench_function("g1_lincomb length=4096", |b| {
        b.iter(|| g1_lincomb(&points, &scalars));
    });
}

criterion_group!(
    benches,
    bench_batch_inversion,
    bench_fixed_base_msm,
    bench_g1_lincomb
);
criterion_main!(benches);
