use bls12_381::{batch_inversion::batch_inverse, ff::Field, Scalar};
use maybe_rayon::prelude::*;
use polynomial::domain::Domain;

/// Evaluates the polynomial given by `evaluations` (natural order over `domain`) at `z`.
pub fn compute_evaluation(domain: &Domain, evaluations: &[Scalar], z: Scalar) -> Scalar {
    match domain.roots.iter().position(|root| *root == z) {
        Some(index) => evaluations[index],
        None => barycentric_sum(domain, evaluations, z, &inverse_differences(domain, z)),
    }
}

/// Returns `(f(z), q)` where `q` holds the evaluations over `domain` of
/// `q(X) = (f(X) - f(z)) / (X - z)`.
///
/// Works for any `z`, including points of the domain where the
/// division would otherwise hit a zero denominator.
pub fn compute_evaluation_and_quotient(
    domain: &Domain,
    evaluations: &[Scalar],
    z: Scalar,
) -> (Scalar, Vec<Scalar>) {
    assert_eq!(
        evaluations.len(),
        domain.size(),
        "expected one evaluation per domain point"
    );

    match domain.roots.iter().position(|root| *root == z) {
        Some(index) => evaluation_and_quotient_within_domain(domain, evaluations, index),
        None => evaluation_and_quotient_out_of_domain(domain, evaluations, z),
    }
}

/// `1 / (z - w^i)` for every root `w^i`. `z` must not be in the domain.
fn inverse_differences(domain: &Domain, z: Scalar) -> Vec<Scalar> {
    let mut denominators: Vec<_> = (&domain.roots)
        .maybe_into_par_iter()
        .map(|root| z - root)
        .collect();
    batch_inverse(&mut denominators);
    denominators
}

/// Barycentric formula: `f(z) = (z^n - 1) / n * sum_i w^i * f_i / (z - w^i)`.
fn barycentric_sum(
    domain: &Domain,
    evaluations: &[Scalar],
    z: Scalar,
    inverse_differences: &[Scalar],
) -> Scalar {
    let sum: Scalar = (&domain.roots)
        .maybe_into_par_iter()
        .zip(evaluations)
        .zip(inverse_differences)
        .map(|((root, f_i), inv)| *root * f_i * inv)
        .sum();

    let vanishing_at_z = z.pow_vartime([domain.size() as u64]) - Scalar::ONE;
    sum * vanishing_at_z * domain.domain_size_inv
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
fn evaluation_and_quotient_out_of_domain(
    domain: &Domain,
    evaluations: &[Scalar],
    z: Scalar,
) -> (Scalar, Vec<Scalar>) {
    let inverse_differences = inverse_differences(domain, z);
    let y = barycentric_sum(domain, evaluations, z, &inverse_differences);

    // q_i = (f_i - y) / (w^i - z) = (y - f_i) / (z - w^i)
    let quotient = inverse_differences
        .maybe_into_par_iter()
        .zip(evaluations)
        .map(|(inv, f_i)| (y - f_i) * inv)
        .collect();

    (y, quotient)
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
fn evaluation_and_quotient_within_domain(
    domain: &Domain,
    evaluations: &[Scalar],
    index: usize,
) -> (Scalar, Vec<Scalar>) {
    let n = domain.size();
    let z = domain.roots[index];
    let y = evaluations[index];

    // 1 / (w^m - w^j), with a placeholder of one at j = m so the batch inversion succeeds
    let mut denominators: Vec<_> = (&domain.roots)
        .maybe_into_par_iter()
        .enumerate()
        .map(|(j, root)| if j == index { Scalar::ONE } else { z - root })
        .collect();
    batch_inverse(&mut denominators);

    let mut quotient: Vec<_> = denominators
        .maybe_into_par_iter()
        .zip(evaluations)
        .map(|(inv, f_j)| (y - f_j) * inv)
        .collect();

    // q_m = f'(w^m) = -sum_{j != m} q_j * w^{j - m}
    quotient[index] = Scalar::ZERO;
    let q_m: Scalar = (&quotient)
        .maybe_into_par_iter()
        .enumerate()
        .map(|(j, q_j)| *q_j * domain.roots[(n + j - index) % n])
        .sum();
    quotient[index] = -q_m;

    (y, quotient)
}
