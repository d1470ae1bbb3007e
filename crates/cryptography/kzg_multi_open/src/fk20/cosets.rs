use bls12_381::{traits::*, Scalar};
use polynomial::{domain::Domain, reverse_bit_order, reverse_bits};

/// Shifts `h_k` of the cosets `h_k·H` that partition a domain of size
/// `num_points` into `num_cosets` cosets of the subgroup `H`.
///
/// In natural order `h_k = w^k` with `w` generating the full domain. With
/// `bit_reversed` set, `h_k = w^{reverse_bits(k)}`, which is the order the
/// cosets appear in once the full evaluation vector is bit-reversed.
pub fn coset_gens(num_points: usize, num_cosets: usize, bit_reversed: bool) -> Vec<Scalar> {
    assert!(
        num_cosets.is_power_of_two() && num_cosets <= num_points,
        "invalid number of cosets {num_cosets} for a domain of size {num_points}"
    );
    let generator = Domain::new(num_points).generator;
    let log_num_cosets = num_cosets.trailing_zeros();

    (0..num_cosets)
        .map(|k| {
            let exponent = if bit_reversed {
                reverse_bits(k, log_num_cosets)
            } else {
                k
            };
            generator.pow_vartime([exponent as u64])
        })
        .collect()
}

/// Lays coset evaluations, given in bit-reversed order, back out over the full
/// domain in natural order.
///
/// `coset_evaluations[i]` is placed as chunk `coset_indices[i]` of the
/// bit-reversed evaluation vector, which is then bit-reversed. Missing chunks
/// are zero. Chunk `k` lands on every position congruent to
/// `reverse_bits(k, log2(num_cosets))` modulo `num_cosets`, and these residues
/// are returned along with the evaluations.
///
/// Returns `None` when no cosets are given, when the cosets differ in length or
/// do not divide the domain, or when an index is out of range. Duplicate indices
/// are the caller's concern.
pub fn recover_evaluations_in_domain_order(
    domain_size: usize,
    coset_indices: &[usize],
    coset_evaluations: &[Vec<Scalar>],
) -> Option<(Vec<usize>, Vec<Scalar>)> {
    if coset_indices.is_empty() || coset_indices.len() != coset_evaluations.len() {
        return None;
    }

    let coset_len = coset_evaluations[0].len();
    if coset_len == 0
        || !domain_size.is_power_of_two()
        || domain_size % coset_len != 0
        || coset_evaluations.iter().any(|coset| coset.len() != coset_len)
    {
        return None;
    }

    let num_cosets = domain_size / coset_len;
    if coset_indices.iter().any(|&index| index >= num_cosets) {
        return None;
    }

    let mut elements = vec![Scalar::ZERO; domain_size];
    for (&index, evaluations) in coset_indices.iter().zip(coset_evaluations) {
        let start = index * coset_len;
        elements[start..start + coset_len].copy_from_slice(evaluations);
    }
    reverse_bit_order(&mut elements);

    let log_num_cosets = num_cosets.trailing_zeros();
    let residues = coset_indices
        .iter()
        .map(|&index| reverse_bits(index, log_num_cosets))
        .collect();

    Some((residues, elements))
}
