//! Reference openings computed by dividing the polynomial by each coset's
//! vanishing polynomial directly. Only used to check FK20 against.

use bls12_381::{traits::*, G1Point, Scalar};
use polynomial::{domain::Domain, poly_coeff::PolyCoeff, reverse_bit_order};

use crate::{commit_key::CommitKey, fk20::cosets::coset_gens};

/// Divides `f` by `X^l - z`, returning the quotient and remainder.
pub(crate) fn divide_by_coset_vanishing(
    polynomial: &[Scalar],
    l: usize,
    z: Scalar,
) -> (Vec<Scalar>, Vec<Scalar>) {
    let mut remainder = polynomial.to_vec();
    if remainder.len() <= l {
        return (Vec::new(), remainder);
    }

    let mut quotient = vec![Scalar::ZERO; remainder.len() - l];
    for i in (l..remainder.len()).rev() {
        let lead = remainder[i];
        quotient[i - l] = lead;
        remainder[i - l] += lead * z;
        remainder[i] = Scalar::ZERO;
    }
    remainder.truncate(l);
    (quotient, remainder)
}

/// Proofs and evaluations for every coset, in bit-reversed coset order.
pub(crate) fn open_all_cosets(
    commit_key: &CommitKey,
    polynomial: &PolyCoeff,
    coset_size: usize,
    num_points: usize,
) -> (Vec<G1Point>, Vec<Vec<Scalar>>) {
    let num_cosets = num_points / coset_size;
    let subgroup = Domain::new(coset_size);

    coset_gens(num_points, num_cosets, true)
        .into_iter()
        .map(|gen| {
            let z = gen.pow_vartime([coset_size as u64]);
            let (quotient, _) = divide_by_coset_vanishing(polynomial, coset_size, z);
            let proof = commit_key.commit_g1(&quotient).to_affine();

            let mut evaluations: Vec<Scalar> = subgroup
                .roots
                .iter()
                .map(|root| polynomial.eval(&(gen * root)))
                .collect();
            reverse_bit_order(&mut evaluations);

            (proof, evaluations)
        })
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_identity_holds() {
        let s = |x: u64| Scalar::from(x);
        let polynomial: Vec<Scalar> = (1..=11).map(s).collect();
        let l = 4;
        let z = s(5);

        let (quotient, remainder) = divide_by_coset_vanishing(&polynomial, l, z);
        assert_eq!(quotient.len(), polynomial.len() - l);
        assert_eq!(remainder.len(), l);

        let x = s(17);
        let f = PolyCoeff(polynomial).eval(&x);
        let q = PolyCoeff(quotient).eval(&x);
        let r = PolyCoeff(remainder).eval(&x);
        assert_eq!(f, q * (x.pow_vartime([l as u64]) - z) + r);
    }
}
