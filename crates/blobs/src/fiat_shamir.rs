use bls12_381::{compute_powers, reduce_bytes_to_scalar_bias, Scalar};
use serialization::{
    constants::{BYTES_PER_BLOB, BYTES_PER_COMMITMENT, BYTES_PER_FIELD_ELEMENT},
    types::{BlobRef, Bytes48Ref},
};
use sha2::{Digest, Sha256};

/// Computes the evaluation point `z` for a blob proof.
///
/// The hash input is `FSBLOBVERIFY_V1_ || u128(4096) || blob || commitment`,
/// with the degree bound encoded as 16 big-endian bytes.
pub(crate) fn compute_fiat_shamir_challenge(
    blob: BlobRef,
    commitment: Bytes48Ref,
    polynomial_bound: usize,
) -> Scalar {
    const DOMAIN_SEP: &str = "FSBLOBVERIFY_V1_";

    let hash_input_size =
        DOMAIN_SEP.len() + size_of::<u128>() + BYTES_PER_BLOB + BYTES_PER_COMMITMENT;

    let mut hash_input: Vec<u8> = Vec::with_capacity(hash_input_size);
    hash_input.extend(DOMAIN_SEP.as_bytes());
    hash_input.extend((polynomial_bound as u128).to_be_bytes());
    hash_input.extend(blob);
    hash_input.extend(commitment);
    assert_eq!(hash_input.len(), hash_input_size);

    hash_to_scalar(&hash_input)
}

/// Computes the powers `r^0, ..., r^{n-1}` used to fold `n` openings into one check.
///
/// `r` is the hash of `RCKZGBATCH___V1_ || u64(4096) || u64(n)` followed by
/// `commitment || z || y || proof` for every opening.
pub(crate) fn compute_r_powers_for_verify_kzg_proof_batch(
    polynomial_bound: usize,
    commitments: &[Bytes48Ref],
    zs: &[Scalar],
    ys: &[Scalar],
    proofs: &[Bytes48Ref],
) -> Vec<Scalar> {
    const DOMAIN_SEP: &str = "RCKZGBATCH___V1_";

    let n = commitments.len();
    let hash_input_size = DOMAIN_SEP.len()
        + 2 * size_of::<u64>()
        + n * (2 * BYTES_PER_COMMITMENT + 2 * BYTES_PER_FIELD_ELEMENT);

    let mut hash_input: Vec<u8> = Vec::with_capacity(hash_input_size);
    hash_input.extend(DOMAIN_SEP.as_bytes());
    hash_input.extend((polynomial_bound as u64).to_be_bytes());
    hash_input.extend((n as u64).to_be_bytes());

    for (((commitment, z), y), proof) in commitments.iter().zip(zs).zip(ys).zip(proofs) {
        hash_input.extend(*commitment);
        hash_input.extend(z.to_bytes_be());
        hash_input.extend(y.to_bytes_be());
        hash_input.extend(*proof);
    }
    assert_eq!(hash_input.len(), hash_input_size);

    let r = hash_to_scalar(&hash_input);
    compute_powers(r, n)
}

fn hash_to_scalar(hash_input: &[u8]) -> Scalar {
    let mut hasher = Sha256::new();
    hasher.update(hash_input);
    let result: [u8; 32] = hasher.finalize().into();

    // Biased, but only 128 bits of the challenge need to be uniform.
    reduce_bytes_to_scalar_bias(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serialization::constants::{BYTES_PER_G1_POINT, FIELD_ELEMENTS_PER_BLOB};

    #[test]
    fn blob_challenge_depends_on_every_input() {
        let blob = vec![0u8; BYTES_PER_BLOB];
        let blob: BlobRef = blob.as_slice().try_into().unwrap();
        let mut other_blob = blob.to_vec();
        other_blob[BYTES_PER_BLOB - 1] = 1;
        let other_blob: BlobRef = other_blob.as_slice().try_into().unwrap();

        let commitment = [0xc0u8; BYTES_PER_G1_POINT];
        let other_commitment = [0xc1u8; BYTES_PER_G1_POINT];

        let z = compute_fiat_shamir_challenge(blob, &commitment, FIELD_ELEMENTS_PER_BLOB);
        assert_eq!(
            z,
            compute_fiat_shamir_challenge(blob, &commitment, FIELD_ELEMENTS_PER_BLOB)
        );
        assert_ne!(
            z,
            compute_fiat_shamir_challenge(other_blob, &commitment, FIELD_ELEMENTS_PER_BLOB)
        );
        assert_ne!(
            z,
            compute_fiat_shamir_challenge(blob, &other_commitment, FIELD_ELEMENTS_PER_BLOB)
        );
        assert_ne!(z, compute_fiat_shamir_challenge(blob, &commitment, 2048));
    }

    #[test]
    fn batch_weights_are_powers_of_one_challenge() {
        let commitment = [0xc0u8; BYTES_PER_G1_POINT];
        let proof = [0xc0u8; BYTES_PER_G1_POINT];
        let zs = [Scalar::from(2u64), Scalar::from(3u64), Scalar::from(4u64)];
        let ys = [Scalar::from(5u64), Scalar::from(6u64), Scalar::from(7u64)];

        let r_powers = compute_r_powers_for_verify_kzg_proof_batch(
            FIELD_ELEMENTS_PER_BLOB,
            &[&commitment; 3],
            &zs,
            &ys,
            &[&proof; 3],
        );

        assert_eq!(r_powers.len(), 3);
        assert_eq!(r_powers[0], Scalar::from(1u64));
        assert_eq!(r_powers[2], r_powers[1] * r_powers[1]);

        let mut swapped_ys = ys;
        swapped_ys.swap(0, 1);
        let other = compute_r_powers_for_verify_kzg_proof_batch(
            FIELD_ELEMENTS_PER_BLOB,
            &[&commitment; 3],
            &zs,
            &swapped_ys,
            &[&proof; 3],
        );
        assert_ne!(r_powers[1], other[1]);
    }
}
