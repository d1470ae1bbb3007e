use std::ops::{Add, Mul, Neg, Sub};

use bls12_381::{ff::Field, group::Group, G1Projective, Scalar};
use maybe_rayon::prelude::*;

/// Values that an FFT over the scalar field can act on.
///
/// Scalars give polynomial evaluation/interpolation; G1 points give the
/// "FFT in the exponent" used to move setup points between bases.
pub(crate) trait FFTElement:
    Sized
    + Send
    + Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Scalar, Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
}

impl FFTElement for Scalar {
    fn zero() -> Self {
        Self::ZERO
    }
}

impl FFTElement for G1Projective {
    fn zero() -> Self {
        Self::identity()
    }
}

/// Iterative radix-2 Cooley-Tukey FFT.
///
/// `twiddles` must be `[1, w, w^2, ..., w^{n/2 - 1}]` where `w` is a primitive
/// `n`-th root of unity and `n = values.len()`. On return `values[k]` holds
/// `sum_j values[j] * w^{jk}`.
pub(crate) fn fft_inplace<T: FFTElement>(twiddles: &[Scalar], values: &mut [T]) {
    let n = values.len();
    if n <= 1 {
        return;
    }
    assert!(n.is_power_of_two(), "fft size must be a power of two");
    assert_eq!(twiddles.len(), n / 2, "expected n/2 twiddle factors");

    reverse_bit_order(values);

    let log_n = log2_pow2(n);
    for layer in 0..log_n {
        let half_block_size = 1 << layer;
        // Twiddles for a block of size 2h are the powers of w^{n/2h}
        let stride = n / (2 * half_block_size);

        values
            .maybe_par_chunks_mut(2 * half_block_size)
            .for_each(|block| {
                let (lo, hi) = block.split_at_mut(half_block_size);
                for (j, (a, b)) in lo.iter_mut().zip(hi).enumerate() {
                    butterfly(a, b, twiddles[j * stride]);
                }
            });
    }
}

#[inline]
fn butterfly<T: FFTElement>(a: &mut T, b: &mut T, twiddle: Scalar) {
    let t = if twiddle == Scalar::ONE {
        *b
    } else if *b == T::zero() {
        T::zero()
    } else {
        *b * twiddle
    };
    *b = *a - t;
    *a = *a + t;
}

/// Reverses the lowest `bits` bits of `n`.
pub const fn reverse_bits(n: usize, bits: u32) -> usize {
    // overflowing_shr handles bits == 0, where the shift amount equals usize::BITS
    n.reverse_bits().overflowing_shr(usize::BITS - bits).0
}

/// Permutes `values` so that the element at index `k` moves to `reverse_bits(k, log2(n))`.
///
/// Panics if the length is not a power of two. The permutation is its own inverse.
pub fn reverse_bit_order<T>(values: &mut [T]) {
    if values.is_empty() {
        return;
    }

    let n = values.len();
    assert!(n.is_power_of_two(), "n must be a power of two");

    let log_n = log2_pow2(n);
    for k in 0..n {
        let rk = reverse_bits(k, log_n);
        if k < rk {
            values.swap(rk, k);
        }
    }
}

pub(crate) const fn log2_pow2(n: usize) -> u32 {
    n.trailing_zeros()
}

/// Returns `[1, w, ..., w^{n/2 - 1}]`.
pub(crate) fn precompute_twiddles(w: Scalar, n: usize) -> Vec<Scalar> {
    let mut twiddles = Vec::with_capacity(n / 2);
    let mut current = Scalar::ONE;
    for _ in 0..n / 2 {
        twiddles.push(current);
        current *= w;
    }
    twiddles
}
