use ff::PrimeField;
use group::Group;

use crate::{g1_batch_normalize, lincomb::g1_lincomb, G1Point, G1Projective, Scalar};

/// UsePrecomp indicates whether we should use pre-computations to speed up the MSM
/// and the level of precomputation to perform.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UsePrecomp {
    /// Precompute `2^width - 1` multiples of every base point.
    Yes { width: usize },
    No,
}

/// FixedBaseMSM computes a multi scalar multiplication where the points are known beforehand.
///
/// Since the points are known, one can choose to precompute multiples of the points
/// in order to reduce the amount of work needed to compute the MSM, at the cost
/// of memory.
#[derive(Debug)]
pub enum FixedBaseMSM {
    Precomp(FixedBaseMSMPrecompWindow),
    NoPrecomp(Vec<G1Point>),
}

impl FixedBaseMSM {
    pub fn new(generators: Vec<G1Point>, use_precomp: UsePrecomp) -> Self {
        match use_precomp {
            UsePrecomp::Yes { width } => {
                Self::Precomp(FixedBaseMSMPrecompWindow::new(&generators, width))
            }
            UsePrecomp::No => Self::NoPrecomp(generators),
        }
    }

    /// Panics if the number of scalars does not match the number of generators.
    pub fn msm(&self, scalars: &[Scalar]) -> G1Projective {
        match self {
            Self::Precomp(precomp) => precomp.msm(scalars),
            Self::NoPrecomp(generators) => g1_lincomb(generators, scalars)
                .expect("number of generators and scalars should be equal"),
        }
    }
}

/// Fixed-window MSM over precomputed multiples.
///
/// For every base point `P` the table stores `P, 2P, ..., (2^wbits - 1)P`.
/// A scalar is split into `wbits`-bit digits, and each non-zero digit costs a
/// single mixed addition. The windows are combined with Horner's rule, so the
/// doublings are shared by all points.
///
/// Memory is `num_points * (2^wbits - 1)` affine points.
#[derive(Debug)]
pub struct FixedBaseMSMPrecompWindow {
    table: Vec<Vec<G1Point>>,
    wbits: usize,
}

impl FixedBaseMSMPrecompWindow {
    pub fn new(points: &[G1Point], wbits: usize) -> Self {
        assert!(
            (1..=16).contains(&wbits),
            "window width must be between 1 and 16 bits, found {wbits}"
        );

        let table = points
            .iter()
            .map(|point| Self::precompute_multiples(*point, wbits))
            .collect();

        Self { table, wbits }
    }

    fn precompute_multiples(point: G1Point, wbits: usize) -> Vec<G1Point> {
        let num_multiples = (1 << wbits) - 1;
        let mut multiples = Vec::with_capacity(num_multiples);

        let mut current = G1Projective::from(point);
        for _ in 0..num_multiples {
            multiples.push(current);
            current += point;
        }

        g1_batch_normalize(&multiples)
    }

    pub fn msm(&self, scalars: &[Scalar]) -> G1Projective {
        assert_eq!(
            scalars.len(),
            self.table.len(),
            "number of scalars must match number of points"
        );

        let scalars_le: Vec<[u8; 32]> = scalars.iter().map(Scalar::to_bytes_le).collect();
        let num_windows = (Scalar::NUM_BITS as usize).div_ceil(self.wbits);

        let mut result = G1Projective::identity();
        for window in (0..num_windows).rev() {
            for _ in 0..self.wbits {
                result = result.double();
            }

            for (multiples, scalar_le) in self.table.iter().zip(&scalars_le) {
                let digit = window_digit(scalar_le, window * self.wbits, self.wbits);
                if digit != 0 {
                    result += multiples[digit - 1];
                }
            }
        }

        result
    }
}

/// Reads `width` bits of a little-endian scalar starting at `bit_offset`.
fn window_digit(scalar_le: &[u8; 32], bit_offset: usize, width: usize) -> usize {
    let mut digit = 0;
    for i in 0..width {
        let bit = bit_offset + i;
        if bit >= 256 {
            break;
        }
        if (scalar_le[bit / 8] >> (bit % 8)) & 1 == 1 {
            digit |= 1 << i;
        }
    }
    digit
}
