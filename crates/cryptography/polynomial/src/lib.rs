pub mod coset_fft;
pub mod domain;
mod fft;
pub mod poly_coeff;

pub use fft::{reverse_bit_order, reverse_bits};
