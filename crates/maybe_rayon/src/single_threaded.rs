//! Sequential fallbacks. Each adapter returns the matching std iterator, so
//! call sites compile unchanged and run on the calling thread.

use std::slice::ChunksMut;

/// `maybe_into_par_iter` for anything iterable by value: index ranges in the
/// FFT and evaluation code, and slices of cells in the verifier.
pub trait MaybeParallelExt: IntoIterator + Sized {
    fn maybe_into_par_iter(self) -> Self::IntoIter {
        self.into_iter()
    }
}

impl<I: IntoIterator> MaybeParallelExt for I {}

/// `maybe_par_iter` for collections borrowed immutably, such as the rows
/// of a Toeplitz matrix.
pub trait MaybeParallelRefExt {
    type Item;
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    fn maybe_par_iter(&self) -> Self::Iter<'_>;
}

impl<C: IntoIterator> MaybeParallelRefExt for C
where
    for<'a> &'a C: IntoIterator<Item = &'a <C as IntoIterator>::Item>,
{
    type Item = <C as IntoIterator>::Item;
    type Iter<'a>
        = <&'a C as IntoIterator>::IntoIter
    where
        Self: 'a;

    fn maybe_par_iter(&self) -> Self::Iter<'_> {
        self.into_iter()
    }
}

/// Disjoint mutable chunks, as used by the FFT butterflies.
pub trait MaybeParallelSliceMut<T> {
    fn maybe_par_chunks_mut(&mut self, chunk_size: usize) -> ChunksMut<'_, T>;
}

impl<T: Send> MaybeParallelSliceMut<T> for [T] {
    fn maybe_par_chunks_mut(&mut self, chunk_size: usize) -> ChunksMut<'_, T> {
        self.chunks_mut(chunk_size)
    }
}
