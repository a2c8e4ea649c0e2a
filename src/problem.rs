use crate::tensor::Tensor;

/// A single one-dimensional complex DFT problem in split (real/imaginary)
/// format (spec.md S3).
///
/// The four buffers are raw pointers rather than slices: spec.md
/// explicitly permits `ri == ro` and `ii == io` (in-place operation), which
/// an `&[T]`/`&mut [T]` pair covering the same memory cannot express
/// safely. Buffer validity and non-overlap (except for the permitted
/// in-place aliasing) for the lifetime of planning and every `apply` call
/// is a contract the caller upholds, exactly as in the FFTW core this
/// crate reimplements.
pub struct Problem<T> {
    /// Transform tensor, always rank 1 (spec.md S4.2 condition 2 rejects
    /// anything else before a `Problem` reaches this crate's gate).
    pub sz: Tensor,
    /// Vector tensor, rank 0 or 1 (spec.md S4.2 condition 3).
    pub vecsz: Tensor,
    pub ri: *const T,
    pub ii: *const T,
    pub ro: *mut T,
    pub io: *mut T,
}

impl<T> Problem<T> {
    /// The transform length `n` (spec.md S3: `n >= 2`).
    pub fn n(&self) -> usize {
        debug_assert_eq!(self.sz.rank(), 1, "a DFT problem's transform tensor must be rank 1");
        self.sz.dims()[0].n
    }

    /// True iff `ri == ro` and `ii == io`: the problem is in-place.
    pub fn in_place(&self) -> bool {
        core::ptr::eq(self.ri, self.ro as *const T) && core::ptr::eq(self.ii, self.io as *const T)
    }
}

// Raw pointers are not `Send`/`Sync` by default; a `Problem` is only ever
// constructed and consumed within a single planning call on one thread
// (spec.md S5), and the buffers it points at outlive that call by
// contract, so it is safe to move between threads the way the host
// planner already does with the plans built from it.
unsafe impl<T> Send for Problem<T> {}
