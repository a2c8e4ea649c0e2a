use crate::flags::Flags;
use crate::plan::{DftPlan, DftwPlan};
use crate::problem::Problem;
use crate::solver::Decimation;

#[cfg(feature = "std")]
use std::boxed::Box;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::boxed::Box;

/// Parameters for a radix-`r` twiddle pass sub-plan request (spec.md S6,
/// "plan_dftw"). `stride` is the stride between successive transform
/// points on the buffer side the twiddle pass touches (output for DIT,
/// input for DIF); `vl`/`vstride` describe the flattened vector loop
/// around it.
pub struct DftwSpec<T> {
    pub decimation: Decimation,
    pub r: usize,
    pub m: usize,
    pub stride: isize,
    pub vl: usize,
    pub vstride: isize,
    pub buf_re: *mut T,
    pub buf_im: *mut T,
}

// See `Problem`'s `Send` impl: constructed and consumed within a single
// planning call, buffer validity upheld by the caller's contract.
unsafe impl<T> Send for DftwSpec<T> {}

/// The surrounding planner registry this crate's solvers recurse into
/// (spec.md S6, "Consumed from the planner"). A host implements this
/// trait once and threads it by mutable reference through every
/// `mkplan` call (spec.md S9: "avoid any process-wide mutable state").
pub trait Planner<T> {
    /// Requests a plan for an arbitrary one-dimensional DFT sub-problem.
    /// May itself be serviced by another Cooley-Tukey solver -- this is
    /// the recursion point.
    fn plan_dft(&mut self, problem: Problem<T>) -> Option<Box<dyn DftPlan<T>>>;

    /// Requests a radix-`r` twiddle pass plan.
    fn plan_dftw(&mut self, spec: DftwSpec<T>) -> Option<Box<dyn DftwPlan<T>>>;

    /// The smallest prime factor of `n`, used by a radix spec of `0`.
    fn first_divisor(&self, n: usize) -> usize {
        crate::radix::first_divisor(n)
    }

    /// The planner flags this crate's gate reads (spec.md S4.2).
    fn flags(&self) -> Flags;
}
