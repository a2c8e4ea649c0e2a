use crate::ops::Ops;
use crate::printer::Printer;

/// A compiled, executable one-dimensional complex DFT (spec.md S3,
/// "Plan"). Exposed to the host planner; implemented by this crate's
/// [`CtPlan`](crate::CtPlan) and by whatever codelets/base cases the host
/// supplies for the sizes this crate doesn't recurse any further on.
pub trait DftPlan<T> {
    /// Executes the transform. The four pointers are split-format
    /// buffers; see [`Problem`](crate::Problem) for the aliasing contract.
    fn apply(&self, ri: *const T, ii: *const T, ro: *mut T, io: *mut T);

    /// Acquires (`true`) or releases (`false`) any resources the plan
    /// needs to execute, such as twiddle tables. Calls must balance and
    /// are not reentrant per plan (spec.md S5).
    fn awake(&mut self, awake: bool);

    /// Emits this plan's printable shape for wisdom-style serialization.
    fn print(&self, p: &mut dyn Printer) -> core::fmt::Result;

    /// This plan's accumulated operation count.
    fn ops(&self) -> Ops;
}

/// A compiled radix-`r` twiddle pass over `m` groups, applied `vl` times
/// (spec.md S6, "plan_dftw"). Mutates its buffers in place: DIT passes
/// operate on the already-written output buffers, DIF passes operate on
/// the not-yet-transformed input buffers (spec.md S4.3, S4.4).
pub trait DftwPlan<T> {
    fn apply(&self, re: *mut T, im: *mut T);

    fn awake(&mut self, awake: bool);

    fn print(&self, p: &mut dyn Printer) -> core::fmt::Result;

    fn ops(&self) -> Ops;
}
