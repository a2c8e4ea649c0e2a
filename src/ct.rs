use crate::flags::Flags;
use crate::float::Float;
use crate::ops::Ops;
use crate::plan::{DftPlan, DftwPlan};
use crate::planner::{DftwSpec, Planner};
use crate::printer::Printer;
use crate::problem::Problem;
use crate::radix::RadixSpec;
use crate::solver::{Decimation, Solver};
use crate::tensor::Tensor;

#[cfg(feature = "std")]
use std::boxed::Box;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::boxed::Box;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

/// The buddy list shared by every solver in the registry, in the exact
/// order spec.md S4.5 specifies. Positive fixed radices are tried first
/// (smaller before larger), then the smallest-prime-factor strategy,
/// then the sqrt(n) strategy, then the negated fixed radices -- so when
/// two strategies would pick the same concrete radix on a given `n`, the
/// earliest one in this list wins (spec.md S4.1, "Rationale").
///
/// Reimplementations must preserve this exact order: it is the canonical
/// form a buddy-deduplicated set of wisdom-serialized plans depends on
/// (spec.md S9).
pub const BUDDIES: &[RadixSpec] = &[
    RadixSpec(2),
    RadixSpec(3),
    RadixSpec(4),
    RadixSpec(5),
    RadixSpec(6),
    RadixSpec(7),
    RadixSpec(8),
    RadixSpec(9),
    RadixSpec(10),
    RadixSpec(11),
    RadixSpec(12),
    RadixSpec(13),
    RadixSpec(14),
    RadixSpec(15),
    RadixSpec(16),
    RadixSpec(32),
    RadixSpec(64),
    RadixSpec(0),
    RadixSpec(-1),
    RadixSpec(-2),
    RadixSpec(-3),
    RadixSpec(-4),
    RadixSpec(-5),
    RadixSpec(-6),
    RadixSpec(-7),
    RadixSpec(-8),
    RadixSpec(-9),
    RadixSpec(-10),
    RadixSpec(-11),
    RadixSpec(-12),
    RadixSpec(-13),
    RadixSpec(-14),
    RadixSpec(-15),
    RadixSpec(-16),
    RadixSpec(-32),
    RadixSpec(-64),
];

/// Builds the full solver registry: one solver per `(radix spec,
/// decimation)` pair in [`BUDDIES`] x `{Dit, Dif}` (spec.md S4.5).
pub fn register_solvers() -> Vec<Solver> {
    let mut solvers = Vec::with_capacity(BUDDIES.len() * 2);
    for &spec in BUDDIES {
        solvers.push(Solver::new(spec, Decimation::Dit, BUDDIES));
        solvers.push(Solver::new(spec, Decimation::Dif, BUDDIES));
    }
    solvers
}

/// A composite Cooley-Tukey plan: owns the inner size-`m` DFT (`cld`) and
/// the radix-`r` twiddle pass (`cldw`), and runs them in the order its
/// decimation dictates (spec.md S3, S4.4).
pub struct CtPlan<T> {
    cld: Box<dyn DftPlan<T>>,
    cldw: Box<dyn DftwPlan<T>>,
    decimation: Decimation,
    r: usize,
    ops: Ops,
}

impl<T> CtPlan<T> {
    /// The radix this plan was built for.
    pub fn radix(&self) -> usize {
        self.r
    }
}

impl<T> DftPlan<T> for CtPlan<T> {
    fn apply(&self, ri: *const T, ii: *const T, ro: *mut T, io: *mut T) {
        match self.decimation {
            // Run the inner DFT first, then twiddle the output in place.
            Decimation::Dit => {
                self.cld.apply(ri, ii, ro, io);
                self.cldw.apply(ro, io);
            }
            // Twiddle the input in place first, then run the inner DFT
            // reading the now-modified input.
            Decimation::Dif => {
                self.cldw.apply(ri as *mut T, ii as *mut T);
                self.cld.apply(ri, ii, ro, io);
            }
        }
    }

    fn awake(&mut self, awake: bool) {
        self.cld.awake(awake);
        self.cldw.awake(awake);
    }

    fn print(&self, p: &mut dyn Printer) -> core::fmt::Result {
        p.write_str("(dft-ct-")?;
        p.write_str(match self.decimation {
            Decimation::Dit => "dit",
            Decimation::Dif => "dif",
        })?;
        p.write_str("/")?;
        write_usize(p, self.r)?;
        p.write_str("(")?;
        self.cldw.print(p)?;
        p.write_str(")(")?;
        self.cld.print(p)?;
        p.write_str(")")
    }

    fn ops(&self) -> Ops {
        self.ops
    }
}

fn write_usize(p: &mut dyn Printer, mut n: usize) -> core::fmt::Result {
    if n == 0 {
        return p.write_str("0");
    }
    let mut digits = [0u8; 20];
    let mut i = digits.len();
    while n > 0 {
        i -= 1;
        digits[i] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    // `digits[i..]` is ASCII, so this is always valid UTF-8.
    p.write_str(core::str::from_utf8(&digits[i..]).unwrap())
}

impl Solver {
    /// Attempts to build a Cooley-Tukey plan for `problem` (spec.md S4.3).
    /// Returns `None` if the gate rejects the problem or either sub-plan
    /// request fails -- the one normal negative outcome (spec.md S7).
    pub fn mkplan<T: Float>(
        &self,
        problem: &Problem<T>,
        planner: &mut dyn Planner<T>,
    ) -> Option<Box<dyn DftPlan<T>>> {
        let flags = planner.flags();
        if !self.applicable(problem, flags) {
            return None;
        }

        let n = problem.n();
        let r = self.choose_radix(n);
        let m = n / r;
        let d = problem.sz.dims()[0];
        let (vl, ivs, ovs) = problem.vecsz.tornk1();

        debug_assert!(n >= 1);
        debug_assert!(r > 0 && n % r == 0);

        let (cld, cldw) = match self.decimation {
            Decimation::Dit => {
                let cldw = planner.plan_dftw(DftwSpec {
                    decimation: Decimation::Dit,
                    r,
                    m,
                    stride: d.os,
                    vl,
                    vstride: ovs,
                    buf_re: problem.ro,
                    buf_im: problem.io,
                })?;

                let radix_axis = Tensor::tensor_1d(r, d.is, m as isize * d.os);
                let vecsz = radix_axis.append(&problem.vecsz);
                let cld = planner.plan_dft(Problem {
                    sz: Tensor::tensor_1d(m, r as isize * d.is, d.os),
                    vecsz,
                    ri: problem.ri,
                    ii: problem.ii,
                    ro: problem.ro,
                    io: problem.io,
                })?;
                (cld, cldw)
            }
            Decimation::Dif => {
                let cldw = planner.plan_dftw(DftwSpec {
                    decimation: Decimation::Dif,
                    r,
                    m,
                    stride: d.is,
                    vl,
                    vstride: ivs,
                    buf_re: problem.ri as *mut T,
                    buf_im: problem.ii as *mut T,
                })?;

                let radix_axis = Tensor::tensor_1d(r, m as isize * d.is, d.os);
                let vecsz = radix_axis.append(&problem.vecsz);
                let cld = planner.plan_dft(Problem {
                    sz: Tensor::tensor_1d(m, d.is, r as isize * d.os),
                    vecsz,
                    ri: problem.ri,
                    ii: problem.ii,
                    ro: problem.ro,
                    io: problem.io,
                })?;
                (cld, cldw)
            }
        };

        let ops = cld.ops() + cldw.ops();
        Some(Box::new(CtPlan {
            cld,
            cldw,
            decimation: self.decimation,
            r,
            ops,
        }))
    }
}
