//! A minimal reference `Planner` implementation used only by this crate's
//! own test suite. It stands in for the "generic planner search" and
//! "straight-line codelets" spec.md S1 explicitly delegates elsewhere: it
//! tries the Cooley-Tukey registry first (recursively), and falls back to
//! a direct O(n^2) DFT when no solver in the registry applies. This is
//! exactly the fallback shape the teacher crate's own
//! `create_fft_f32`/`create_fft_f64` use (prime-factor decomposition,
//! then Bluestein's as the catch-all).
#![allow(dead_code)]

use fourier_ct::{
    compute_twiddle, register_solvers, DftPlan, DftwPlan, DftwSpec, Flags, Float, Ops, Planner,
    Printer, Problem, Solver, Tensor,
};
use num_complex::Complex;

/// A plan for the base case: a direct, stride- and vector-aware O(n^2)
/// DFT. A real planner would hand this off to an optimized straight-line
/// codelet (spec.md S1, "out of scope"); the reference planner just
/// computes the definition.
struct DirectDft {
    n: usize,
    is: isize,
    os: isize,
    vec_dims: Vec<(usize, isize, isize)>,
    ops: Ops,
}

fn for_each_point(dims: &[(usize, isize, isize)], ivs: isize, ovs: isize, f: &mut dyn FnMut(isize, isize)) {
    match dims.split_first() {
        None => f(ivs, ovs),
        Some((&(n, is, os), rest)) => {
            for i in 0..n {
                for_each_point(rest, ivs + i as isize * is, ovs + i as isize * os, f);
            }
        }
    }
}

impl<T: Float> DftPlan<T> for DirectDft {
    fn apply(&self, ri: *const T, ii: *const T, ro: *mut T, io: *mut T) {
        let n = self.n;
        let mut tmp_re = vec![T::default(); n];
        let mut tmp_im = vec![T::default(); n];
        for_each_point(&self.vec_dims, 0, 0, &mut |ivs, ovs| {
            for k in 0..n {
                let mut acc = Complex::<T>::default();
                for j in 0..n {
                    let idx = ivs + j as isize * self.is;
                    let x = unsafe { Complex::new(*ri.offset(idx), *ii.offset(idx)) };
                    acc += x * compute_twiddle(j * k, n, true);
                }
                tmp_re[k] = acc.re;
                tmp_im[k] = acc.im;
            }
            for k in 0..n {
                let idx = ovs + k as isize * self.os;
                unsafe {
                    *ro.offset(idx) = tmp_re[k];
                    *io.offset(idx) = tmp_im[k];
                }
            }
        });
    }

    fn awake(&mut self, _awake: bool) {}

    fn print(&self, p: &mut dyn Printer) -> core::fmt::Result {
        p.write_str("(dft-direct-")?;
        p.write_str(&alloc_usize(self.n))
    }

    fn ops(&self) -> Ops {
        self.ops
    }
}

fn alloc_usize(n: usize) -> String {
    n.to_string()
}

/// A direct radix-`r` twiddle pass, derived from the standard
/// Cooley-Tukey recombination identity rather than an optimized codelet:
///
/// DIT: `X[q + m*p] = sum_a (Y_a[q] * W_n^{a*q}) * W_r^{a*p}`
/// DIF: `z_a[q] = sum_s x[q + m*s] * W_r^{s*a}`, then multiply by `W_n^{q*a}`
///
/// where `Y_a`/`x` are read from the buffer the inner DFT already wrote
/// (DIT) or is about to read (DIF), and `n = r*m`.
struct NaiveTwiddle {
    decimation_dit: bool,
    r: usize,
    m: usize,
    n: usize,
    stride: isize,
    vl: usize,
    vstride: isize,
    ops: Ops,
}

impl<T: Float> DftwPlan<T> for NaiveTwiddle {
    fn apply(&self, re: *mut T, im: *mut T) {
        let (r, m, n) = (self.r, self.m, self.n);
        for v in 0..self.vl {
            let base = v as isize * self.vstride;
            for q in 0..m {
                let mut scratch = vec![Complex::<T>::default(); r];
                if self.decimation_dit {
                    // Read Y_a[q] from (a*m + q) * stride, twiddle by W_n^{a*q}.
                    for a in 0..r {
                        let idx = base + ((a * m + q) as isize) * self.stride;
                        let y = unsafe { Complex::new(*re.offset(idx), *im.offset(idx)) };
                        scratch[a] = y * compute_twiddle(a * q, n, true);
                    }
                } else {
                    // Read x[q + m*s] from (q + m*s) * stride, recombine
                    // with an r-point DFT before twiddling by W_n^{q*a}.
                    let mut raw = vec![Complex::<T>::default(); r];
                    for s in 0..r {
                        let idx = base + ((q + m * s) as isize) * self.stride;
                        raw[s] = unsafe { Complex::new(*re.offset(idx), *im.offset(idx)) };
                    }
                    for a in 0..r {
                        let mut acc = Complex::<T>::default();
                        for s in 0..r {
                            acc += raw[s] * compute_twiddle(s * a, r, true);
                        }
                        scratch[a] = acc * compute_twiddle(q * a, n, true);
                    }
                }

                // r-point radix DFT across `scratch`, writing results back
                // to the same index set they were read from.
                let mut out = vec![Complex::<T>::default(); r];
                for p in 0..r {
                    let mut acc = Complex::<T>::default();
                    for a in 0..r {
                        acc += scratch[a] * compute_twiddle(a * p, r, true);
                    }
                    out[p] = acc;
                }

                if self.decimation_dit {
                    for p in 0..r {
                        let idx = base + ((q + m * p) as isize) * self.stride;
                        unsafe {
                            *re.offset(idx) = out[p].re;
                            *im.offset(idx) = out[p].im;
                        }
                    }
                } else {
                    for a in 0..r {
                        let idx = base + ((q + m * a) as isize) * self.stride;
                        unsafe {
                            *re.offset(idx) = out[a].re;
                            *im.offset(idx) = out[a].im;
                        }
                    }
                }
            }
        }
    }

    fn awake(&mut self, _awake: bool) {}

    fn print(&self, p: &mut dyn Printer) -> core::fmt::Result {
        p.write_str("(dftw-direct-")?;
        p.write_str(&alloc_usize(self.r))?;
        p.write_str(")")
    }

    fn ops(&self) -> Ops {
        self.ops
    }
}

/// Drives the Cooley-Tukey solver registry, falling back to
/// [`DirectDft`] when nothing in the registry applies.
pub struct ReferencePlanner {
    solvers: Vec<Solver>,
    pub flags: Flags,
}

impl ReferencePlanner {
    pub fn new() -> Self {
        Self {
            solvers: register_solvers(),
            flags: Flags::new(),
        }
    }

    pub fn with_flags(flags: Flags) -> Self {
        Self {
            solvers: register_solvers(),
            flags,
        }
    }
}

impl<T: Float> Planner<T> for ReferencePlanner {
    fn plan_dft(&mut self, problem: Problem<T>) -> Option<Box<dyn DftPlan<T>>> {
        let n = problem.n();
        let (vl, ivs, ovs) = problem.vecsz.tornk1();
        let _ = (vl, ivs, ovs);

        for i in 0..self.solvers.len() {
            let solver = self.solvers[i];
            if let Some(plan) = solver.mkplan(&problem, self) {
                return Some(plan);
            }
        }

        let d = problem.sz.dims()[0];
        let vec_dims = problem
            .vecsz
            .dims()
            .iter()
            .map(|dim| (dim.n, dim.is, dim.os))
            .collect();
        Some(Box::new(DirectDft {
            n,
            is: d.is,
            os: d.os,
            vec_dims,
            ops: Ops {
                add: (n * n) as u64,
                mul: (n * n) as u64,
                ..Ops::new()
            },
        }))
    }

    fn plan_dftw(&mut self, spec: DftwSpec<T>) -> Option<Box<dyn DftwPlan<T>>> {
        let n = spec.r * spec.m;
        Some(Box::new(NaiveTwiddle {
            decimation_dit: spec.decimation == fourier_ct::Decimation::Dit,
            r: spec.r,
            m: spec.m,
            n,
            stride: spec.stride,
            vl: spec.vl,
            vstride: spec.vstride,
            ops: Ops {
                add: (spec.vl * spec.m * spec.r * spec.r) as u64,
                mul: (spec.vl * spec.m * spec.r * spec.r) as u64,
                ..Ops::new()
            },
        }))
    }

    fn flags(&self) -> Flags {
        self.flags
    }
}

/// Initializes `env_logger` from `RUST_LOG` if set, ignoring the "already
/// initialized" error from other tests in the same binary calling this too.
pub fn init_logger() {
    let _ = env_logger::try_init();
}

/// Builds a [`Problem`] over a single contiguous vector `x` (no vector
/// dimension), with matching real and imaginary scratch slices for the
/// output.
pub fn problem_for<'a, T>(
    n: usize,
    ri: &'a [T],
    ii: &'a [T],
    ro: &'a mut [T],
    io: &'a mut [T],
) -> Problem<T> {
    Problem {
        sz: Tensor::tensor_1d(n, 1, 1),
        vecsz: Tensor::rank0(),
        ri: ri.as_ptr(),
        ii: ii.as_ptr(),
        ro: ro.as_mut_ptr(),
        io: io.as_mut_ptr(),
    }
}

/// A plain O(n^2) DFT used as the test oracle, independent of this
/// crate's own direct codelet above (spec.md S8, P4).
pub fn naive_dft(x: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = x.len();
    (0..n)
        .map(|k| {
            let mut acc = Complex::new(0.0, 0.0);
            for (j, xj) in x.iter().enumerate() {
                acc += xj * compute_twiddle::<f64>(j * k, n, true);
            }
            acc
        })
        .collect()
}
