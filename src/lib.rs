//! A recursive Cooley-Tukey planner core for one-dimensional complex DFTs.
//!
//! This crate implements the solver/plan machinery FFTW calls `dft-ct`: given
//! a transform size `n`, choose a radix `r` such that `n = r * m`, split the
//! problem into an `m`-point inner DFT and an `r`-point twiddle pass, and
//! recurse. It does not perform any arithmetic itself -- the inner DFT and
//! the twiddle pass are requested from a host [`Planner`] through the
//! [`DftPlan`] and [`DftwPlan`] trait objects it returns.
#![cfg_attr(not(feature = "std"), no_std)]

mod ct;
mod flags;
mod float;
mod ops;
mod plan;
mod planner;
mod printer;
mod problem;
mod radix;
mod solver;
mod tensor;
mod twiddle;

pub use crate::ct::{register_solvers, CtPlan};
pub use crate::flags::Flags;
pub use crate::float::Float;
pub use crate::ops::Ops;
pub use crate::plan::{DftPlan, DftwPlan};
pub use crate::planner::{DftwSpec, Planner};
pub use crate::printer::Printer;
pub use crate::problem::Problem;
pub use crate::radix::RadixSpec;
pub use crate::solver::{Decimation, Solver};
pub use crate::tensor::{IoDim, Tensor};
pub use crate::twiddle::compute_twiddle;
