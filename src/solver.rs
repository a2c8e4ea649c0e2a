use crate::flags::Flags;
use crate::problem::Problem;
use crate::radix::{really_choose_radix, RadixSpec};

/// Decimation-in-time splits the twiddle multiplication after the inner
/// DFT; decimation-in-frequency splits it before. The two orderings are
/// dual factorizations of the same Cooley-Tukey identity (spec.md
/// glossary).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Decimation {
    Dit,
    Dif,
}

/// An immutable Cooley-Tukey solver: a radix spec, a decimation, and the
/// shared buddy list used to deduplicate equivalent factorizations
/// (spec.md S3, "Solver"). Solvers are created once at registry setup
/// (spec.md S4.5) and never mutated.
#[derive(Debug, Copy, Clone)]
pub struct Solver {
    pub radix_spec: RadixSpec,
    pub decimation: Decimation,
    pub buddies: &'static [RadixSpec],
}

impl Solver {
    pub const fn new(radix_spec: RadixSpec, decimation: Decimation, buddies: &'static [RadixSpec]) -> Self {
        Self {
            radix_spec,
            decimation,
            buddies,
        }
    }

    /// Resolves this solver's radix spec against `n`, refusing if an
    /// earlier entry in the buddy list would produce the same concrete
    /// radix (spec.md S4.1). Returns `0` to mean "refuse".
    pub fn choose_radix(&self, n: usize) -> usize {
        let r = really_choose_radix(self.radix_spec, n);
        if r == 0 {
            return 0;
        }
        for &buddy in self.buddies {
            if buddy == self.radix_spec {
                // Reached our own entry first: no earlier buddy collides.
                break;
            }
            if really_choose_radix(buddy, n) == r {
                log::trace!(
                    "radix {} for n={} claimed by an earlier buddy spec {:?}; refusing spec {:?}",
                    r,
                    n,
                    buddy,
                    self.radix_spec
                );
                return 0;
            }
        }
        debug_assert!(r > 0 && n % r == 0);
        r
    }

    /// The applicability gate's radix-independent and radix-dependent
    /// checks together (spec.md S4.2, `applicable0`/`applicable`).
    pub fn applicable<T>(&self, problem: &Problem<T>, flags: Flags) -> bool {
        if problem.sz.rank() != 1 {
            return false;
        }
        if problem.vecsz.rank() > 1 {
            return false;
        }

        // DIF overwrites its input with twiddled intermediate values; only
        // allow it if the problem is in-place or the planner has granted
        // permission to destroy the input.
        if self.decimation == Decimation::Dif && !problem.in_place() && !flags.destroy_input {
            return false;
        }

        let n = problem.n();
        let r = self.choose_radix(n);
        if r == 0 || n <= r {
            return false;
        }

        // Emulates fftw2 behavior: some callers dislike recursing into
        // vector loops.
        if flags.no_vrecurse && problem.vecsz.rank() > 0 {
            return false;
        }

        true
    }
}
