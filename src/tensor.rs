#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

/// One axis of a [`Tensor`]: a length and the strides (in real samples,
/// i.e. elements of the split-format buffers) between successive points
/// along that axis on the input and output sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoDim {
    pub n: usize,
    pub is: isize,
    pub os: isize,
}

impl IoDim {
    pub const fn new(n: usize, is: isize, os: isize) -> Self {
        Self { n, is, os }
    }
}

/// A product of axes describing an iteration pattern over a pair of
/// buffers. Rank 0 is the empty tensor (a single point); rank 1 is an
/// ordinary strided loop. Problems in this crate use one rank-1 tensor for
/// the transform dimension and a tensor of rank 0 or 1 for the vector
/// dimension (spec.md S3), but the plan constructor builds rank-2 tensors
/// transiently when splicing the radix axis onto an existing vector axis
/// (spec.md S4.3) -- planning such a tensor further is a host planner
/// concern (e.g. a rank-reducing vector-loop solver), not this crate's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tensor {
    dims: Vec<IoDim>,
}

impl Tensor {
    /// The rank-0 tensor: a single point, no looping.
    pub fn rank0() -> Self {
        Self { dims: Vec::new() }
    }

    /// A rank-1 tensor over one axis `(n, is, os)`.
    pub fn tensor_1d(n: usize, is: isize, os: isize) -> Self {
        Self {
            dims: {
                let mut dims = Vec::with_capacity(1);
                dims.push(IoDim::new(n, is, os));
                dims
            },
        }
    }

    /// Prepends `self`'s axes onto `other`'s, matching `ct.c`'s
    /// `tensor_append(t1, vecsz)` where `t1` is the newly built radix axis
    /// and `vecsz` is the problem's existing (rank 0 or 1) vector tensor.
    pub fn append(&self, other: &Tensor) -> Tensor {
        let mut dims = Vec::with_capacity(self.dims.len() + other.dims.len());
        dims.extend_from_slice(&self.dims);
        dims.extend_from_slice(&other.dims);
        Tensor { dims }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[IoDim] {
        &self.dims
    }

    /// Flattens a rank-0-or-1 tensor to the scalar `(vl, ivs, ovs)` triple
    /// `ct.c` extracts with `X(tensor_tornk1)`. Rank 0 yields a single
    /// iteration with both strides zero.
    pub fn tornk1(&self) -> (usize, isize, isize) {
        debug_assert!(self.dims.len() <= 1, "tensor_tornk1 requires rank <= 1");
        match self.dims.first() {
            Some(dim) => (dim.n, dim.is, dim.os),
            None => (1, 0, 0),
        }
    }
}
