// =================RING LAYOUT=================
/// smallest supported ring dimension; an 8-wide window wraps the ring at most once
pub const MIN_DIM: usize = 8;
/// largest supported ring dimension (EES743EP1)
pub const MAX_DIM: usize = 743;
/// number of output coefficients processed per block
pub const BLOCK: usize = 8;
/// number of cyclic duplicates appended to a ring element: x[N + i] = x[i]
pub const WRAP_EXT: usize = BLOCK - 1;

// =================SPARSE PARAM===============
/// highest number of non-0 coefficients in one sparse ternary polynomial,
/// attained by f3 in EES743EP1
pub const MAX_SPARSE_WEIGHT: usize = 30;

// =================MODULUS====================
/// log2 of the large modulus q
pub const LOG_Q: u32 = 11;
/// large modulus q = 2^11 used by the product-form path
pub const MODULUS_Q: u16 = 1 << LOG_Q;
/// q - 1, reduction mod q is a bitwise and
pub const MODULUS_MASK: u16 = MODULUS_Q - 1;

/// Round `n` up to the next multiple of the block width.
#[inline]
pub const fn roundup8(n: usize) -> usize {
    (n + BLOCK - 1) & !(BLOCK - 1)
}

/// An NTRU parameter set as far as the ring arithmetic is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSet {
    pub name: &'static str,
    /// ring dimension
    pub n: usize,
    /// large modulus
    pub q: u16,
    /// number of non-0 coefficients in f1, f2 and f3 of f = f1 * f2 + f3
    pub weights: [usize; 3],
}

impl ParamSet {
    pub const EES401EP2: ParamSet = ParamSet {
        name: "EES401EP2",
        n: 401,
        q: MODULUS_Q,
        weights: [16, 16, 12],
    };

    pub const EES443EP1: ParamSet = ParamSet {
        name: "EES443EP1",
        n: 443,
        q: MODULUS_Q,
        weights: [18, 16, 10],
    };

    pub const EES587EP1: ParamSet = ParamSet {
        name: "EES587EP1",
        n: 587,
        q: MODULUS_Q,
        weights: [20, 20, 16],
    };

    pub const EES743EP1: ParamSet = ParamSet {
        name: "EES743EP1",
        n: 743,
        q: MODULUS_Q,
        weights: [22, 22, 30],
    };

    pub const ALL: [ParamSet; 4] = [
        Self::EES401EP2,
        Self::EES443EP1,
        Self::EES587EP1,
        Self::EES743EP1,
    ];

    /// Look up a parameter set by name.
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name == name)
    }
}
