//! Constant-time helpers for the rotation offsets of the sparse multiplier.
//!
//! Every data-dependent select of the kernel goes through this module.

use subtle::{ConditionallySelectable, ConstantTimeEq, ConstantTimeLess};

/// `(n - j) mod n` for `j` in `[0, n)`.
#[inline]
pub(crate) fn neg_mod(j: u16, n: u16) -> u16 {
    u16::conditional_select(&n.wrapping_sub(j), &0, j.ct_eq(&0))
}

/// `idx - n` if `idx >= n`, otherwise `idx`. Requires `idx < 2n`.
#[inline]
pub(crate) fn wrap_once(idx: u16, n: u16) -> u16 {
    let overflow = !idx.ct_lt(&n);
    idx.wrapping_sub(u16::conditional_select(&0, &n, overflow))
}
