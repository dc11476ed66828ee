use crate::ct::{neg_mod, wrap_once};
use crate::param::{BLOCK, MAX_SPARSE_WEIGHT, WRAP_EXT};
use crate::poly::{SparseTernaryPoly, TernaryPolynomial};

use super::ScratchSizing;

/// z(x) += u(x) * v(x) mod (x^N - 1), coefficients taken modulo 2^16.
///
/// `z` holds roundup8(N) slots, `u` is cyclically extended to N + WRAP_EXT
/// slots. The trailing slots of `z` past N receive arbitrary values.
pub(crate) fn mul_acc(z: &mut [u16], u: &[u16], v: &SparseTernaryPoly, sizing: ScratchSizing) {
    match sizing {
        ScratchSizing::Exact => {
            let mut offsets = vec![0u16; v.weight()];
            mul_acc_with_offsets(z, u, v, &mut offsets)
        }
        ScratchSizing::Maximum => {
            let mut offsets = [0u16; MAX_SPARSE_WEIGHT];
            mul_acc_with_offsets(z, u, v, &mut offsets[..v.weight()])
        }
    }
}

fn mul_acc_with_offsets(z: &mut [u16], u: &[u16], v: &SparseTernaryPoly, offsets: &mut [u16]) {
    let n = v.dim();
    debug_assert_eq!(z.len() % BLOCK, 0);
    debug_assert!(z.len() >= n && z.len() < n + BLOCK);
    debug_assert_eq!(u.len(), n + WRAP_EXT);
    let n = n as u16;

    // offset (N - j) mod N of the window of u feeding output 0
    for (off, &j) in offsets.iter_mut().zip(v.indices()) {
        *off = neg_mod(j, n);
    }
    let (pos, neg) = offsets.split_at_mut(v.num_pos());

    for block in z.chunks_exact_mut(BLOCK) {
        let mut sums = [0u16; BLOCK];
        sums.copy_from_slice(block);

        for off in pos.iter_mut() {
            let start = *off as usize;
            sums.iter_mut()
                .zip(&u[start..start + BLOCK])
                .for_each(|(s, &x)| *s = s.wrapping_add(x));
            *off = wrap_once(*off + BLOCK as u16, n);
        }
        for off in neg.iter_mut() {
            let start = *off as usize;
            sums.iter_mut()
                .zip(&u[start..start + BLOCK])
                .for_each(|(s, &x)| *s = s.wrapping_sub(x));
            *off = wrap_once(*off + BLOCK as u16, n);
        }

        block.copy_from_slice(&sums);
    }
}
