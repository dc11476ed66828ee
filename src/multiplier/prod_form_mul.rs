use crate::param::{roundup8, MAX_DIM, MODULUS_MASK, WRAP_EXT};
use crate::poly::{ProductFormPoly, TernaryPolynomial};
use crate::ring::{extend_cyclic, mask_coeffs};

use super::{sparse_mul, ScratchSizing};

/// r(x) = a(x) * (b1(x) * b2(x) + b3(x)) mod (x^N - 1) mod q.
///
/// `r` holds roundup8(N) slots and is overwritten; `a` is cyclically extended.
pub(crate) fn mul(r: &mut [u16], a: &[u16], b: &ProductFormPoly, sizing: ScratchSizing) {
    let n = b.dim();
    match sizing {
        ScratchSizing::Exact => {
            let mut t = vec![0u16; n + WRAP_EXT];
            mul_with_scratch(r, a, b, &mut t, sizing)
        }
        ScratchSizing::Maximum => {
            let mut t = [0u16; MAX_DIM + WRAP_EXT];
            mul_with_scratch(r, a, b, &mut t[..n + WRAP_EXT], sizing)
        }
    }
}

fn mul_with_scratch(
    r: &mut [u16],
    a: &[u16],
    b: &ProductFormPoly,
    t: &mut [u16],
    sizing: ScratchSizing,
) {
    let n = b.dim();
    let [b1, b2, b3] = b.factors();

    r.iter_mut().for_each(|x| *x = 0);
    t.iter_mut().for_each(|x| *x = 0);

    // t = a * b1
    sparse_mul::mul_acc(&mut t[..roundup8(n)], a, b1, sizing);
    // t becomes the dense operand of the next product
    extend_cyclic(t, n);
    // r = t * b2 = a * b1 * b2
    sparse_mul::mul_acc(r, t, b2, sizing);
    // r = r + a * b3 = a * (b1 * b2 + b3)
    sparse_mul::mul_acc(r, a, b3, sizing);

    mask_coeffs(&mut r[..n], MODULUS_MASK);
}
