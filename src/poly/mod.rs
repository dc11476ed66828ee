mod prod_form;
mod sparse;

pub use prod_form::ProductFormPoly;
pub use sparse::SparseTernaryPoly;

/// A ternary operand of the ring multiplication, stored in a compressed
/// (index) encoding.
pub trait TernaryPolynomial {
    /// Ring dimension N
    fn dim(&self) -> usize;

    /// Number of stored non-0 coefficients
    fn weight(&self) -> usize;

    /// The N coefficients of the represented polynomial
    fn to_dense(&self) -> Vec<i32>;
}

// school book multiplication in Z_{2^16}[x]/(x^N - 1)
// slow. only used for correctness checking
#[cfg(test)]
pub(crate) fn schoolbook(a: &[u16], b: &[i32]) -> Vec<u16> {
    let n = a.len();
    assert_eq!(n, b.len());
    let mut c = vec![0u16; n];
    for i in 0..n {
        for j in 0..n {
            let prod = (a[i] as i32).wrapping_mul(b[j]) as u16;
            c[(i + j) % n] = c[(i + j) % n].wrapping_add(prod);
        }
    }
    c
}
