//! Multiplication in (Z/qZ)[x]/(x^N - 1) by sparse ternary and product-form
//! polynomials.
//!
//! The inner loop runs the same instruction sequence and touches the same
//! memory for every choice of the ternary coefficients: it depends on N and on
//! the (public) index positions only. All precondition checks happen up front
//! in [`TernaryMultiplier`]; past them nothing can fail.

use ark_std::{end_timer, start_timer};
#[cfg(feature = "parallel")]
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::error::Result;
use crate::poly::{ProductFormPoly, SparseTernaryPoly, TernaryPolynomial};
use crate::ring::{check_same_dim, Accumulator, RingElement};

mod prod_form_mul;
mod sparse_mul;


/// Where the per-call scratch of a multiplication lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScratchSizing {
    /// Heap buffers sized to the N and weights of the operands at hand.
    /// Smallest footprint for small parameter sets.
    #[default]
    Exact,
    /// Stack arrays sized to `MAX_DIM` and `MAX_SPARSE_WEIGHT`. Every call has
    /// the footprint of the largest parameter set, which makes the worst case
    /// known at compile time.
    Maximum,
}

/// Entry point of the ring arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct TernaryMultiplier {
    sizing: ScratchSizing,
}

impl TernaryMultiplier {
    pub fn new(sizing: ScratchSizing) -> Self {
        Self { sizing }
    }

    pub fn sizing(&self) -> ScratchSizing {
        self.sizing
    }

    /// Multiply-accumulate: z(x) += u(x) * v(x) mod (x^N - 1).
    /// The result is not reduced modulo q.
    pub fn mul_acc(
        &self,
        z: &mut Accumulator,
        u: &RingElement,
        v: &SparseTernaryPoly,
    ) -> Result<()> {
        check_same_dim(v.dim(), u.dim())?;
        check_same_dim(v.dim(), z.dim())?;
        log::trace!(
            "sparse multiply-accumulate: N = {}, weight = {}",
            v.dim(),
            v.weight()
        );

        sparse_mul::mul_acc(z.raw_mut(), u.extended(), v, self.sizing);
        Ok(())
    }

    /// Multiplication: z(x) = u(x) * v(x) mod (x^N - 1).
    /// The result is not reduced modulo q.
    pub fn mul(&self, z: &mut Accumulator, u: &RingElement, v: &SparseTernaryPoly) -> Result<()> {
        check_same_dim(v.dim(), u.dim())?;
        check_same_dim(v.dim(), z.dim())?;
        log::trace!("sparse multiply: N = {}, weight = {}", v.dim(), v.weight());

        z.clear();
        sparse_mul::mul_acc(z.raw_mut(), u.extended(), v, self.sizing);
        Ok(())
    }

    /// Multiplication by a product-form polynomial:
    /// r(x) = a(x) * (b1(x) * b2(x) + b3(x)) mod (x^N - 1) mod q.
    /// `r` is overwritten with fully reduced coefficients.
    pub fn mul_prod_form(
        &self,
        r: &mut Accumulator,
        a: &RingElement,
        b: &ProductFormPoly,
    ) -> Result<()> {
        check_same_dim(b.dim(), a.dim())?;
        check_same_dim(b.dim(), r.dim())?;
        log::debug!(
            "product-form multiply: N = {}, weights = {:?}, scratch = {:?}",
            b.dim(),
            b.weights(),
            self.sizing
        );

        prod_form_mul::mul(r.raw_mut(), a.extended(), b, self.sizing);
        Ok(())
    }

    /// Multiply every ring element in `inputs` by the same product-form
    /// polynomial. Runs in parallel with the `parallel` feature.
    pub fn mul_prod_form_batch(
        &self,
        inputs: &[RingElement],
        b: &ProductFormPoly,
    ) -> Result<Vec<Accumulator>> {
        for a in inputs {
            check_same_dim(b.dim(), a.dim())?;
        }
        log::debug!("product-form batch multiply of {} ring elements", inputs.len());
        let timer = start_timer!(|| format!("{} product-form multiplications", inputs.len()));

        let mul_one = |a: &RingElement| -> Result<Accumulator> {
            let mut r = Accumulator::zero(b.dim())?;
            self.mul_prod_form(&mut r, a, b)?;
            Ok(r)
        };

        #[cfg(feature = "parallel")]
        let res: Result<Vec<Accumulator>> = inputs.par_iter().map(mul_one).collect();

        #[cfg(not(feature = "parallel"))]
        let res: Result<Vec<Accumulator>> = inputs.iter().map(mul_one).collect();

        end_timer!(timer);
        res
    }
}
