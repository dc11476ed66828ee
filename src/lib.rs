//! Ring arithmetic of NTRU in (Z/qZ)[x]/(x^N - 1) for sparse ternary and
//! product-form operands, in constant time with respect to the ternary
//! coefficients.

mod ct;
mod error;
mod multiplier;
mod param;
mod poly;
mod ring;

pub use error::*;
pub use multiplier::*;
pub use param::*;
pub use poly::*;
pub use ring::{Accumulator, RingElement};
