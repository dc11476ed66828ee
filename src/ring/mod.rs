//! Buffer layout of ring elements in (Z/qZ)[x]/(x^N - 1).
//!
//! The sparse multiplier reads eight consecutive coefficients of its dense
//! operand starting anywhere in `[0, N)`. A [`RingElement`] therefore carries
//! `WRAP_EXT` trailing copies of its first coefficients, so such a window never
//! needs a modular index. Results land in an [`Accumulator`], whose length is
//! rounded up to the block width; the trailing slots are scratch.

use std::fmt::{self, Display, LowerHex};

use rand::Rng;

use crate::error::{RingError, Result};
use crate::param::{roundup8, LOG_Q, MAX_DIM, MIN_DIM, MODULUS_MASK, WRAP_EXT};


pub(crate) fn check_dim(n: usize) -> Result<()> {
    if !(MIN_DIM..=MAX_DIM).contains(&n) {
        return Err(RingError::InvalidDimension {
            n,
            min: MIN_DIM,
            max: MAX_DIM,
        });
    }
    Ok(())
}

pub(crate) fn check_same_dim(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(RingError::DimensionMismatch { expected, got });
    }
    Ok(())
}

/// Write `buf[n + i] = buf[i]` for `i < WRAP_EXT`. Requires `n >= WRAP_EXT`.
#[inline]
pub(crate) fn extend_cyclic(buf: &mut [u16], n: usize) {
    buf.copy_within(0..WRAP_EXT, n);
}

/// Reduce every coefficient with a power-of-two mask.
#[inline]
pub(crate) fn mask_coeffs(coeffs: &mut [u16], mask: u16) {
    coeffs.iter_mut().for_each(|x| *x &= mask);
}

fn fmt_coeffs(f: &mut fmt::Formatter, coeffs: &[u16], hex: bool) -> fmt::Result {
    write!(f, "{{ ")?;
    for (i, c) in coeffs.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        if hex {
            write!(f, "{:03x}", c)?;
        } else {
            write!(f, "{}", c)?;
        }
    }
    write!(f, " }}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
// A ring element with N coefficients followed by WRAP_EXT cyclic duplicates
pub struct RingElement {
    n: usize,
    coeffs: Vec<u16>,
}

impl RingElement {
    /// Build a ring element from its N coefficients.
    pub fn from_coeffs(coeffs: &[u16]) -> Result<Self> {
        let n = coeffs.len();
        check_dim(n)?;
        let mut buf = vec![0u16; n + WRAP_EXT];
        buf[..n].copy_from_slice(coeffs);
        extend_cyclic(&mut buf, n);
        Ok(Self { n, coeffs: buf })
    }

    /// Build a ring element from signed coefficients, taken modulo 2^16.
    pub fn from_signed(coeffs: &[i32]) -> Result<Self> {
        let coeffs: Vec<u16> = coeffs.iter().map(|&x| x as u16).collect();
        Self::from_coeffs(&coeffs)
    }

    pub fn zero(n: usize) -> Result<Self> {
        check_dim(n)?;
        Ok(Self {
            n,
            coeffs: vec![0u16; n + WRAP_EXT],
        })
    }

    /// sample a uniformly random ring element with coefficients in [0, q-1]
    pub fn rand<R: Rng>(rng: &mut R, n: usize) -> Result<Self> {
        check_dim(n)?;
        let coeffs: Vec<u16> = (0..n).map(|_| rng.gen::<u16>() & MODULUS_MASK).collect();
        Self::from_coeffs(&coeffs)
    }

    /// Ring dimension N.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// The N coefficients, without the cyclic duplicates.
    pub fn coeffs(&self) -> &[u16] {
        &self.coeffs[..self.n]
    }

    /// The full N + WRAP_EXT buffer.
    pub(crate) fn extended(&self) -> &[u16] {
        &self.coeffs
    }
}

impl From<&Accumulator> for RingElement {
    // Reinterpret a (possibly unreduced) product as an operand of a further
    // multiplication.
    fn from(acc: &Accumulator) -> Self {
        let n = acc.n;
        let mut coeffs = vec![0u16; n + WRAP_EXT];
        coeffs[..n].copy_from_slice(acc.coeffs());
        extend_cyclic(&mut coeffs, n);
        Self { n, coeffs }
    }
}

impl Display for RingElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_coeffs(f, self.coeffs(), false)
    }
}

impl LowerHex for RingElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_coeffs(f, self.coeffs(), true)
    }
}

#[derive(Debug, Clone)]
// Output buffer of a multiplication, roundup8(N) coefficients long
pub struct Accumulator {
    n: usize,
    coeffs: Vec<u16>,
}

impl Accumulator {
    pub fn zero(n: usize) -> Result<Self> {
        check_dim(n)?;
        Ok(Self {
            n,
            coeffs: vec![0u16; roundup8(n)],
        })
    }

    /// An accumulator holding the N given coefficients, e.g. as the addend of
    /// a multiply-accumulate.
    pub fn from_coeffs(coeffs: &[u16]) -> Result<Self> {
        let mut res = Self::zero(coeffs.len())?;
        res.coeffs[..coeffs.len()].copy_from_slice(coeffs);
        Ok(res)
    }

    /// Ring dimension N.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// The N result coefficients. Unreduced values are two's complement.
    pub fn coeffs(&self) -> &[u16] {
        &self.coeffs[..self.n]
    }

    /// The N result coefficients as signed integers.
    pub fn signed_coeffs(&self) -> Vec<i16> {
        self.coeffs().iter().map(|&x| x as i16).collect()
    }

    /// Set every slot, scratch included, to zero.
    pub fn clear(&mut self) {
        self.coeffs.iter_mut().for_each(|x| *x = 0);
    }

    /// Reduce the coefficients modulo q = 2048.
    pub fn reduce(&mut self) {
        mask_coeffs(&mut self.coeffs[..self.n], MODULUS_MASK);
    }

    /// Reduce the coefficients modulo 2^log_q, for 1 <= log_q <= 16.
    pub fn reduce_mod_pow2(&mut self, log_q: u32) -> Result<()> {
        if !(1..=16).contains(&log_q) {
            return Err(RingError::InvalidModulus { log_q });
        }
        let mask = (((1u32 << log_q) - 1) & 0xFFFF) as u16;
        mask_coeffs(&mut self.coeffs[..self.n], mask);
        Ok(())
    }

    /// Add a ternary polynomial (e.g. an encoded message) coefficient-wise,
    /// without reduction.
    pub fn add_ternary(&mut self, c: &[i8]) -> Result<()> {
        check_same_dim(self.n, c.len())?;
        if let Some((position, &value)) = c
            .iter()
            .enumerate()
            .find(|&(_, x)| !(-1..=1).contains(x))
        {
            return Err(RingError::NotTernary {
                value: value as i32,
                position,
            });
        }
        self.coeffs
            .iter_mut()
            .zip(c)
            .for_each(|(x, &y)| *x = x.wrapping_add(y as i16 as u16));
        Ok(())
    }

    /// Whether every coefficient is already reduced modulo q.
    pub fn is_reduced(&self) -> bool {
        self.coeffs().iter().all(|&x| x >> LOG_Q == 0)
    }

    pub(crate) fn raw_mut(&mut self) -> &mut [u16] {
        &mut self.coeffs
    }
}

impl PartialEq for Accumulator {
    // The scratch slots past N do not take part in the comparison.
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.coeffs() == other.coeffs()
    }
}

impl Eq for Accumulator {}

impl Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_coeffs(f, self.coeffs(), false)
    }
}

impl LowerHex for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_coeffs(f, self.coeffs(), true)
    }
}
