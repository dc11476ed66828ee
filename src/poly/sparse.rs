use rand::Rng;

use crate::error::{RingError, Result};
use crate::param::MAX_SPARSE_WEIGHT;
use crate::ring::check_dim;

use super::TernaryPolynomial;

#[derive(Debug, Clone, PartialEq, Eq)]
// Sparse ternary polynomial in index encoding: the indices of the +1
// coefficients followed by the indices of the -1 coefficients
pub struct SparseTernaryPoly {
    n: usize,
    indices: Vec<u16>,
    num_pos: usize,
}

impl SparseTernaryPoly {
    /// Build a sparse polynomial from the positions of its +1 and -1
    /// coefficients.
    pub fn new(n: usize, pos: &[u16], neg: &[u16]) -> Result<Self> {
        check_dim(n)?;
        let weight = pos.len() + neg.len();
        if weight > MAX_SPARSE_WEIGHT {
            return Err(RingError::WeightTooLarge {
                weight,
                max: MAX_SPARSE_WEIGHT,
            });
        }

        let mut seen = vec![false; n];
        for &index in pos.iter().chain(neg.iter()) {
            let index = index as usize;
            if index >= n {
                return Err(RingError::IndexOutOfRange { index, n });
            }
            if seen[index] {
                return Err(RingError::DuplicateIndex { index });
            }
            seen[index] = true;
        }

        Ok(Self {
            n,
            indices: [pos, neg].concat(),
            num_pos: pos.len(),
        })
    }

    /// Build a sparse polynomial from a flat index list whose first half
    /// (rounded down) holds the +1 positions and the rest the -1 positions.
    pub fn from_flat(n: usize, indices: &[u16]) -> Result<Self> {
        let (pos, neg) = indices.split_at(indices.len() / 2);
        Self::new(n, pos, neg)
    }

    /// Encode a dense ternary polynomial with N coefficients.
    pub fn from_coeffs(coeffs: &[i8]) -> Result<Self> {
        let mut pos = Vec::new();
        let mut neg = Vec::new();
        for (i, &c) in coeffs.iter().enumerate() {
            match c {
                0 => (),
                1 => pos.push(i as u16),
                -1 => neg.push(i as u16),
                _ => {
                    return Err(RingError::NotTernary {
                        value: c as i32,
                        position: i,
                    })
                }
            }
        }
        Self::new(coeffs.len(), &pos, &neg)
    }

    /// The all-zero polynomial.
    pub fn zero(n: usize) -> Result<Self> {
        Self::new(n, &[], &[])
    }

    /// sample a random ternary polynomial with `num_pos` +1 and `num_neg` -1
    /// coefficients
    pub fn rand<R: Rng>(rng: &mut R, n: usize, num_pos: usize, num_neg: usize) -> Result<Self> {
        check_dim(n)?;
        let weight = num_pos + num_neg;
        let max = MAX_SPARSE_WEIGHT.min(n);
        if weight > max {
            return Err(RingError::WeightTooLarge { weight, max });
        }

        let mut coeffs = vec![0i8; n];
        for (count, sign) in [(num_pos, 1i8), (num_neg, -1i8)] {
            let mut ct = 0;
            while ct < count {
                let index = rng.gen_range(0..n);
                if coeffs[index] == 0 {
                    coeffs[index] = sign;
                    ct += 1;
                }
            }
        }
        Self::from_coeffs(&coeffs)
    }

    /// sample a random ternary polynomial with `weight` non-0 coefficients,
    /// the -1 coefficients taking the odd one out
    pub fn rand_balanced<R: Rng>(rng: &mut R, n: usize, weight: usize) -> Result<Self> {
        Self::rand(rng, n, weight / 2, weight - weight / 2)
    }

    /// Positions of the +1 coefficients.
    pub fn pos(&self) -> &[u16] {
        &self.indices[..self.num_pos]
    }

    /// Positions of the -1 coefficients.
    pub fn neg(&self) -> &[u16] {
        &self.indices[self.num_pos..]
    }

    pub(crate) fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub(crate) fn num_pos(&self) -> usize {
        self.num_pos
    }

    /// Dense coefficients in {-1, 0, 1}.
    pub fn to_coeffs(&self) -> Vec<i8> {
        let mut coeffs = vec![0i8; self.n];
        self.pos().iter().for_each(|&i| coeffs[i as usize] = 1);
        self.neg().iter().for_each(|&i| coeffs[i as usize] = -1);
        coeffs
    }
}

impl TernaryPolynomial for SparseTernaryPoly {
    fn dim(&self) -> usize {
        self.n
    }

    fn weight(&self) -> usize {
        self.indices.len()
    }

    fn to_dense(&self) -> Vec<i32> {
        self.to_coeffs().into_iter().map(|c| c as i32).collect()
    }
}
