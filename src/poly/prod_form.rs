use rand::Rng;

use crate::error::{RingError, Result};
use crate::param::ParamSet;
use crate::ring::check_same_dim;

use super::{SparseTernaryPoly, TernaryPolynomial};

#[derive(Debug, Clone, PartialEq, Eq)]
// Ternary polynomial in product form b = b1 * b2 + b3
pub struct ProductFormPoly {
    factors: [SparseTernaryPoly; 3],
}

impl ProductFormPoly {
    pub fn new(
        b1: SparseTernaryPoly,
        b2: SparseTernaryPoly,
        b3: SparseTernaryPoly,
    ) -> Result<Self> {
        check_same_dim(b1.dim(), b2.dim())?;
        check_same_dim(b1.dim(), b3.dim())?;
        Ok(Self {
            factors: [b1, b2, b3],
        })
    }

    /// Build a product-form polynomial from one flat index list holding the
    /// indices of b1, b2 and b3 back to back. `counts` gives the number of
    /// non-0 coefficients of each factor; every segment lists its +1 indices
    /// in its first half.
    pub fn from_flat(n: usize, indices: &[u16], counts: [usize; 3]) -> Result<Self> {
        let total = counts.iter().try_fold(0usize, |acc, &c| acc.checked_add(c));
        if total != Some(indices.len()) {
            return Err(RingError::CountMismatch {
                counts,
                len: indices.len(),
            });
        }
        let (b1, rest) = indices.split_at(counts[0]);
        let (b2, b3) = rest.split_at(counts[1]);

        Self::new(
            SparseTernaryPoly::from_flat(n, b1)?,
            SparseTernaryPoly::from_flat(n, b2)?,
            SparseTernaryPoly::from_flat(n, b3)?,
        )
    }

    /// sample a random product-form polynomial whose factors have the given
    /// numbers of non-0 coefficients, balanced between +1 and -1
    pub fn rand<R: Rng>(rng: &mut R, n: usize, weights: [usize; 3]) -> Result<Self> {
        let b1 = SparseTernaryPoly::rand_balanced(rng, n, weights[0])?;
        let b2 = SparseTernaryPoly::rand_balanced(rng, n, weights[1])?;
        let b3 = SparseTernaryPoly::rand_balanced(rng, n, weights[2])?;
        Self::new(b1, b2, b3)
    }

    pub fn factors(&self) -> &[SparseTernaryPoly; 3] {
        &self.factors
    }

    /// Number of non-0 coefficients of b1, b2 and b3.
    pub fn weights(&self) -> [usize; 3] {
        [
            self.factors[0].weight(),
            self.factors[1].weight(),
            self.factors[2].weight(),
        ]
    }
}

impl TernaryPolynomial for ProductFormPoly {
    fn dim(&self) -> usize {
        self.factors[0].dim()
    }

    fn weight(&self) -> usize {
        self.weights().iter().sum()
    }

    // b1 * b2 mod (x^N - 1), plus b3
    fn to_dense(&self) -> Vec<i32> {
        let n = self.dim();
        let [b1, b2, b3] = &self.factors;
        let mut res = b3.to_dense();
        let b2 = b2.to_dense();
        for (i, x) in b1.to_dense().into_iter().enumerate() {
            for (j, &y) in b2.iter().enumerate() {
                res[(i + j) % n] += x * y;
            }
        }
        res
    }
}

impl ParamSet {
    /// Sample a product-form polynomial with the weights of this parameter set.
    pub fn sample_prod_form<R: Rng>(&self, rng: &mut R) -> Result<ProductFormPoly> {
        ProductFormPoly::rand(rng, self.n, self.weights)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_flat_layout() {
        let indices = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let b = ProductFormPoly::from_flat(11, &indices, [4, 4, 2]).unwrap();
        let [b1, b2, b3] = b.factors();
        assert_eq!((b1.pos(), b1.neg()), (&[1, 2][..], &[3, 4][..]));
        assert_eq!((b2.pos(), b2.neg()), (&[5, 6][..], &[7, 8][..]));
        assert_eq!((b3.pos(), b3.neg()), (&[9][..], &[10][..]));
        assert_eq!(b.weights(), [4, 4, 2]);
        assert_eq!(b.weight(), 10);

        assert_eq!(
            ProductFormPoly::from_flat(11, &indices, [4, 4, 3]),
            Err(RingError::CountMismatch {
                counts: [4, 4, 3],
                len: 10
            })
        );
    }

    #[test]
    fn test_flat_counts_overflow() {
        assert_eq!(
            ProductFormPoly::from_flat(11, &[1], [usize::MAX, 2, 0]),
            Err(RingError::CountMismatch {
                counts: [usize::MAX, 2, 0],
                len: 1
            })
        );
        assert_eq!(
            ProductFormPoly::from_flat(11, &[1, 2], [usize::MAX, usize::MAX, 4]),
            Err(RingError::CountMismatch {
                counts: [usize::MAX, usize::MAX, 4],
                len: 2
            })
        );
    }

    #[test]
    fn test_factor_dimensions_agree() {
        let b1 = SparseTernaryPoly::new(11, &[1], &[2]).unwrap();
        let b2 = SparseTernaryPoly::new(13, &[1], &[2]).unwrap();
        assert_eq!(
            ProductFormPoly::new(b1.clone(), b2, b1),
            Err(RingError::DimensionMismatch {
                expected: 11,
                got: 13
            })
        );
    }

    #[test]
    fn test_dense_expansion() {
        // (1 + x) * (1 - x^10) + x^5 = 1 + x - x^10 - x^11 + x^5 = x - x^10 + x^5 mod x^11 - 1
        let b1 = SparseTernaryPoly::new(11, &[0, 1], &[]).unwrap();
        let b2 = SparseTernaryPoly::new(11, &[0], &[10]).unwrap();
        let b3 = SparseTernaryPoly::new(11, &[5], &[]).unwrap();
        let b = ProductFormPoly::new(b1, b2, b3).unwrap();
        assert_eq!(b.to_dense(), vec![0, 1, 0, 0, 0, 1, 0, 0, 0, 0, -1]);
    }

    #[test]
    fn test_param_set_sampling() {
        let mut rng = ChaCha20Rng::from_seed([0u8; 32]);
        for p in ParamSet::ALL {
            let b = p.sample_prod_form(&mut rng).unwrap();
            assert_eq!(b.dim(), p.n);
            assert_eq!(b.weights(), p.weights);
        }
    }
}
