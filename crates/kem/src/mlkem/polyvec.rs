//! Vectors of polynomials of length k, generic over the parameter set.

use alloc::vec::Vec;
use core::marker::PhantomData;

use qkem_algorithms::{MulCache, NttPolynomial, Polynomial};
use zeroize::Zeroize;

use super::params::MlKemParams;

/// A length-k vector of polynomials in the standard basis.
pub(crate) struct PolyVec<P: MlKemParams> {
    pub polys: Vec<Polynomial>,
    _params: PhantomData<P>,
}

/// A length-k vector of polynomials in the NTT basis.
pub(crate) struct NttPolyVec<P: MlKemParams> {
    pub polys: Vec<NttPolynomial>,
    _params: PhantomData<P>,
}

// Manual impls: a derive would put a `Clone` bound on the parameter
// marker `P`, which is never cloned.
impl<P: MlKemParams> Clone for PolyVec<P> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: MlKemParams> Clone for NttPolyVec<P> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: MlKemParams> PolyVec<P> {
    pub fn from_polys(polys: Vec<Polynomial>) -> Self {
        debug_assert_eq!(polys.len(), P::K);
        Self {
            polys,
            _params: PhantomData,
        }
    }

    /// Component-wise forward NTT.
    pub fn ntt(self) -> NttPolyVec<P> {
        NttPolyVec {
            polys: self.polys.into_iter().map(Polynomial::ntt).collect(),
            _params: PhantomData,
        }
    }

    pub fn reduce(&mut self) {
        for p in self.polys.iter_mut() {
            p.reduce();
        }
    }

    pub fn add_assign(&mut self, rhs: &Self) {
        for (a, b) in self.polys.iter_mut().zip(rhs.polys.iter()) {
            *a += b;
        }
    }
}

impl<P: MlKemParams> NttPolyVec<P> {
    pub fn from_polys(polys: Vec<NttPolynomial>) -> Self {
        debug_assert_eq!(polys.len(), P::K);
        Self {
            polys,
            _params: PhantomData,
        }
    }

    pub fn reduce(&mut self) {
        for p in self.polys.iter_mut() {
            p.reduce();
        }
    }

    /// Multiply every component by R, see [`NttPolynomial::to_mont`].
    pub fn to_mont(&mut self) {
        for p in self.polys.iter_mut() {
            p.to_mont();
        }
    }

    pub fn add_assign(&mut self, rhs: &Self) {
        for (a, b) in self.polys.iter_mut().zip(rhs.polys.iter()) {
            *a += b;
        }
    }

    /// Component-wise inverse NTT.
    pub fn ntt_inverse(self) -> PolyVec<P> {
        PolyVec {
            polys: self
                .polys
                .into_iter()
                .map(NttPolynomial::ntt_inverse)
                .collect(),
            _params: PhantomData,
        }
    }

    /// Precompute multiplication caches for every component. Components
    /// must be normalized.
    pub fn mulcache(&self) -> Vec<MulCache> {
        self.polys.iter().map(NttPolynomial::mulcache).collect()
    }

    /// Inner product with `other` using its caches: the k pointwise
    /// products are accumulated and normalized. The result carries one
    /// factor of R^(-1), like a single [`NttPolynomial::basemul_cached`].
    pub fn basemul_acc_cached(&self, other: &NttPolyVec<P>, caches: &[MulCache]) -> NttPolynomial {
        debug_assert_eq!(caches.len(), P::K);
        let mut acc = NttPolynomial::zero();
        for ((a, b), cache) in self.polys.iter().zip(other.polys.iter()).zip(caches.iter()) {
            let term = a.basemul_cached(b, cache);
            acc += &term;
        }
        acc.reduce();
        acc
    }
}

impl<P: MlKemParams> Zeroize for PolyVec<P> {
    fn zeroize(&mut self) {
        for p in self.polys.iter_mut() {
            p.zeroize();
        }
    }
}

impl<P: MlKemParams> Zeroize for NttPolyVec<P> {
    fn zeroize(&mut self) {
        for p in self.polys.iter_mut() {
            p.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mlkem::params::MlKem768ParamsImpl;

    // The parameter markers are not Clone; cloning a vector must not
    // require them to be.
    fn clone_in_generic_context<P: MlKemParams>(u: &PolyVec<P>) -> (PolyVec<P>, NttPolyVec<P>) {
        let u_hat = u.clone().ntt();
        (u.clone(), u_hat.clone())
    }

    #[test]
    fn clone_is_independent_of_the_original() {
        let u = PolyVec::<MlKem768ParamsImpl>::from_polys(alloc::vec![Polynomial::zero(); 3]);
        let (mut copy, _u_hat) = clone_in_generic_context(&u);
        copy.polys[0].coeffs[0] = 1;
        assert_eq!(u.polys[0].coeffs[0], 0);
    }
}
