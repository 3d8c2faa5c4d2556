//! Modular reduction for coefficients modulo q = 3329.
//!
//! Coefficients are kept in signed 16-bit representation. Montgomery
//! arithmetic works with R = 2^16; Barrett reduction maps any i16 into
//! the centered range [-q/2, q/2].

use qkem_params::mlkem::MLKEM_Q;

const Q: i32 = MLKEM_Q as i32;

/// q^(-1) mod 2^16, as a signed 16-bit value.
const QINV: i16 = -3327;

/// R mod q = 2^16 mod q, centered.
pub(crate) const MONT: i16 = -1044;

/// R^2 mod q; multiplying by this via [`fqmul`] converts to Montgomery form.
pub(crate) const MONT_SQUARED: i16 = 1353;

/// Montgomery reduction: for |a| < q * 2^15, returns t = a * R^(-1) mod q
/// with |t| < q.
#[inline]
pub(crate) fn montgomery_reduce(a: i32) -> i16 {
    let t = (a as i16).wrapping_mul(QINV) as i32;
    ((a - t * Q) >> 16) as i16
}

/// Barrett reduction: maps any i16 to the representative in
/// [-q/2, q/2] congruent to it mod q.
#[inline]
pub(crate) fn barrett_reduce(a: i16) -> i16 {
    const V: i32 = ((1 << 26) + Q / 2) / Q;
    let t = (V * a as i32 + (1 << 25)) >> 26;
    // t * Q can exceed i16 for large |a|; subtract in i32
    (a as i32 - t * Q) as i16
}

/// Montgomery multiplication: a * b * R^(-1) mod q.
#[inline]
pub(crate) fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce(a as i32 * b as i32)
}

/// Maps a centered representative to its canonical value in [0, q).
#[inline]
pub(crate) fn to_unsigned(a: i16) -> u16 {
    let mut t = a as u16;
    t = t.wrapping_add(((a >> 15) as u16) & MLKEM_Q);
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modq(a: i64) -> i64 {
        a.rem_euclid(Q as i64)
    }

    #[test]
    fn barrett_reduce_exhaustive() {
        for a in i16::MIN..=i16::MAX {
            let r = barrett_reduce(a);
            assert_eq!(modq(r as i64), modq(a as i64), "a = {}", a);
            // both endpoints occur: a = -31625 reduces to -1664
            assert!(r as i32 >= -Q / 2 && r as i32 <= Q / 2, "a = {} r = {}", a, r);
        }
    }

    #[test]
    fn montgomery_reduce_congruence() {
        // t = montgomery_reduce(a) satisfies t * 2^16 == a (mod q)
        for a in [0i32, 1, -1, 3328, -3329, 12345, -54321, 3329 * 32767, -3329 * 32768] {
            let t = montgomery_reduce(a) as i64;
            assert_eq!(modq(t << 16), modq(a as i64), "a = {}", a);
            assert!(t.abs() < Q as i64);
        }
    }

    #[test]
    fn fqmul_against_schoolbook() {
        // fqmul(a, b) * 2^16 == a * b (mod q)
        for (a, b) in [(17i16, 512i16), (-1664, 1664), (3000, -3000), (1, 1)] {
            let t = fqmul(a, b) as i64;
            assert_eq!(modq(t << 16), modq(a as i64 * b as i64));
        }
    }

    #[test]
    fn montgomery_constants() {
        assert_eq!(modq(MONT as i64), modq(1i64 << 16));
        assert_eq!(modq(MONT_SQUARED as i64), modq(1i64 << 32));
        // QINV is q^(-1) mod 2^16
        assert_eq!((QINV as i32).wrapping_mul(MLKEM_Q as i32) & 0xffff, 1);
    }

    #[test]
    fn to_unsigned_canonical_range() {
        for a in -3328i16..=3328 {
            let u = to_unsigned(a);
            assert!(u < MLKEM_Q);
            assert_eq!(modq(u as i64), modq(a as i64));
        }
    }
}
