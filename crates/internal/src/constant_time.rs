//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the input values.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time selection between two byte arrays
///
/// Returns `a` if `choice` is set, `b` otherwise. The selection is a
/// data-independent conditional move over every byte; neither the control
/// flow nor the memory-access pattern depends on `choice`.
pub fn ct_select_array<const N: usize>(a: &[u8; N], b: &[u8; N], choice: Choice) -> [u8; N] {
    let mut out = [0u8; N];
    for i in 0..N {
        out[i] = u8::conditional_select(&b[i], &a[i], choice);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_matches_plain_comparison() {
        assert!(ct_eq([1u8, 2, 3], [1u8, 2, 3]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2, 4]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2]));
    }

    #[test]
    fn select_array_follows_choice() {
        let a = [0xAAu8; 16];
        let b = [0x55u8; 16];
        assert_eq!(ct_select_array(&a, &b, Choice::from(1)), a);
        assert_eq!(ct_select_array(&a, &b, Choice::from(0)), b);
    }
}
