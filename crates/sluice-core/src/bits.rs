//! Round-sizing arithmetic.
//!
//! Interactive proofs run one round per bit of the padded table length,
//! with a floor of one round so degenerate tables still produce a
//! non-empty protocol. [`log2_up`] is that sizing function.

/// Ceiling log base 2, floored at 1.
///
/// Returns the smallest `e >= 1` such that `2^e >= n` for `n >= 2`, and
/// `1` for `n` in `{0, 1}`. Equivalently: the bit length of `n - 1`,
/// never less than 1.
///
/// Exact over the whole `u64` range. The implementation counts bits via
/// [`u64::leading_zeros`] rather than shifting in a loop, so
/// `n = u64::MAX` cannot overflow a shift amount.
///
/// ```rust
/// use sluice_core::log2_up;
///
/// assert_eq!(log2_up(1), 1);
/// assert_eq!(log2_up(1024), 10);
/// assert_eq!(log2_up(1025), 11);
/// ```
#[must_use]
pub fn log2_up(n: u64) -> u32 {
    let m = n.saturating_sub(1);
    (u64::BITS - m.leading_zeros()).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_match_table() {
        assert_eq!(log2_up(0), 1);
        assert_eq!(log2_up(1), 1);
        assert_eq!(log2_up(2), 1);
        assert_eq!(log2_up(3), 2);
        assert_eq!(log2_up(4), 2);
        assert_eq!(log2_up(5), 3);
        assert_eq!(log2_up(1024), 10);
        assert_eq!(log2_up(1025), 11);
    }

    #[test]
    fn powers_of_two_are_exact() {
        for e in 1..64u32 {
            let n = 1u64 << e;
            assert_eq!(log2_up(n), e);
            assert_eq!(log2_up(n + 1), e + 1);
        }
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(log2_up(u64::MAX), 64);
        assert_eq!(log2_up(u64::MAX - 1), 64);
        assert_eq!(log2_up((1u64 << 63) + 1), 64);
        assert_eq!(log2_up(1u64 << 63), 63);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn exponent_brackets_the_input(n in 2u64..) {
                let e = log2_up(n);
                prop_assert!(e >= 1);
                prop_assert!(e <= 64);
                // 2^(e-1) < n <= 2^e, checked in u128 so e = 64 is fine.
                prop_assert!((1u128 << (e - 1)) < u128::from(n));
                prop_assert!(u128::from(n) <= (1u128 << e));
            }

            #[test]
            fn never_below_one(n in any::<u64>()) {
                prop_assert!(log2_up(n) >= 1);
            }
        }
    }
}
