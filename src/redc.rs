//! Montgomery reduction (spec.md §4.2): the single step every range variant
//! builds its `multiply`/`square`/`fmadd` on top of.

use crate::int::{cselect, Int};

/// Reduce `u = u_hi * R + u_lo` to `t` with `t * R ≡ u (mod n)`, leaving `t`
/// in the "incomplete" range `(-n, n)` (represented as the wraparound bit
/// pattern of `T`; read it back with [`Int::to_signed`]).
///
/// # Preconditions
///
/// `u_hi < n` (equivalently `u < n * R`) and `n` is odd.
#[inline]
pub fn redc_incomplete<T: Int>(u_hi: T, u_lo: T, n: T, neg_inv_n: T) -> T {
    redc_incomplete_tagged::<T, true>(u_hi, u_lo, n, neg_inv_n)
}

/// [`redc_incomplete`] with an explicit performance tag (spec.md §4.2,
/// §6): `LOW_LATENCY = true` hoists the carry computation off the
/// `u_hi`-dependent chain at the cost of a branch; `false` folds the carry
/// into a single dependent add chain, using one fewer temporary.
/// Both compute the same value; pick whichever the target's pipeline
/// rewards.
#[inline]
pub fn redc_incomplete_tagged<T: Int, const LOW_LATENCY: bool>(
    u_hi: T,
    u_lo: T,
    n: T,
    neg_inv_n: T,
) -> T {
    debug_check!(u_hi < n, "redc: u_hi must be < n");

    // m = u_lo * neg_inv_n mod R (only the low half of the product matters).
    let m = u_lo.wrapping_mul(neg_inv_n);
    let (mn_hi, mn_lo) = m.widening_mul(n);
    // mn_lo + u_lo ≡ 0 (mod R) by construction of neg_inv_n; only the carry
    // out of that addition feeds into the result.
    let (_, carry) = u_lo.overflowing_add(mn_lo);

    if LOW_LATENCY {
        let base = u_hi.wrapping_sub(mn_hi);
        cselect(carry, base.wrapping_add(T::ONE), base)
    } else {
        let carry_t = cselect(carry, T::ONE, T::ZERO);
        u_hi.wrapping_sub(mn_hi).wrapping_add(carry_t)
    }
}

/// Reduce `u = u_hi * R + u_lo` to the unique `t` in `[0, n)` with
/// `t * R ≡ u (mod n)`. Defined as [`redc_incomplete`] followed by a
/// branchless conditional add of `n`.
///
/// # Preconditions
///
/// `u_hi < n` and `n` is odd.
#[inline]
pub fn redc_standard<T: Int>(u_hi: T, u_lo: T, n: T, neg_inv_n: T) -> T {
    let t = redc_incomplete(u_hi, u_lo, n, neg_inv_n);
    let is_negative = t.to_signed() < T::Signed::default();
    let t = cselect(is_negative, t.wrapping_add(n), t);
    debug_check!(t < n, "redc_standard: result not fully reduced");
    t
}

#[cfg(test)]
mod test {
    use super::*;

    /// Computes `a * b mod n` the naive way, for cross-checking REDC
    /// against inputs already in the `u_hi * R + u_lo < n * R` shape REDC
    /// expects, by going through plain Montgomery multiplication by hand.
    fn redc_by_division(u_hi: u64, u_lo: u64, n: u64) -> u64 {
        let u = (u_hi as u128) << 64 | u_lo as u128;
        let r_inv = mod_inverse(1u128 << 64, n as u128);
        ((u % n as u128) * r_inv % n as u128) as u64
    }

    fn mod_inverse(a: u128, n: u128) -> u128 {
        // Extended Euclid, good enough for small test moduli.
        let (mut old_r, mut r) = (a as i128, n as i128);
        let (mut old_s, mut s) = (1i128, 0i128);
        while r != 0 {
            let q = old_r / r;
            let (nr, ns) = (old_r - q * r, old_s - q * s);
            old_r = r;
            r = nr;
            old_s = s;
            s = ns;
        }
        ((old_s % n as i128 + n as i128) % n as i128) as u128
    }

    fn neg_inv_mod_r64(n: u64) -> u64 {
        let mut inv = 1u64;
        for _ in 0..63 {
            inv = inv.wrapping_mul(inv);
            inv = inv.wrapping_mul(n);
        }
        inv.wrapping_neg()
    }

    #[test]
    fn redc_standard_matches_division_based_reduction() {
        let n = 0xFFFF_FFFF_FFFF_FFC5u64; // a large odd modulus
        let neg_inv_n = neg_inv_mod_r64(n);
        for (u_hi, u_lo) in [(0u64, 1u64), (1, 0), (n - 1, u64::MAX), (5, 12345)] {
            if u_hi >= n {
                continue;
            }
            let got = redc_standard(u_hi, u_lo, n, neg_inv_n);
            let expected = redc_by_division(u_hi, u_lo, n);
            assert_eq!(got, expected, "u_hi={u_hi} u_lo={u_lo}");
        }
    }

    #[test]
    fn low_latency_and_low_uops_tags_agree() {
        let n = 97u64;
        let neg_inv_n = neg_inv_mod_r64(n);
        for u_hi in 0..n {
            for u_lo in [0u64, 1, u64::MAX, u64::MAX / 2] {
                let a = redc_incomplete_tagged::<u64, true>(u_hi, u_lo, n, neg_inv_n);
                let b = redc_incomplete_tagged::<u64, false>(u_hi, u_lo, n, neg_inv_n);
                assert_eq!(a, b);
            }
        }
    }
}
