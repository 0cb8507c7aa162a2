//! Half variant (spec.md §4.3.2): `n < R/2`. Internally balanced around
//! zero so REDC's sign can be folded in; stores the incomplete residue in
//! `(-n, n)` rather than canonicalizing on every operation.
//!
//! `add`/`sub`/`halve`/`multiply` compute directly on the stored signed
//! residues (`original_source/.../MontyHalfRange.h`'s `add(V,C)`/
//! `subtract`/`halve`), canonicalizing at most one operand and never
//! rebalancing the result afterward: the signed arithmetic already lands in
//! `(-n, n)` by construction, which is the entire reason this variant
//! exists. Only `fmadd`/`fmsub` fall back to the `Variant` trait's default
//! composition (`add(multiply(x, y), z)`): the source's fully fused version
//! folds the addend directly into REDC's high limb before reduction, which
//! needs `redc_incomplete` to accept a signed high limb, and this crate's
//! `redc_incomplete` contract (`u_hi < n`, unsigned) doesn't admit that. See
//! DESIGN.md for the bound proof and why that one fusion is still skipped.

use crate::int::{cselect, Int};
use crate::redc::{redc_incomplete, redc_standard};
use crate::value::{Canonical, Fusing, Mont};
use crate::variant::{Modulus, Variant};

#[derive(Copy, Clone, Debug)]
pub struct Half<T: Int> {
    m: Modulus<T>,
}

impl<T: Int> Half<T> {
    fn half_n(&self) -> T {
        // floor(n/2) = (n-1)/2 since n is odd.
        self.m.n.shr1()
    }

    /// Maps `x`'s raw bits into `[-n, 0)` by subtracting `n` from whichever
    /// representative is already below it, without touching the other
    /// operand. Grounded on `MontyHalfRange::add(V, C)`, which canonicalizes
    /// only the right-hand operand and biases the left one negative instead
    /// of canonicalizing both.
    fn negative_biased(&self, x: Mont<T>) -> T {
        let bits = x.bits();
        cselect(bits < self.m.n, bits.wrapping_sub(self.m.n), bits)
    }
}

impl<T: Int> Variant<T> for Half<T> {
    fn max_modulus() -> T {
        // floor((R-1)/2) = 2^(W-1) - 1, odd for every width.
        T::MAX.shr1()
    }

    fn new(n: T) -> Self {
        debug_check!(n <= Self::max_modulus(), "Half: modulus exceeds max_modulus()");
        Self { m: Modulus::new(n) }
    }

    fn modulus(&self) -> T {
        self.m.n
    }

    fn is_valid(&self, v: Mont<T>) -> bool {
        let n_signed = self.m.n.to_signed();
        let neg_n_signed = self.m.n.wrapping_neg().to_signed();
        let s = v.bits().to_signed();
        s > neg_n_signed && s < n_signed
    }

    fn convert_in(&self, a: T) -> Mont<T> {
        debug_check!(a < self.m.n, "convert_in: value not reduced below modulus");
        let (hi, lo) = a.widening_mul(self.m.r2_mod_n);
        Mont::from_bits(redc_incomplete(hi, lo, self.m.n, self.m.neg_inv_n))
    }

    fn convert_out(&self, v: Mont<T>) -> T {
        let normalized = self.canonical_of(v).bits();
        redc_standard(T::ZERO, normalized, self.m.n, self.m.neg_inv_n)
    }

    fn canonical_of(&self, v: Mont<T>) -> Canonical<T> {
        let n = self.m.n;
        let bits = v.bits();
        let negative = bits.to_signed() < T::Signed::default();
        Canonical::from_bits(cselect(negative, bits.wrapping_add(n), bits))
    }

    fn fusing_of(&self, v: Mont<T>) -> Fusing<T> {
        let c = self.canonical_of(v).bits();
        let half = self.half_n();
        Fusing::from_bits(cselect(c > half, c.wrapping_sub(self.m.n), c))
    }

    fn zero(&self) -> Canonical<T> {
        Canonical::from_bits(T::ZERO)
    }

    fn one(&self) -> Canonical<T> {
        Canonical::from_bits(self.m.r_mod_n)
    }

    fn neg_one(&self) -> Canonical<T> {
        Canonical::from_bits(self.m.n.wrapping_sub(self.m.r_mod_n))
    }

    fn add(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        // tmpx in [-n, 0), cy in [0, n): tmpx + cy lands in (-n, n) with no
        // further correction, matching MontyHalfRange::add(V, C).
        let tmpx = self.negative_biased(x);
        let cy = self.canonical_of(y).bits();
        Mont::from_bits(tmpx.wrapping_add(cy))
    }

    fn sub(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        // cx, cy both in [0, n): the wraparound difference already
        // represents the correct value in (-n, n), so no rebalance step is
        // needed (MontyHalfRange::subtract).
        let cx = self.canonical_of(x).bits();
        let cy = self.canonical_of(y).bits();
        Mont::from_bits(cx.wrapping_sub(cy))
    }

    fn halve(&self, x: Mont<T>) -> Mont<T> {
        // Arithmetic (sign-extending) shift of the raw signed residue by
        // one bit, then add floor(n/2)+1 when it was odd. `shr1` on `Int` is
        // a logical shift, so the top bit is restored by hand when `x` is
        // negative (MontyHalfRange::halve).
        let bits = x.bits();
        let sign_mask = !(T::MAX.shr1());
        let is_negative = bits.to_signed() < T::Signed::default();
        let halfval = cselect(is_negative, bits.shr1() | sign_mask, bits.shr1());
        let halfn_ceiling = T::ONE.wrapping_add(self.half_n());
        let oddsum = halfval.wrapping_add(halfn_ceiling);
        Mont::from_bits(cselect(bits.is_odd(), oddsum, halfval))
    }

    fn multiply(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        let (hi, lo) = signed_mul_hi_lo(x.bits(), y.bits());
        let hi_is_negative = hi.to_signed() < T::Signed::default();
        let hi = cselect(hi_is_negative, hi.wrapping_add(self.m.n), hi);
        Mont::from_bits(redc_standard(hi, lo, self.m.n, self.m.neg_inv_n))
    }
}

/// Signed widening multiply derived from the unsigned `widening_mul`
/// already on `Int` (no separate signed-widening primitive exists on the
/// trait): compute the unsigned product, then subtract each operand's
/// *other* factor from the high limb wherever that operand was negative.
/// This is the standard two's-complement correction from `umulh` to
/// `smulh`; the low limb needs no correction, since it only depends on bits
/// below the operands' sign bit.
///
/// For `x, y` in `(-n, n)` with `n < R/2`, the resulting `hi` (read via
/// `to_signed`) is bounded to `[-n, n)`: `x*y < n²` and `n²/R < n` since
/// `n < R`, bounding `hi` above by `n`; the symmetric argument on `x*y >
/// -n²` bounds it below by `-n`. `Half::multiply` uses this to land `hi`
/// back in `[0, n)` with a single conditional add, satisfying
/// `redc_standard`'s precondition without canonicalizing either operand
/// first.
fn signed_mul_hi_lo<T: Int>(x: T, y: T) -> (T, T) {
    let (u_hi, lo) = x.widening_mul(y);
    let zero_s = T::Signed::default();
    let hi = u_hi
        .wrapping_sub(cselect(x.to_signed() < zero_s, y, T::ZERO))
        .wrapping_sub(cselect(y.to_signed() < zero_s, x, T::ZERO));
    (hi, lo)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let v = Half::<u64>::new(97);
        for a in 0..97u64 {
            let m = v.convert_in(a);
            assert!(v.is_valid(m));
            assert_eq!(v.convert_out(m), a);
        }
    }

    #[test]
    fn add_sub_multiply_match_naive_arithmetic() {
        let n = 97u64;
        let v = Half::<u64>::new(n);
        for a in 0..n {
            for b in [0u64, 1, 5, 48, 96] {
                let ma = v.convert_in(a);
                let mb = v.convert_in(b);
                assert_eq!(v.convert_out(v.add(ma, mb)), (a + b) % n);
                assert_eq!(v.convert_out(v.sub(ma, mb)), (a + n - b) % n);
                assert_eq!(
                    v.convert_out(v.multiply(ma, mb)),
                    ((a as u128 * b as u128) % n as u128) as u64
                );
            }
        }
    }

    #[test]
    fn halve_matches_naive_inverse_of_two() {
        let n = 97u64;
        let v = Half::<u64>::new(n);
        for a in 0..n {
            let ma = v.convert_in(a);
            let got = v.convert_out(v.halve(ma));
            let expected = (0..n).find(|x| (x * 2) % n == a).unwrap();
            assert_eq!(got, expected, "a={a}");
        }
    }

    #[test]
    fn fusing_is_balanced_representative() {
        let n = 97u64;
        let v = Half::<u64>::new(n);
        for a in 0..n {
            let f = v.fusing_of(v.convert_in(a));
            let s = f.bits().to_signed();
            assert!(s >= -((n as i64 - 1) / 2) && s <= (n as i64 - 1) / 2);
        }
    }

    #[test]
    fn signed_mul_hi_lo_matches_i128_reference() {
        let cases: &[(u64, u64)] = &[
            (1, 1),
            (u64::MAX, u64::MAX),      // (-1) * (-1) = 1
            (u64::MAX, 2),             // (-1) * 2 = -2
            (u64::MAX - 4, 9),         // (-5) * 9 = -45
            (123456789, u64::MAX - 9), // 123456789 * (-10)
        ];
        for &(x, y) in cases {
            let (hi, lo) = signed_mul_hi_lo(x, y);
            let got = ((hi as i128) << 64) | (lo as u128 as i128);
            let expected = (x as i64 as i128) * (y as i64 as i128);
            assert_eq!(got, expected, "x={x} y={y}");
        }
    }

    #[test]
    fn seed_scenario_boundary_moduli() {
        let max_n = Half::<u64>::max_modulus();
        for &n in &[max_n, max_n - 2] {
            let v = Half::<u64>::new(n);
            let a = v.convert_in(n - 1);
            let b = v.convert_in(2);
            assert_eq!(v.convert_out(v.add(a, b)), 1);
            assert_eq!(v.convert_out(v.sub(a, b)), n - 3);
            assert_eq!(
                v.convert_out(v.multiply(a, b)),
                (((n - 1) as u128 * 2) % n as u128) as u64
            );
            assert_eq!(v.convert_out(v.halve(v.convert_in(1))), (n + 1) / 2);
        }
    }
}
