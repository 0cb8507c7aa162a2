//! Value-level helpers (spec.md §4.7): `gcd_with_modulus`, `remainder`,
//! `inverse`, `divide_by_small_power_of_two`. These sit above `Form`
//! rather than inside the `Variant` trait since none of them need a
//! variant-specific fast path beyond what `Form`'s public operations
//! already provide.

use crate::form::Form;
use crate::int::Int;
use crate::value::Mont;
use crate::variant::full::sub_mod_full;
use crate::variant::Variant;

/// `gcd(convert_out(x), n)`, computed by a caller-supplied binary gcd.
/// Exposed as a helper (rather than left to the caller to call
/// `convert_out` themselves) so a future variant could skip the
/// conversion for its internal representation; none of the four in this
/// crate currently do.
pub fn gcd_with_modulus<T: Int, V: Variant<T>>(
    form: &Form<T, V>,
    x: Mont<T>,
    gcd_fn: impl FnOnce(T, T) -> T,
) -> T {
    gcd_fn(form.convert_out(x), form.modulus())
}

/// `a mod n`.
pub fn remainder<T: Int, V: Variant<T>>(form: &Form<T, V>, a: T) -> T {
    a.rem(form.modulus())
}

/// The modular multiplicative inverse of `x`, in Mont form. Returns
/// `zero()` when `gcd(convert_out(x), n) > 1` (spec.md §4.7, §7 category
/// 3: mathematical non-existence reported as the canonical zero, not an
/// `Option`).
pub fn inverse<T: Int, V: Variant<T>>(form: &Form<T, V>, x: Mont<T>) -> Mont<T> {
    let n = form.modulus();
    let a = form.convert_out(x);
    match mod_inverse(a, n) {
        Some(inv) => form.convert_in(inv),
        None => form.zero().into(),
    }
}

/// `x * (2^k)⁻¹ mod n` for small `k`, by `k` repeated halvings.
pub fn divide_by_small_power_of_two<T: Int, V: Variant<T>>(
    form: &Form<T, V>,
    x: Mont<T>,
    k: u32,
) -> Mont<T> {
    let mut v = x;
    let mut i = 0;
    while i < k {
        v = form.halve(v);
        i += 1;
    }
    v
}

/// Binary extended Euclidean inverse of `a` mod the odd `n`
/// (Guajardo-Kumar-Paar-Pelzl), in the style of `MontConfig::inverse`
/// (`field/fp/montgomery_backend.rs`), generalized from that multi-limb
/// `BigInt` version down to a single native-width `Int`. Returns `None`
/// when `gcd(a, n) > 1`.
fn mod_inverse<T: Int>(a: T, n: T) -> Option<T> {
    debug_check!(n.is_odd(), "mod_inverse: modulus must be odd");
    if a == T::ZERO {
        return None;
    }

    let mut u = a;
    let mut v = n;
    let mut x1 = T::ONE;
    let mut x2 = T::ZERO;

    while u != T::ONE && v != T::ONE {
        while !u.is_odd() {
            u = u.shr1();
            x1 = if x1.is_odd() {
                x1.wrapping_add(n).shr1()
            } else {
                x1.shr1()
            };
        }
        while !v.is_odd() {
            v = v.shr1();
            x2 = if x2.is_odd() {
                x2.wrapping_add(n).shr1()
            } else {
                x2.shr1()
            };
        }

        if u == v {
            // gcd(a, n) = u > 1.
            return None;
        }
        if u > v {
            u = u.wrapping_sub(v);
            x1 = sub_mod_full(x1, x2, n);
        } else {
            v = v.wrapping_sub(u);
            x2 = sub_mod_full(x2, x1, n);
        }
    }

    if u == T::ONE {
        Some(x1.rem(n))
    } else {
        Some(x2.rem(n))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::variant::Full;

    #[test]
    fn inverse_matches_known_vector() {
        assert_eq!(mod_inverse(3u64, 11), Some(4));
        assert_eq!(mod_inverse(6u64, 11), Some(2));
        assert_eq!(mod_inverse(2u64, 9), Some(5));
    }

    #[test]
    fn inverse_is_none_when_not_coprime() {
        assert_eq!(mod_inverse(6u64, 9), None);
        assert_eq!(mod_inverse(0u64, 9), None);
    }

    #[test]
    fn inverse_round_trips_through_form() {
        let n = 1_000_000_007u64;
        let f = Form::<u64, Full<u64>>::new(n);
        for a in [1u64, 2, 999_999_999, 123_456] {
            let x = f.convert_in(a);
            let inv = inverse(&f, x);
            assert_eq!(f.convert_out(f.multiply(x, inv)), 1);
        }
    }

    #[test]
    fn inverse_of_non_coprime_is_zero() {
        let n = 117u64; // = 9 * 13
        let f = Form::<u64, Full<u64>>::new(n);
        let x = f.convert_in(78); // gcd(78, 117) = 39
        assert_eq!(f.convert_out(inverse(&f, x)), 0);
    }

    #[test]
    fn seed_scenario_gcd_with_modulus() {
        let n = 117u64;
        let f = Form::<u64, Full<u64>>::new(n);
        let gcd = |a: u64, b: u64| {
            let (mut a, mut b) = (a, b);
            while b != 0 {
                let t = b;
                b = a % b;
                a = t;
            }
            a
        };
        assert_eq!(gcd_with_modulus(&f, f.convert_in(78), gcd), 39);
        assert_eq!(gcd_with_modulus(&f, f.convert_in(28), gcd), 1);
    }

    #[test]
    fn remainder_matches_native_mod() {
        let n = 97u64;
        let f = Form::<u64, Full<u64>>::new(n);
        assert_eq!(remainder(&f, 250), 250 % n);
    }

    #[test]
    fn divide_by_small_power_of_two_matches_repeated_halving() {
        let n = 97u64;
        let f = Form::<u64, Full<u64>>::new(n);
        let x = f.convert_in(10);
        let got = f.convert_out(divide_by_small_power_of_two(&f, x, 3));
        let expected = (0..n).find(|v| (v * 8) % n == 10).unwrap();
        assert_eq!(got, expected);
    }
}
