//! Wrapped-Standard variant (spec.md §4.3.4): not Montgomery at all.
//! `convert_in`/`convert_out` are the identity and every operation
//! delegates to plain modular arithmetic, so a caller can flip a whole
//! algorithm between Montgomery and non-Montgomery at one type parameter.

use crate::int::{add_mod, cselect, Int};
use crate::value::{Canonical, Fusing, Mont};
use crate::variant::Variant;

#[derive(Copy, Clone, Debug)]
pub struct WrappedStandard<T: Int> {
    n: T,
}

impl<T: Int> Variant<T> for WrappedStandard<T> {
    fn max_modulus() -> T {
        T::MAX
    }

    fn new(n: T) -> Self {
        debug_check!(n > T::ONE, "WrappedStandard: modulus must be greater than 1");
        debug_check!(
            n <= Self::max_modulus(),
            "WrappedStandard: modulus exceeds max_modulus()"
        );
        Self { n }
    }

    fn modulus(&self) -> T {
        self.n
    }

    fn is_valid(&self, v: Mont<T>) -> bool {
        v.bits() < self.n
    }

    fn convert_in(&self, a: T) -> Mont<T> {
        debug_check!(a < self.n, "convert_in: value not reduced below modulus");
        Mont::from_bits(a)
    }

    fn convert_out(&self, v: Mont<T>) -> T {
        v.bits()
    }

    fn canonical_of(&self, v: Mont<T>) -> Canonical<T> {
        Canonical::from_bits(v.bits())
    }

    fn fusing_of(&self, v: Mont<T>) -> Fusing<T> {
        Fusing::from_bits(v.bits())
    }

    fn zero(&self) -> Canonical<T> {
        Canonical::from_bits(T::ZERO)
    }

    fn one(&self) -> Canonical<T> {
        Canonical::from_bits(T::ONE)
    }

    fn neg_one(&self) -> Canonical<T> {
        Canonical::from_bits(self.n.wrapping_sub(T::ONE))
    }

    fn add(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        Mont::from_bits(add_mod(x.bits(), y.bits(), self.n))
    }

    fn sub(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        let (diff, borrow) = x.bits().overflowing_sub(y.bits());
        Mont::from_bits(cselect(borrow, diff.wrapping_add(self.n), diff))
    }

    fn halve(&self, x: Mont<T>) -> Mont<T> {
        debug_check!(self.n.is_odd(), "halve: modulus must be odd");
        let bits = x.bits();
        let half_unshifted = bits.shr1();
        Mont::from_bits(cselect(
            bits.is_odd(),
            half_unshifted.wrapping_add(self.n.shr1()).wrapping_add(T::ONE),
            half_unshifted,
        ))
    }

    fn multiply(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        Mont::from_bits(mulmod_binary(x.bits(), y.bits(), self.n))
    }
}

/// `a * b mod n` by binary double-and-add, needing only single-width
/// add/shift. Used here instead of a widen-then-divide because no type
/// wider than `T` is available for `T = u128`.
fn mulmod_binary<T: Int>(a: T, mut b: T, n: T) -> T {
    let mut a = a.rem(n);
    let mut result = T::ZERO;
    while b != T::ZERO {
        if b.is_odd() {
            result = add_mod(result, a, n);
        }
        a = add_mod(a, a, n);
        b = b.shr1();
    }
    result
}
