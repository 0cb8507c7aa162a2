//! Full variant (spec.md §4.3.1): `n < R`, the least restrictive range.

use crate::int::{add_mod, cselect, Int};
use crate::redc::redc_standard;
use crate::value::{Canonical, Fusing, Mont};
use crate::variant::{Modulus, Variant};

/// Mont value range `[0, n)`; Canonical coincides with Mont.
#[derive(Copy, Clone, Debug)]
pub struct Full<T: Int> {
    m: Modulus<T>,
}

impl<T: Int> Variant<T> for Full<T> {
    fn max_modulus() -> T {
        // R - 1, which is odd for every unsigned width.
        T::MAX
    }

    fn new(n: T) -> Self {
        debug_check!(n <= Self::max_modulus(), "Full: modulus exceeds max_modulus()");
        Self { m: Modulus::new(n) }
    }

    fn modulus(&self) -> T {
        self.m.n
    }

    fn is_valid(&self, v: Mont<T>) -> bool {
        v.bits() < self.m.n
    }

    fn convert_in(&self, a: T) -> Mont<T> {
        debug_check!(a < self.m.n, "convert_in: value not reduced below modulus");
        let (hi, lo) = a.widening_mul(self.m.r2_mod_n);
        Mont::from_bits(redc_standard(hi, lo, self.m.n, self.m.neg_inv_n))
    }

    fn convert_out(&self, v: Mont<T>) -> T {
        redc_standard(T::ZERO, v.bits(), self.m.n, self.m.neg_inv_n)
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
        Canonical::from_bits(self.m.r_mod_n)
    }

    fn neg_one(&self) -> Canonical<T> {
        Canonical::from_bits(self.m.n.wrapping_sub(self.m.r_mod_n))
    }

    fn add(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        Mont::from_bits(add_mod(x.bits(), y.bits(), self.m.n))
    }

    fn sub(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        Mont::from_bits(sub_mod_full(x.bits(), y.bits(), self.m.n))
    }

    fn halve(&self, x: Mont<T>) -> Mont<T> {
        Mont::from_bits(halve_mod_full(x.bits(), self.m.n))
    }

    fn multiply(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        let (hi, lo) = x.bits().widening_mul(y.bits());
        Mont::from_bits(redc_standard(hi, lo, self.m.n, self.m.neg_inv_n))
    }
}

/// `(a - b) mod n`. The dual of [`crate::int::add_mod`], which `Full::add`
/// reuses directly rather than keeping its own copy.
pub(crate) fn sub_mod_full<T: Int>(a: T, b: T, n: T) -> T {
    let (diff, borrow) = a.overflowing_sub(b);
    cselect(borrow, diff.wrapping_add(n), diff)
}

/// `a * 2⁻¹ mod n` for `n` odd: `a/2` if `a` even, else
/// `floor(a/2) + floor(n/2) + 1` (the two floors drop the same half-unit
/// `a + n` would otherwise need to represent, so this needs no
/// intermediate value wider than `T`).
pub(crate) fn halve_mod_full<T: Int>(a: T, n: T) -> T {
    let half_unshifted = a.shr1();
    cselect(
        a.is_odd(),
        half_unshifted.wrapping_add(n.shr1()).wrapping_add(T::ONE),
        half_unshifted,
    )
}
