//! The user-facing façade (spec.md §4.5): `Form<T, V>` wraps a range
//! variant, owning the caller's handle on a modulus.

use crate::int::Int;
use crate::value::{Canonical, Fusing, Mont};
use crate::variant::Variant;

/// Constructed from a modulus and a chosen range variant, `Form` is the
/// entry point callers use to move integers in and out of Montgomery
/// space and to perform arithmetic there (spec.md §2 control flow).
///
/// Preconditions are checked once, at construction; every method below
/// then forwards to `V` without re-validating its own arguments beyond
/// what `debug_check!` catches.
#[derive(Copy, Clone, Debug)]
pub struct Form<T: Int, V: Variant<T>> {
    variant: V,
    _marker: core::marker::PhantomData<T>,
}

impl<T: Int, V: Variant<T>> Form<T, V> {
    /// Builds a `Form` over `n`. `n` must satisfy the chosen variant's
    /// modulus precondition (range, oddness where required).
    pub fn new(n: T) -> Self {
        debug_check!(n <= V::max_modulus(), "Form::new: modulus exceeds max_modulus()");
        Self {
            variant: V::new(n),
            _marker: core::marker::PhantomData,
        }
    }

    /// Largest modulus `V` accepts.
    pub fn max_modulus() -> T {
        V::max_modulus()
    }

    /// The modulus this `Form` was built over.
    pub fn modulus(&self) -> T {
        self.variant.modulus()
    }

    pub fn is_valid(&self, v: Mont<T>) -> bool {
        self.variant.is_valid(v)
    }

    pub fn convert_in(&self, a: T) -> Mont<T> {
        debug_check!(a < self.modulus(), "convert_in: value not reduced below modulus");
        self.variant.convert_in(a)
    }

    pub fn convert_out(&self, v: Mont<T>) -> T {
        self.variant.convert_out(v)
    }

    pub fn canonical_of(&self, v: Mont<T>) -> Canonical<T> {
        self.variant.canonical_of(v)
    }

    pub fn fusing_of(&self, v: Mont<T>) -> Fusing<T> {
        self.variant.fusing_of(v)
    }

    pub fn zero(&self) -> Canonical<T> {
        self.variant.zero()
    }

    pub fn one(&self) -> Canonical<T> {
        self.variant.one()
    }

    pub fn neg_one(&self) -> Canonical<T> {
        self.variant.neg_one()
    }

    pub fn add(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        self.variant.add(x, y)
    }

    pub fn sub(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        self.variant.sub(x, y)
    }

    pub fn unordered_sub(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        self.variant.unordered_sub(x, y)
    }

    pub fn negate(&self, x: Mont<T>) -> Mont<T> {
        self.variant.negate(x)
    }

    pub fn two_times(&self, x: Mont<T>) -> Mont<T> {
        self.variant.two_times(x)
    }

    pub fn halve(&self, x: Mont<T>) -> Mont<T> {
        self.variant.halve(x)
    }

    pub fn multiply(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        self.variant.multiply(x, y)
    }

    pub fn multiply_reporting_zero(&self, x: Mont<T>, y: Mont<T>) -> (Mont<T>, bool) {
        self.variant.multiply_reporting_zero(x, y)
    }

    pub fn square(&self, x: Mont<T>) -> Mont<T> {
        self.variant.square(x)
    }

    pub fn fmadd(&self, x: Mont<T>, y: Mont<T>, z: Fusing<T>) -> Mont<T> {
        self.variant.fmadd(x, y, z)
    }

    pub fn fmsub(&self, x: Mont<T>, y: Mont<T>, z: Fusing<T>) -> Mont<T> {
        self.variant.fmsub(x, y, z)
    }

    pub fn fused_square_add(&self, x: Mont<T>, z: Fusing<T>) -> Mont<T> {
        self.variant.fused_square_add(x, z)
    }

    pub fn fused_square_sub(&self, x: Mont<T>, z: Fusing<T>) -> Mont<T> {
        self.variant.fused_square_sub(x, z)
    }

    pub(crate) fn square_sv(&self, x: Mont<T>) -> Mont<T> {
        self.variant.square_sv(x)
    }

    pub(crate) fn two_pow_limited(&self, e: u32) -> Mont<T> {
        self.variant.two_pow_limited(e)
    }

    pub(crate) fn r_times_two_pow_limited(&self, e: u32) -> Mont<T> {
        self.variant.r_times_two_pow_limited(e)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::variant::{Full, Half, Quarter, WrappedStandard};

    #[test]
    fn forwards_to_variant() {
        let f = Form::<u64, Full<u64>>::new(1_000_000_007);
        let a = f.convert_in(123);
        let b = f.convert_in(456);
        assert_eq!(f.convert_out(f.add(a, b)), 579);
        assert_eq!(f.modulus(), 1_000_000_007);
    }
}
