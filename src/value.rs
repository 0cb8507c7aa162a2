//! Opaque value types (spec.md §4.4): `Mont`, `Canonical`, `Fusing`.
//!
//! Each wraps exactly one bit-pattern of `T` and carries no reference back
//! to the `Form` that produced it. Crossing a value produced by one `Form`
//! into another `Form`'s operations is a precondition violation the caller
//! must not make (spec.md §3 "Relationships"), not something these types
//! can check on their own.

use core::marker::PhantomData;

use educe::Educe;
use zeroize::Zeroize;

use crate::int::{cselect, Int};

/// The Montgomery image `a * R mod n` of some integer `a`, in the bit
/// range its range variant admits. Not necessarily the unique
/// representative of its residue class; see [`Canonical`].
///
/// Derives via `educe` rather than the stdlib `derive` (`Fp<P, N>` in
/// `field/fp/mod.rs` does the same) since a hand-written `impl<T: Int>
/// Debug for Mont<T>` would otherwise need to repeat `T`'s own bound
/// instead of inheriting it for free.
#[derive(Educe, Zeroize)]
#[educe(Clone, Copy, Debug)]
pub struct Mont<T: Int> {
    pub(crate) bits: T,
}

/// A [`Mont`] value whose underlying bit-pattern is the unique
/// representative of its residue class. The only value type equality is
/// defined on: two `Canonical`s are bit-equal iff they represent the same
/// class (spec.md §4.4).
#[derive(Educe, Zeroize)]
#[educe(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canonical<T: Int> {
    pub(crate) bits: T,
}

/// A [`Mont`] value pre-adjusted to serve as the addend/subtrahend of a
/// fused multiply-add/sub, shortening that operation's critical path. For
/// Full, Quarter, and Wrapped-Standard this carries the same bits as
/// `Canonical`; Half overrides it with a balanced signed representative.
#[derive(Educe, Zeroize)]
#[educe(Clone, Copy, Debug)]
pub struct Fusing<T: Int> {
    pub(crate) bits: T,
    #[zeroize(skip)]
    _marker: PhantomData<T>,
}

impl<T: Int> Mont<T> {
    #[inline]
    pub(crate) const fn from_bits(bits: T) -> Self {
        Self { bits }
    }

    /// Returns the underlying bit-pattern, for range-variant internals only.
    #[inline]
    pub(crate) const fn bits(self) -> T {
        self.bits
    }

    /// Branchless conditional move: updates `self` to `other` if `cond`.
    /// Used by exponentiation to avoid data-dependent branches on the
    /// window table lookup and tail handling (spec.md §4.4, §4.6).
    #[inline]
    pub fn cmov(self, cond: bool, other: Self) -> Self {
        Self::from_bits(cselect(cond, other.bits, self.bits))
    }
}

impl<T: Int> Canonical<T> {
    #[inline]
    pub(crate) const fn from_bits(bits: T) -> Self {
        Self { bits }
    }

    #[inline]
    pub(crate) const fn bits(self) -> T {
        self.bits
    }

    #[inline]
    pub fn cmov(self, cond: bool, other: Self) -> Self {
        Self::from_bits(cselect(cond, other.bits, self.bits))
    }
}

impl<T: Int> Fusing<T> {
    #[inline]
    pub(crate) const fn from_bits(bits: T) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) const fn bits(self) -> T {
        self.bits
    }

    #[inline]
    pub fn cmov(self, cond: bool, other: Self) -> Self {
        Self::from_bits(cselect(cond, other.bits, self.bits))
    }
}

/// Every `Canonical` is a valid `Mont`; the reverse requires
/// `Variant::canonical_of`.
impl<T: Int> From<Canonical<T>> for Mont<T> {
    #[inline]
    fn from(c: Canonical<T>) -> Self {
        Mont::from_bits(c.bits)
    }
}

/// Every `Fusing` is a valid `Mont`; the reverse requires
/// `Variant::fusing_of`.
impl<T: Int> From<Fusing<T>> for Mont<T> {
    #[inline]
    fn from(f: Fusing<T>) -> Self {
        Mont::from_bits(f.bits)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cmov_selects_branch() {
        let a = Mont::<u64>::from_bits(1);
        let b = Mont::<u64>::from_bits(2);
        assert_eq!(a.cmov(true, b).bits(), 2);
        assert_eq!(a.cmov(false, b).bits(), 1);
    }

    #[test]
    fn canonical_equality_is_bitwise() {
        let a = Canonical::<u32>::from_bits(5);
        let b = Canonical::<u32>::from_bits(5);
        let c = Canonical::<u32>::from_bits(6);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn canonical_and_fusing_convert_to_mont() {
        let c = Canonical::<u16>::from_bits(9);
        let f = Fusing::<u16>::from_bits(9);
        let m1: Mont<u16> = c.into();
        let m2: Mont<u16> = f.into();
        assert_eq!(m1.bits(), 9);
        assert_eq!(m2.bits(), 9);
    }
}
