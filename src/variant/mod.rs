//! Range variants (spec.md §4.3): Full, Half, Quarter, Wrapped-Standard.
//!
//! Each enforces a modulus-size precondition in exchange for a
//! specialization of add/sub/multiply/square/fmadd/fmsub. They share one
//! trait so [`crate::form::Form`] and the exponentiation routines in
//! [`crate::pow`] can be generic over the choice (spec.md §9: compile-time
//! dispatch via a `Variant` trait bound, default methods carrying the
//! shared behavior instead of emulating CRTP).

pub(crate) mod full;
mod half;
mod quarter;
mod wrapped;

pub use full::Full;
pub use half::Half;
pub use quarter::Quarter;
pub use wrapped::WrappedStandard;

use crate::int::{neg_inv_mod_r, r2_mod_n, r_mod_n, Int};
use crate::value::{Canonical, Fusing, Mont};

/// Constants every odd-modulus variant (Full, Half, Quarter) caches once
/// at construction (spec.md §3 "Cached constants"). Wrapped-Standard does
/// not use REDC and so keeps only `n`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Modulus<T: Int> {
    pub n: T,
    pub r_mod_n: T,
    pub r2_mod_n: T,
    pub neg_inv_n: T,
}

impl<T: Int> Modulus<T> {
    pub(crate) fn new(n: T) -> Self {
        debug_check!(n > T::ONE, "modulus must be greater than 1");
        debug_check!(n.is_odd(), "modulus must be odd");
        let neg_inv_n = neg_inv_mod_r(n);
        let r_mod_n = r_mod_n(n);
        let r2_mod_n = r2_mod_n(n, r_mod_n);
        Self {
            n,
            r_mod_n,
            r2_mod_n,
            neg_inv_n,
        }
    }
}

/// The operations every range variant exposes (spec.md §4.3). Methods
/// with an obvious variant-independent definition in terms of the others
/// are provided as defaults; each variant overrides only what its
/// representation lets it specialize.
pub trait Variant<T: Int>: Copy + Clone {
    /// Largest modulus this variant accepts.
    fn max_modulus() -> T;

    /// Builds a variant instance over `n`, caching whatever constants its
    /// representation needs.
    fn new(n: T) -> Self;

    /// The modulus this instance was built over.
    fn modulus(&self) -> T;

    /// Whether `v`'s bit-pattern lies in this variant's admissible range.
    fn is_valid(&self, v: Mont<T>) -> bool;

    /// Maps `a ∈ [0, n)` to its Montgomery image.
    fn convert_in(&self, a: T) -> Mont<T>;

    /// Maps a Montgomery value back to the integer it represents.
    fn convert_out(&self, v: Mont<T>) -> T;

    /// Normalizes `v` to the unique representative of its residue class.
    fn canonical_of(&self, v: Mont<T>) -> Canonical<T>;

    /// Prepares `v` as a fast operand for `fmadd`/`fmsub`.
    fn fusing_of(&self, v: Mont<T>) -> Fusing<T>;

    /// The Montgomery image of `0`.
    fn zero(&self) -> Canonical<T>;
    /// The Montgomery image of `1`.
    fn one(&self) -> Canonical<T>;
    /// The Montgomery image of `n - 1`.
    fn neg_one(&self) -> Canonical<T>;

    fn add(&self, x: Mont<T>, y: Mont<T>) -> Mont<T>;
    fn sub(&self, x: Mont<T>, y: Mont<T>) -> Mont<T>;

    /// Returns one of `x - y` or `y - x`; which one is unspecified
    /// (spec.md §9 Open Questions). This implementation always returns
    /// `x - y`.
    fn unordered_sub(&self, x: Mont<T>, y: Mont<T>) -> Mont<T> {
        self.sub(x, y)
    }

    fn negate(&self, x: Mont<T>) -> Mont<T> {
        self.sub(self.zero().into(), x)
    }

    fn two_times(&self, x: Mont<T>) -> Mont<T> {
        self.add(x, x)
    }

    /// `x * (2⁻¹) mod n`, exploiting `n` odd.
    fn halve(&self, x: Mont<T>) -> Mont<T>;

    fn multiply(&self, x: Mont<T>, y: Mont<T>) -> Mont<T>;

    /// `multiply`, additionally reporting whether the canonicalized
    /// result is zero (saves a `convert_out`/`canonical_of` round trip
    /// for callers who only need the zero test).
    fn multiply_reporting_zero(&self, x: Mont<T>, y: Mont<T>) -> (Mont<T>, bool) {
        let r = self.multiply(x, y);
        let is_zero = self.canonical_of(r).bits() == T::ZERO;
        (r, is_zero)
    }

    fn square(&self, x: Mont<T>) -> Mont<T> {
        self.multiply(x, x)
    }

    fn fmadd(&self, x: Mont<T>, y: Mont<T>, z: Fusing<T>) -> Mont<T> {
        self.add(self.multiply(x, y), z.into())
    }

    fn fmsub(&self, x: Mont<T>, y: Mont<T>, z: Fusing<T>) -> Mont<T> {
        self.sub(self.multiply(x, y), z.into())
    }

    fn fused_square_add(&self, x: Mont<T>, z: Fusing<T>) -> Mont<T> {
        self.add(self.square(x), z.into())
    }

    fn fused_square_sub(&self, x: Mont<T>, z: Fusing<T>) -> Mont<T> {
        self.sub(self.square(x), z.into())
    }

    /// `square`, in the variant's fastest internal representation for
    /// the intermediate squarings of windowed exponentiation. Only Half
    /// has a cheaper such representation (skipping sign-normalization
    /// between squares); the others fall back to `square`.
    fn square_sv(&self, x: Mont<T>) -> Mont<T> {
        self.square(x)
    }

    /// The Montgomery image of `2^e`, built by `e` doublings from `one()`.
    fn two_pow_limited(&self, e: u32) -> Mont<T> {
        let mut acc: Mont<T> = self.one().into();
        let mut i = 0;
        while i < e {
            acc = self.two_times(acc);
            i += 1;
        }
        acc
    }

    /// `R · 2^e mod n` in Montgomery form. Coincides with
    /// `two_pow_limited` in this implementation: `one()`'s bit-pattern is
    /// already `R mod n`, so doubling it `e` times produces both
    /// quantities at once (see DESIGN.md).
    fn r_times_two_pow_limited(&self, e: u32) -> Mont<T> {
        self.two_pow_limited(e)
    }
}
