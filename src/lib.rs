//! High-performance modular arithmetic over fixed-width unsigned
//! integers, specialized for repeated modular multiplication via
//! Montgomery form.
//!
//! Build a [`form::Form`] over a modulus and a [`variant::Variant`]
//! choice, move plain integers into Montgomery space with
//! [`form::Form::convert_in`], do arithmetic entirely in that space, and
//! call [`form::Form::convert_out`] to read the answer back out:
//!
//! ```
//! use montform::form::Form;
//! use montform::variant::Full;
//! use montform::pow::pow;
//!
//! let f = Form::<u64, Full<u64>>::new(1_000_000_007);
//! let a = f.convert_in(123);
//! let b = f.convert_in(456);
//! assert_eq!(f.convert_out(f.multiply(a, b)), (123 * 456) % 1_000_000_007);
//! assert_eq!(f.convert_out(pow::<u64, Full<u64>, 4>(&f, a, 1000)), {
//!     let mut r = 1u128;
//!     for _ in 0..1000 {
//!         r = (r * 123) % 1_000_000_007;
//!     }
//!     r as u64
//! });
//! ```

#![no_std]

#[macro_use]
pub mod contract;

pub mod const_helpers;
pub mod form;
pub mod helpers;
pub mod int;
pub mod limb;
pub mod pow;
pub mod redc;
pub mod value;
pub mod variant;
