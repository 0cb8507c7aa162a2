//! Precondition / invariant checking (spec.md §2.2, §4.8, §7).
//!
//! The source this engine is modeled on ties every non-trivial internal
//! step to a tiered precondition/postcondition/invariant assert. Per
//! design note §9 that tiering is a local optimization, not part of the
//! contract with callers, so it collapses here to one macro: a check that
//! panics with a message in debug builds and costs nothing in release.
//! Violating a `debug_check!` is always a caller or library bug (spec.md
//! §7, categories 1-2), never a recoverable error.

/// Assert `$cond`, panicking with `$msg` if it does not hold. Compiles to
/// nothing when `debug_assertions` are off, matching the "compilable to
/// no-ops" contract layer of spec.md §2.
#[macro_export]
macro_rules! debug_check {
    ($cond:expr, $msg:expr) => {
        debug_assert!($cond, $msg);
    };
    ($cond:expr) => {
        debug_assert!($cond);
    };
}
