//! `const fn`-compatible loop helper.
//!
//! Plain `for` loops over a non-`const` range are not allowed in `const fn`
//! bodies; this expands to a `loop` with an explicit counter instead.

#[macro_export]
macro_rules! const_for {
    (($i:ident in $start:tt..$end:tt) $code:expr) => {{
        let mut $i = $start;
        loop {
            if $i < $end {
                $code
            } else {
                break;
            }
            $i += 1;
        }
    }};
}
