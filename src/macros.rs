//! Macro form of the assertion primitive.

/// Halt the process unless the expression is true.
///
/// The expression is evaluated exactly once. On failure the diagnostic names
/// the expression text and the call site. An optional `format!`-style message
/// is only formatted when the check fails.
///
/// # Example
///
/// ```
/// use failstop::assert_true;
///
/// let a = 5;
/// let b = 5;
/// assert_true!(a == b);
/// assert_true!(a + b == 10, "sum of {} and {} is off", a, b);
/// ```
#[macro_export]
macro_rules! assert_true {
    ($cond:expr $(,)?) => {
        $crate::__private::check($cond, || {
            $crate::core::AssertionFailure::here().with_expression(::std::stringify!($cond))
        })
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__private::check($cond, || {
            $crate::core::AssertionFailure::here()
                .with_detail(::std::format!($($arg)+))
                .with_expression(::std::stringify!($cond))
        })
    };
}
