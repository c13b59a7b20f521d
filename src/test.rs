/// Check for equality between two components allowing for rounding errors.
/// The tolerance defaults to a thousandth of a unit, which is well below what
/// degrees and percentages are displayed with.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr, $expected:expr) => {
        $crate::assert_component_eq!($actual, $expected, 1.0e-3)
    };
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $epsilon);
    }};
}
