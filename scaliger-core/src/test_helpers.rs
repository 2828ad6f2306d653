#[track_caller]
pub fn assert_close(a: f64, b: f64, tolerance: f64, ctx: &str) {
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = (a - b).abs();
    assert!(
        d <= tolerance,
        "{}: |{} - {}| = {:e} exceeds {:e}",
        ctx,
        a,
        b,
        d,
        tolerance
    );
}

#[macro_export]
macro_rules! assert_almost_eq {
    ($a:expr, $b:expr, $tolerance:expr) => {
        $crate::test_helpers::assert_close(
            $a,
            $b,
            $tolerance,
            &format!(
                "{} vs {} (tolerance={})",
                stringify!($a),
                stringify!($b),
                $tolerance
            ),
        )
    };
    ($a:expr, $b:expr, $tolerance:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_close($a, $b, $tolerance, &format!($($arg)*))
    };
}
