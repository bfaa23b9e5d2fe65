/// Asserts that a numerical value is in the provided interval `[a,b]` and panics
/// with a helpful message if not
///
/// ### Example
/// ```
/// # use qhero::assert_interval;
/// let gamma = 0.8;
/// assert_interval!(gamma, 0.0, 1.0);
/// ```
/// A value of `2.0` would panic with the message "Invalid value for \`gamma\`. Must be in the interval \[0, 1\]."
#[macro_export]
macro_rules! assert_interval {
    ($var:expr, $a:expr, $b:expr) => {
        assert!(
            $var >= $a && $var <= $b,
            "Invalid value for `{}`. Must be in the interval [{}, {}].",
            stringify!($var),
            $a,
            $b,
        );
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn accepts_bounds() {
        let gamma = 1.0;
        assert_interval!(gamma, 0.0, 1.0);
        let gamma = 0.0;
        assert_interval!(gamma, 0.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "Invalid value for `gamma`")]
    fn rejects_out_of_interval() {
        let gamma = 1.5;
        assert_interval!(gamma, 0.0, 1.0);
    }
}
