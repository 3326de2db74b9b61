/// Assert that two floating-point numbers are approximately equal
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
  assert!(
    (actual - expected).abs() < tolerance,
    "Values not approximately equal:\n  actual:   {}\n  expected: {}\n  diff:     {}\n  tolerance: {}",
    actual,
    expected,
    (actual - expected).abs(),
    tolerance
  );
}

/// Assert that a sentiment score matches, with a tolerance loose enough for weighted sums
pub fn assert_sentiment_eq(actual: f64, expected: f64) {
  assert_approx_eq(actual, expected, 1e-9);
}
