//! Construction of failure detail strings.
//!
//! Everything here is a pure transformation: the functions never fail and
//! never touch the console or the tally.

use std::fmt::Display;

use vet_core::TestEq;

/// Renders the detail for a failed scalar comparison.
///
/// Values render through their `Display` implementation, so booleans come
/// out as `true`/`false` and numbers in their canonical decimal form.
pub fn scalar_mismatch<T: Display + ?Sized>(expected: &T, actual: &T) -> String {
    format!("{expected} expected; got {actual}")
}

/// Renders the detail for a failed identity comparison.
pub fn pointer_mismatch<T: ?Sized>(expected: *const T, actual: *const T) -> String {
    format!("{expected:p} expected; got {actual:p}")
}

/// Compares `actual` against `expected` over the index range `[start, end)`
/// and renders one line per mismatching index.
///
/// Returns `None` when every compared index matches, including the vacuous
/// `end <= start` case. Indices past the end of either slice are not
/// compared, so a partial-range check can never read out of bounds.
pub fn range_detail<T>(actual: &[T], expected: &[T], start: usize, end: usize) -> Option<String>
where
    T: TestEq + Display,
{
    let end = end.min(actual.len()).min(expected.len());
    let mut detail = String::new();
    for index in start..end {
        if !actual[index].test_eq(&expected[index]) {
            detail.push_str(&format!(
                "\n\t\t- {} expected at index #{}; got {}",
                expected[index], index, actual[index]
            ));
        }
    }
    if detail.is_empty() {
        None
    } else {
        Some(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_message_shape() {
        assert_eq!(scalar_mismatch(&4, &7), "4 expected; got 7");
        assert_eq!(scalar_mismatch(&true, &false), "true expected; got false");
        assert_eq!(scalar_mismatch("left", "right"), "left expected; got right");
    }

    #[test]
    fn single_index_mismatch_reports_one_line() {
        let detail = range_detail(&[1, 9, 3], &[1, 2, 3], 0, 3).expect("one mismatch");
        assert_eq!(detail, "\n\t\t- 2 expected at index #1; got 9");
    }

    #[test]
    fn multiple_mismatches_keep_index_order() {
        let detail = range_detail(&[0, 0, 0], &[1, 0, 3], 0, 3).expect("two mismatches");
        assert_eq!(
            detail,
            "\n\t\t- 1 expected at index #0; got 0\n\t\t- 3 expected at index #2; got 0"
        );
    }

    #[test]
    fn matching_range_produces_no_detail() {
        assert_eq!(range_detail(&[5, 6], &[5, 6], 0, 2), None);
    }

    #[test]
    fn empty_range_passes_vacuously() {
        assert_eq!(range_detail(&[1, 9], &[1, 2], 1, 1), None);
        assert_eq!(range_detail(&[1, 9], &[1, 2], 2, 0), None);
    }

    #[test]
    fn partial_range_skips_outside_indices() {
        // Index 0 differs but lies outside the requested range.
        assert_eq!(range_detail(&[9, 2, 3], &[1, 2, 3], 1, 3), None);
    }

    #[test]
    fn out_of_bounds_end_is_clamped() {
        assert_eq!(range_detail(&[1, 2], &[1, 2], 0, 10), None);
        let detail = range_detail(&[1, 9], &[1, 2, 3], 0, 3).expect("clamped mismatch");
        assert_eq!(detail, "\n\t\t- 2 expected at index #1; got 9");
    }

    #[test]
    fn float_ranges_use_tolerance() {
        let expected = [1.0f64, 2.0, 3.0];
        let actual = [1.0f64 + 5e-8, 2.0, 3.5];
        let detail = range_detail(&actual, &expected, 0, 3).expect("index 2 differs");
        assert_eq!(detail, "\n\t\t- 3 expected at index #2; got 3.5");
    }
}
