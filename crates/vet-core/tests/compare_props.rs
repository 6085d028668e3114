use proptest::prelude::*;
use vet_core::TestEq;

proptest! {
    #[test]
    fn finite_floats_are_reflexive(value in -1.0e6f64..1.0e6) {
        prop_assert!(value.test_eq(&value));
    }

    #[test]
    fn tolerance_comparison_is_symmetric(a in -1.0e3f64..1.0e3, b in -1.0e3f64..1.0e3) {
        prop_assert_eq!(a.test_eq(&b), b.test_eq(&a));
    }

    #[test]
    fn large_separations_never_compare_equal(base in -1.0e3f64..1.0e3, bump in 1.0f64..100.0) {
        prop_assert!(!base.test_eq(&(base + bump)));
        prop_assert!(!(base + bump).test_eq(&base));
    }

    #[test]
    fn f32_separations_beyond_tolerance_fail(base in -100.0f32..100.0, bump in 0.5f32..10.0) {
        prop_assert!(!base.test_eq(&(base + bump)));
    }

    #[test]
    fn integers_compare_exactly(a in any::<i64>(), b in any::<i64>()) {
        prop_assert!(a.test_eq(&a));
        prop_assert_eq!(a.test_eq(&b), a == b);
    }
}
