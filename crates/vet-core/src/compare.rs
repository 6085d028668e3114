//! Per-type equality policies used by assertions.
//!
//! Most types compare with their own `PartialEq`. Floating point types compare
//! within a fixed absolute tolerance, because independently computed float
//! results are expected to differ in low-order bits and bit-exact comparison
//! would make nearly every numeric test flaky. The policy is selected per type
//! at compile time; adding the float overrides costs nothing for other types.

/// Absolute tolerance applied when comparing `f32` values.
pub const F32_TOLERANCE: f32 = 1e-5;

/// Absolute tolerance applied when comparing `f64` values.
pub const F64_TOLERANCE: f64 = 1e-7;

/// Equality as observed by assertions.
pub trait TestEq {
    /// Returns true when the two values are equal for test purposes.
    fn test_eq(&self, other: &Self) -> bool;
}

/// Opts one or more types into the exact equality policy by delegating to
/// their `PartialEq` implementation.
///
/// Subject crates use this to register their own types, keeping the policy
/// set closed: exact, `f32` tolerance, or `f64` tolerance.
#[macro_export]
macro_rules! exact_eq {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::compare::TestEq for $ty {
                fn test_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

exact_eq!(bool, char);
exact_eq!(i8, i16, i32, i64, i128, isize);
exact_eq!(u8, u16, u32, u64, u128, usize);
exact_eq!(&str, String);

impl TestEq for f32 {
    fn test_eq(&self, other: &Self) -> bool {
        (self - other).abs() <= F32_TOLERANCE
    }
}

impl TestEq for f64 {
    fn test_eq(&self, other: &Self) -> bool {
        (self - other).abs() <= F64_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_types_are_reflexive() {
        assert!(true.test_eq(&true));
        assert!('q'.test_eq(&'q'));
        assert!(42u64.test_eq(&42));
        assert!((-7i32).test_eq(&-7));
        assert!("stack".test_eq(&"stack"));
        assert!(String::from("heap").test_eq(&String::from("heap")));
    }

    #[test]
    fn exact_types_reject_different_values() {
        assert!(!true.test_eq(&false));
        assert!(!1u8.test_eq(&2));
        assert!(!"a".test_eq(&"b"));
    }

    #[test]
    fn f32_tolerance_boundary() {
        assert!(0.0f32.test_eq(&F32_TOLERANCE));
        assert!(0.5f32.test_eq(&(0.5 + 7.5e-6)));
        assert!(!0.0f32.test_eq(&2e-5));
        assert!(!0.5f32.test_eq(&(0.5 + 3e-5)));
    }

    #[test]
    fn f64_tolerance_boundary() {
        assert!(0.0f64.test_eq(&F64_TOLERANCE));
        assert!(0.25f64.test_eq(&(0.25 + 5e-8)));
        assert!(!0.0f64.test_eq(&2e-7));
        assert!(!0.25f64.test_eq(&(0.25 + 1e-6)));
    }

    #[test]
    fn tolerance_is_symmetric() {
        let a = 1.5f64;
        let b = 1.5f64 + 4e-8;
        assert_eq!(a.test_eq(&b), b.test_eq(&a));
    }

    #[test]
    fn bool_renders_canonically() {
        assert_eq!(format!("{}", true), "true");
        assert_eq!(format!("{}", false), "false");
    }
}
