use std::any::type_name;

use num_traits::NumCast;

use crate::error::{Error, Result};

/// Converts `value` to the (usually narrower) numeric type `U`, returning an error when the
/// value is not representable by `U`. Signed-to-unsigned conversions of negative values fail,
/// as do conversions that would overflow the target's range. Float-to-integer conversions
/// truncate toward zero before the range check.
///
/// # Example
/// ```
/// use arrangements::numeric::narrow;
///
/// assert_eq!(narrow::<u8, _>(200_i64), Ok(200_u8));
/// assert!(narrow::<u8, _>(-1_i32).is_err());
/// assert!(narrow::<i8, _>(200_u8).is_err());
/// ```
pub fn narrow<U, T>(value: T) -> Result<U>
where
    T: NumCast,
    U: NumCast,
{
    num_traits::cast(value).ok_or(Error::Narrowing {
        from: type_name::<T>(),
        to: type_name::<U>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_in_range() {
        assert_eq!(narrow::<u8, _>(0_i32), Ok(0_u8));
        assert_eq!(narrow::<u8, _>(255_i32), Ok(255_u8));
        assert_eq!(narrow::<i8, _>(-128_i64), Ok(-128_i8));
        assert_eq!(narrow::<u32, _>(i32::MAX), Ok(i32::MAX as u32));
    }

    #[test]
    fn test_narrow_out_of_range() {
        assert!(narrow::<u8, _>(256_i32).is_err());
        assert!(narrow::<i8, _>(-129_i32).is_err());
        assert!(narrow::<i32, _>(u32::MAX).is_err());
        assert!(narrow::<u32, _>(-1_i32).is_err());
    }

    #[test]
    fn test_narrow_float_to_integer() {
        assert_eq!(narrow::<i32, _>(100.0_f64), Ok(100));
        assert!(narrow::<i32, _>(1e300_f64).is_err());
    }

    #[test]
    fn test_narrow_error_names_types() {
        let err = narrow::<u8, _>(-1_i32).unwrap_err();
        assert_eq!(
            err,
            Error::Narrowing {
                from: "i32",
                to: "u8",
            }
        );
    }
}
