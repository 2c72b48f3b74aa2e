use std::any::type_name;

use num_traits::ToPrimitive;

use crate::error::{Error, Result};
use crate::numeric::cast::narrow;

/// Returns the quotient `count / total` as a rounded integer percentage. Fails with
/// [`Error::ZeroDenominator`] when `total` is zero, and with [`Error::Narrowing`] when either
/// operand has no `f64` representation.
///
/// # Example
/// ```
/// use arrangements::numeric::int_percentage;
///
/// assert_eq!(int_percentage(1, 3), Ok(33));
/// assert_eq!(int_percentage(999, 1000), Ok(100));
/// assert!(int_percentage(1, 0).is_err());
/// ```
pub fn int_percentage<N: ToPrimitive>(count: N, total: N) -> Result<i32> {
    let count = count.to_f64().ok_or(Error::Narrowing {
        from: type_name::<N>(),
        to: "f64",
    })?;
    let total = total.to_f64().ok_or(Error::Narrowing {
        from: type_name::<N>(),
        to: "f64",
    })?;

    if total == 0.0 {
        return Err(Error::ZeroDenominator);
    }
    narrow((100.0 * count / total).round())
}
