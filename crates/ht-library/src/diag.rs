//! Diagnostics.

#[doc(hidden)]
pub use ecow::{eco_format, EcoString};

/// Early-return with a [`StrResult`].
///
/// The arguments are forwarded to [`eco_format!`].
#[macro_export]
#[doc(hidden)]
macro_rules! __bail {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        return Err($crate::diag::eco_format!($fmt, $($arg),*).into())
    };
}

#[doc(inline)]
pub use crate::__bail as bail;

/// A result type with a string error message.
pub type StrResult<T> = Result<T, EcoString>;

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: i64) -> StrResult<i64> {
        if value < 0 {
            bail!("expected a positive number, found {value}");
        }
        Ok(value)
    }

    #[test]
    fn test_bail_formats_message() {
        assert_eq!(check(3), Ok(3));
        assert_eq!(check(-1).unwrap_err(), "expected a positive number, found -1");
    }
}
