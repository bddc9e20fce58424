//! Utility types and functions for ironcollect.

use crate::key_path::{display_value, Key};
use ordered_float::OrderedFloat;
use serde_json::Value;

/// Conversion of an element (or a resolved field) into a number.
///
/// Returns `None` for values that are not numeric; numeric aggregates skip
/// those rather than failing. Strings are never coerced, even when they
/// look like numbers.
///
/// # Examples
///
/// ```
/// use ironcollect::utils::AsF64;
/// use serde_json::json;
///
/// assert_eq!(3u8.as_f64(), Some(3.0));
/// assert_eq!(json!(2.5).as_f64(), Some(2.5));
/// assert_eq!(json!("7").as_f64(), None);
/// assert_eq!(None::<i32>.as_f64(), None);
/// ```
pub trait AsF64 {
    fn as_f64(&self) -> Option<f64>;
}

macro_rules! impl_as_f64 {
    ($($t:ty),*) => {
        $(
            impl AsF64 for $t {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn as_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_as_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl AsF64 for Value {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl AsF64 for OrderedFloat<f64> {
    #[inline]
    fn as_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl<N: AsF64> AsF64 for Option<N> {
    fn as_f64(&self) -> Option<f64> {
        self.as_ref().and_then(AsF64::as_f64)
    }
}

impl<N: AsF64 + ?Sized> AsF64 for &N {
    fn as_f64(&self) -> Option<f64> {
        (**self).as_f64()
    }
}

/// The plain string form of an element, as joined by
/// [`implode`](crate::Collection::implode).
///
/// Scalars use their `Display` form. JSON values use
/// [`display_value`], so JSON strings come out without quotes.
///
/// # Examples
///
/// ```
/// use ironcollect::utils::AsText;
/// use serde_json::json;
///
/// assert_eq!(2.5f64.as_text(), "2.5");
/// assert_eq!(json!("ada").as_text(), "ada");
/// assert_eq!(json!([1, "x"]).as_text(), "[1,\"x\"]");
/// ```
pub trait AsText {
    fn as_text(&self) -> String;
}

macro_rules! impl_as_text {
    ($($t:ty),*) => {
        $(
            impl AsText for $t {
                #[inline]
                fn as_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_as_text!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String, Key
);

impl AsText for Value {
    fn as_text(&self) -> String {
        display_value(self)
    }
}

impl AsText for OrderedFloat<f64> {
    #[inline]
    fn as_text(&self) -> String {
        self.0.to_string()
    }
}

impl<N: AsText + ?Sized> AsText for &N {
    fn as_text(&self) -> String {
        (**self).as_text()
    }
}
