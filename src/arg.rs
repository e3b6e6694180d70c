use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A value that can appear in a log call's argument list.
///
/// Besides rendering itself, an argument reports whether it is a string.
/// [`concat`](crate::formatter::concat) uses that to decide spacing: two
/// adjacent operands get a single space between them only when neither is a
/// string.
///
/// Text types (`str`, `String`, `Cow<str>`) are strings; numbers, `bool` and
/// `char` are not. Any other `Display` type can be passed as a non-string
/// operand by wrapping it in [`Operand`].
pub trait LogArg: fmt::Display {
    fn is_string(&self) -> bool {
        false
    }
}

impl LogArg for str {
    fn is_string(&self) -> bool {
        true
    }
}

impl LogArg for String {
    fn is_string(&self) -> bool {
        true
    }
}

impl LogArg for Cow<'_, str> {
    fn is_string(&self) -> bool {
        true
    }
}

impl<T: LogArg + ?Sized> LogArg for &T {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

impl<T: LogArg + ?Sized> LogArg for &mut T {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

impl<T: LogArg + ?Sized> LogArg for Box<T> {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

impl<T: LogArg + ?Sized> LogArg for Rc<T> {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

impl<T: LogArg + ?Sized> LogArg for Arc<T> {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

macro_rules! non_string_operands {
    ($($t:ty),* $(,)?) => {
        $(impl LogArg for $t {})*
    };
}

non_string_operands!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl LogArg for fmt::Arguments<'_> {}

/// Passes any `Display` value to a log call as a non-string operand.
///
/// ```
/// # use tintlog::{formatter::concat, Operand};
/// # use std::net::Ipv4Addr;
/// let peer = Ipv4Addr::new(10, 0, 0, 1);
/// assert_eq!(concat(&[&Operand(peer), &8080]), "10.0.0.1 8080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand<T>(pub T);

impl<T: fmt::Display> fmt::Display for Operand<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> LogArg for Operand<T> {}
