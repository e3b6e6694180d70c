use std::panic::Location;

/// Source location of the code that issued a log call.
///
/// A `Caller` is an ordinary input to the formatter: when the name or the
/// line cannot be resolved they are simply left empty and render as blank
/// text, so `Caller::unknown()` is always a valid value.
///
/// # Examples
///
/// ```
/// # use tintlog::{caller, Caller};
/// fn handler() -> Caller {
///     caller!()
/// }
///
/// let here = handler();
/// assert!(here.function().ends_with("handler"));
/// assert!(here.line().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    function: String,
    line: Option<u32>,
}

impl Caller {
    pub fn new(function: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            line: Some(line),
        }
    }

    /// A caller whose frame could not be resolved.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Resolves the caller from the compiler-tracked location.
    ///
    /// Rust does not expose the enclosing function's name at runtime, so the
    /// source file path stands in for it. Prefer the [`caller!`](crate::caller)
    /// macro where the real function name matters.
    #[track_caller]
    pub fn tracked() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// The line number as display text, blank when unknown.
    pub fn line_text(&self) -> String {
        self.line.map(|l| l.to_string()).unwrap_or_default()
    }
}

/// Expands to the fully qualified path of the enclosing function.
///
/// Uses the type name of a nested item, which the compiler renders as
/// `path::to::function::__here`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        // closures show up as `{{closure}}` segments
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Captures the enclosing function name and line as a [`Caller`].
#[macro_export]
macro_rules! caller {
    () => {
        $crate::Caller::new($crate::function_name!(), line!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_renders_blank() {
        let c = Caller::unknown();
        assert_eq!(c.function(), "");
        assert_eq!(c.line(), None);
        assert_eq!(c.line_text(), "");
    }

    #[test]
    fn test_macro_captures_function_name() {
        let c = crate::caller!();
        assert!(
            c.function().ends_with("tests::test_macro_captures_function_name"),
            "unexpected function name: {}",
            c.function()
        );
        assert!(c.line().unwrap() > 0);
    }

    #[test]
    fn test_closure_segments_are_trimmed() {
        let c = (|| crate::caller!())();
        assert!(c.function().ends_with("test_closure_segments_are_trimmed"));
    }

    #[test]
    fn test_tracked_uses_source_file() {
        let c = Caller::tracked();
        assert!(c.function().ends_with("caller.rs"));
        assert_eq!(c.line(), Some(line!() - 2));
    }
}
