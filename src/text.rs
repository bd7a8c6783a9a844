//! Case formatting for strings

/// Target case for [`format_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextCase {
    #[default]
    Upper,
    Lower,
}

impl From<Option<bool>> for TextCase {
    /// Only an explicit `false` selects lowercase.
    fn from(to_upper: Option<bool>) -> Self {
        match to_upper {
            Some(false) => TextCase::Lower,
            Some(true) | None => TextCase::Upper,
        }
    }
}

impl From<bool> for TextCase {
    fn from(to_upper: bool) -> Self {
        Self::from(Some(to_upper))
    }
}

/// Uppercase `input` unless `to_upper` is explicitly `Some(false)`.
///
/// ```rust
/// use primer::text::format;
///
/// assert_eq!(format("Hello", None), "HELLO");
/// assert_eq!(format("Hello", Some(true)), "HELLO");
/// assert_eq!(format("Hello", Some(false)), "hello");
/// ```
pub fn format(input: &str, to_upper: Option<bool>) -> String {
    format_with(input, TextCase::from(to_upper))
}

pub fn format_with(input: &str, case: TextCase) -> String {
    match case {
        TextCase::Upper => input.to_uppercase(),
        TextCase::Lower => input.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_flag_uppercases() {
        assert_eq!(format("Mixed Case 42", None), "MIXED CASE 42");
        assert_eq!(format("Mixed Case 42", None), format("Mixed Case 42", Some(true)));
    }

    #[test]
    fn explicit_false_lowercases() {
        assert_eq!(format("Mixed Case 42", Some(false)), "mixed case 42");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format("", None), "");
        assert_eq!(format("", Some(false)), "");
    }

    #[test]
    fn folds_non_ascii_letters() {
        assert_eq!(format("straße", Some(true)), "STRASSE");
        assert_eq!(format("ÉCOLE", Some(false)), "école");
    }

    #[test]
    fn case_from_flag() {
        assert_eq!(TextCase::from(false), TextCase::Lower);
        assert_eq!(TextCase::from(true), TextCase::Upper);
        assert_eq!(TextCase::from(None), TextCase::Upper);
        assert_eq!(TextCase::default(), TextCase::Upper);
    }
}
