//! Text-or-number measurement

/// Either a piece of text or a number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Text(String),
    Number(f64),
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Number(f64::from(number))
    }
}

/// Character count for text, double the value for numbers.
///
/// ```rust
/// use primer::measure::measure;
///
/// assert_eq!(measure("hello"), 5.0);
/// assert_eq!(measure(7), 14.0);
/// ```
pub fn measure(value: impl Into<Value>) -> f64 {
    match value.into() {
        Value::Text(text) => text.chars().count() as f64,
        Value::Number(number) => number * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_measures_length() {
        assert_eq!(measure(Value::from("hello")), 5.0);
        assert_eq!(measure(Value::from(String::new())), 0.0);
    }

    #[test]
    fn text_counts_characters_not_bytes() {
        assert_eq!(measure("héllo"), 5.0);
    }

    #[test]
    fn number_doubles() {
        assert_eq!(measure(Value::from(7)), 14.0);
        assert_eq!(measure(Value::from(-2.5)), -5.0);
        assert_eq!(measure(Value::Number(0.0)), 0.0);
    }
}
