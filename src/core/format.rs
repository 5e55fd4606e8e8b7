//! Canonical string rendering of JSON scalars.

use super::document::Scalar;

/// How a JSON `null` leaf is rendered in the flat map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NullValue {
    /// Render as the literal token `null`.
    #[default]
    Literal,
    /// Render as the empty string.
    Empty,
}

impl NullValue {
    fn as_str(self) -> &'static str {
        match self {
            NullValue::Literal => "null",
            NullValue::Empty => "",
        }
    }
}

/// Render a scalar in its canonical, locale-independent form.
///
/// Numbers are written with the exact text they had in the document, so
/// integers of any width round-trip and no locale formatting is applied.
/// Numbers built from an `f64` use the shortest text that reads back as the
/// same value.
pub fn format_scalar(scalar: &Scalar, null_value: NullValue) -> String {
    match scalar {
        Scalar::String(s) => s.clone(),
        Scalar::Number(n) => n.to_string(),
        Scalar::Bool(true) => "true".to_string(),
        Scalar::Bool(false) => "false".to_string(),
        Scalar::Null => null_value.as_str().to_string(),
    }
}
