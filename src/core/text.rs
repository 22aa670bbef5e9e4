use crate::core::{Helper, Result, Value};
use crate::utils::error::HelperError;

/// Uppercases every character using full Unicode case mapping.
pub fn to_upper(input: &str) -> String {
    input.to_uppercase()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextTransformer;

impl Helper for TextTransformer {
    fn name(&self) -> &'static str {
        "upper"
    }

    fn arity(&self) -> usize {
        1
    }

    fn apply(&self, args: &[Value]) -> Result<Value> {
        self.check_arity(args)?;
        match &args[0] {
            Value::Text(s) => Ok(Value::Text(to_upper(s))),
            other => Err(HelperError::type_mismatch(self.name(), "text", other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_upper() {
        assert_eq!(to_upper("abc"), "ABC");
        assert_eq!(to_upper("ABC"), "ABC");
        assert_eq!(to_upper(""), "");
        assert_eq!(to_upper("hello, world 42"), "HELLO, WORLD 42");
    }

    #[test]
    fn test_to_upper_unicode() {
        assert_eq!(to_upper("straße"), "STRASSE");
        assert_eq!(to_upper("ünïcödé"), "ÜNÏCÖDÉ");
    }

    #[test]
    fn test_transformer_rejects_non_text() {
        let err = TextTransformer.apply(&[Value::from(42)]).unwrap_err();
        assert!(matches!(
            err,
            HelperError::TypeMismatch { ref found, .. } if found == "integer"
        ));
    }

    #[test]
    fn test_transformer_arity() {
        assert!(matches!(
            TextTransformer.apply(&[]),
            Err(HelperError::ArgumentCount { expected: 1, found: 0, .. })
        ));
    }

    proptest! {
        #[test]
        fn test_to_upper_idempotent(s in any::<String>()) {
            let once = to_upper(&s);
            prop_assert_eq!(to_upper(&once), once);
        }
    }
}
