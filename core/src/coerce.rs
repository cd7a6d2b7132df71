//! Value-to-string coercion for expansion parameters.
//!
//! Expansion engines need every variable rendered as a string before it can
//! be percent-encoded into a URI. [`to_param`] defines the one fallback
//! chain for that rendering and the one failure mode: whatever goes wrong —
//! missing capability or a capability that fails internally — callers see
//! [`CoerceError::Unconvertable`], never a secondary error type.

use crate::{CoerceError, Value};

/// Convert an expansion value into its parameter string.
///
/// Scalars render directly: strings as-is, integers, floats and booleans in
/// their canonical display form. `Custom` values are consulted for their
/// capabilities in priority order: [`param_str`](crate::CustomValue::param_str)
/// first, then [`display_str`](crate::CustomValue::display_str). A capability
/// that exists but fails internally stops the chain — the failure is reported
/// as `Unconvertable`, not propagated and not papered over by the next
/// capability.
///
/// `None`, `List` and `Map` values have no scalar parameter form; composite
/// values go through [`to_mapping`](crate::to_mapping) and per-item coercion
/// in the engine instead.
///
/// # Errors
///
/// Returns [`CoerceError::Unconvertable`] carrying a clone of the offending
/// value. The carried value is for diagnostics only.
///
/// # Example
///
/// ```
/// use rutem::{to_param, Value};
///
/// assert_eq!(to_param(&Value::Int(5)).unwrap(), "5");
/// assert_eq!(to_param(&Value::String("a/b".into())).unwrap(), "a/b");
/// assert!(to_param(&Value::None).is_err());
/// ```
pub fn to_param(value: &Value) -> Result<String, CoerceError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(x) => Ok(x.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        // Option::or_else only runs when param_str is absent, so an
        // internal failure in param_str never falls through to display_str.
        Value::Custom(custom) => match custom.param_str().or_else(|| custom.display_str()) {
            Some(Ok(text)) => Ok(text),
            Some(Err(_)) | None => Err(unconvertable(value)),
        },
        Value::None | Value::List(_) | Value::Map(_) => Err(unconvertable(value)),
    }
}

fn unconvertable(value: &Value) -> CoerceError {
    CoerceError::Unconvertable {
        value: value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CustomValue;
    use std::any::Any;
    use std::sync::Arc;

    #[derive(Debug)]
    struct WithParam;

    impl CustomValue for WithParam {
        fn type_name(&self) -> &'static str {
            "with_param"
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn param_str(&self) -> Option<Result<String, String>> {
            Some(Ok("param-form".into()))
        }
        fn display_str(&self) -> Option<Result<String, String>> {
            Some(Ok("display-form".into()))
        }
    }

    #[derive(Debug)]
    struct DisplayOnly;

    impl CustomValue for DisplayOnly {
        fn type_name(&self) -> &'static str {
            "display_only"
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn display_str(&self) -> Option<Result<String, String>> {
            Some(Ok("display-form".into()))
        }
    }

    #[derive(Debug)]
    struct FailingParam;

    impl CustomValue for FailingParam {
        fn type_name(&self) -> &'static str {
            "failing_param"
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn param_str(&self) -> Option<Result<String, String>> {
            Some(Err("internal rendering failure".into()))
        }
        fn display_str(&self) -> Option<Result<String, String>> {
            Some(Ok("should never be used".into()))
        }
    }

    #[derive(Debug)]
    struct NoCapabilities;

    impl CustomValue for NoCapabilities {
        fn type_name(&self) -> &'static str {
            "no_capabilities"
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn scalars_render_directly() {
        assert_eq!(to_param(&Value::Int(5)).unwrap(), "5");
        assert_eq!(to_param(&Value::Int(-3)).unwrap(), "-3");
        assert_eq!(to_param(&Value::Float(1.5)).unwrap(), "1.5");
        assert_eq!(to_param(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(to_param(&Value::String("x y".into())).unwrap(), "x y");
    }

    #[test]
    fn param_capability_wins_over_display() {
        let value = Value::Custom(Arc::new(WithParam));
        assert_eq!(to_param(&value).unwrap(), "param-form");
    }

    #[test]
    fn display_capability_is_the_fallback() {
        let value = Value::Custom(Arc::new(DisplayOnly));
        assert_eq!(to_param(&value).unwrap(), "display-form");
    }

    #[test]
    fn failing_param_does_not_fall_through_to_display() {
        let value = Value::Custom(Arc::new(FailingParam));
        let err = to_param(&value).unwrap_err();
        assert!(matches!(err, CoerceError::Unconvertable { .. }));
    }

    #[test]
    fn missing_capabilities_are_unconvertable() {
        let value = Value::Custom(Arc::new(NoCapabilities));
        let CoerceError::Unconvertable { value: carried } = to_param(&value).unwrap_err();
        // The carried value identifies the offender.
        assert_eq!(carried, value);
    }

    #[test]
    fn composites_and_none_are_unconvertable() {
        assert!(to_param(&Value::None).is_err());
        assert!(to_param(&Value::List(vec![Value::Int(1)])).is_err());
        assert!(to_param(&Value::Map(vec![])).is_err());
    }

    #[test]
    fn error_display_names_the_type() {
        let err = to_param(&Value::List(vec![])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("list"), "unexpected message: {message}");
    }
}
