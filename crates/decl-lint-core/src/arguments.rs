//! Loosely-typed rule arguments and their validation.
//!
//! Rules receive an ordered list of TOML values from the `arguments` array of
//! their configuration table and resolve them into typed settings on first
//! apply. The helpers here give every rule the same validation behavior and
//! error wording.

use thiserror::Error;

/// Ordered, loosely-typed arguments supplied to a rule by configuration.
pub type Arguments = Vec<toml::Value>;

/// Errors produced while resolving rule arguments.
///
/// Both variants are terminal for the rule's pass over the current file: the
/// engine surfaces them as internal failures and never retries configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// The argument list has the wrong number of entries.
    #[error("rule \"{rule}\" expects {expected} argument(s), got {actual}")]
    Count {
        /// Rule that was being configured.
        rule: &'static str,
        /// Number of arguments the rule expects.
        expected: usize,
        /// Number of arguments actually supplied.
        actual: usize,
    },

    /// An argument holds a value of the wrong type.
    #[error("invalid value passed as argument to the \"{rule}\" rule: expected {expected}")]
    Type {
        /// Rule that was being configured.
        rule: &'static str,
        /// Description of the expected type.
        expected: &'static str,
    },
}

/// Checks that exactly `expected` arguments were supplied.
///
/// # Errors
///
/// Returns [`ArgumentError::Count`] naming the rule when the count differs.
pub fn check_argument_count(
    rule: &'static str,
    expected: usize,
    arguments: &[toml::Value],
) -> Result<(), ArgumentError> {
    if arguments.len() == expected {
        Ok(())
    } else {
        Err(ArgumentError::Count {
            rule,
            expected,
            actual: arguments.len(),
        })
    }
}

/// Extracts an integer from a single argument value.
///
/// # Errors
///
/// Returns [`ArgumentError::Type`] naming the rule when the value is not
/// integer-valued.
pub fn int_argument(rule: &'static str, value: &toml::Value) -> Result<i64, ArgumentError> {
    value.as_integer().ok_or(ArgumentError::Type {
        rule,
        expected: "an integer",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_ok() {
        let args = vec![toml::Value::Integer(3)];
        assert!(check_argument_count("max-public-structs", 1, &args).is_ok());
    }

    #[test]
    fn count_mismatch_names_rule() {
        let args = vec![toml::Value::Integer(1), toml::Value::Integer(2)];
        let err = check_argument_count("max-public-structs", 1, &args)
            .err()
            .map(|e| e.to_string());
        let message = err.as_deref().unwrap_or("");
        assert!(message.contains("max-public-structs"));
        assert!(message.contains("expects 1 argument(s), got 2"));
    }

    #[test]
    fn int_argument_accepts_integer() {
        assert_eq!(
            int_argument("max-public-structs", &toml::Value::Integer(7)),
            Ok(7)
        );
    }

    #[test]
    fn int_argument_rejects_string() {
        let err = int_argument("max-public-structs", &toml::Value::String("abc".into()));
        assert_eq!(
            err,
            Err(ArgumentError::Type {
                rule: "max-public-structs",
                expected: "an integer",
            })
        );
    }
}
