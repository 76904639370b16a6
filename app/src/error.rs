/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use crate::flags::FlagValue;

/// One flag whose value does not match its declared type.
#[derive(Debug, Error)]
#[error("Expected flag {name} to be of type \"{expected}\". Received value \"{value}\" with type \"{actual}\".")]
pub struct Violation {
    pub name: String,
    pub value: FlagValue,
    pub expected: &'static str,
    pub actual: &'static str,
}

/// Every violation found in one pass, reported together in input order.
#[derive(Debug, Error)]
#[error("{}", .violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

/// Managed errors are the user's to fix and print beneath the usage text;
/// everything else is an internal fault reported raw.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Either <input> or stdin is required.")]
    MissingInput,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    pub fn is_managed(&self) -> bool {
        !matches!(self, CliError::Internal(_))
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_) | CliError::MissingInput => 1,
            CliError::Internal(_) => 101,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(name: &str, value: FlagValue, expected: &'static str) -> Violation {
        let actual = value.type_name();
        Violation {
            name: name.to_string(),
            value,
            expected,
            actual,
        }
    }

    #[test]
    fn violation_message_names_the_flag_and_both_types() {
        let violation = violation("indent-size", FlagValue::Str("nope".to_string()), "number");
        assert_eq!(
            violation.to_string(),
            "Expected flag indent-size to be of type \"number\". Received value \"nope\" with type \"string\"."
        );
    }

    #[test]
    fn violations_join_with_newlines_in_order() {
        let error = ValidationError {
            violations: vec![
                violation("jsx", FlagValue::Num(1.0), "boolean"),
                violation("eol", FlagValue::Num(2.0), "string"),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Expected flag jsx to be of type \"boolean\". Received value \"1\" with type \"number\".\n\
             Expected flag eol to be of type \"string\". Received value \"2\" with type \"number\"."
        );
    }

    #[test]
    fn missing_input_message_is_exact() {
        assert_eq!(
            CliError::MissingInput.to_string(),
            "Either <input> or stdin is required."
        );
    }

    #[test]
    fn managed_errors_exit_one() {
        assert_eq!(CliError::MissingInput.exit_code(), 1);
        let validation = CliError::from(ValidationError { violations: vec![] });
        assert_eq!(validation.exit_code(), 1);
        assert!(validation.is_managed());
    }

    #[test]
    fn internal_errors_exit_like_a_crash() {
        let internal = CliError::from(anyhow::anyhow!("boom"));
        assert_eq!(internal.exit_code(), 101);
        assert!(!internal.is_managed());
    }
}
