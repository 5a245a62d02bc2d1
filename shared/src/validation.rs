//! Declarative field validation
//!
//! A record is validated against a list of [`FieldRules`]: each entry names a
//! field, how to read its text, and an ordered sequence of [`Rule`]s. The
//! first failing rule of a field produces that field's single [`Violation`];
//! later rules for the same field are not evaluated, so a blank email is
//! reported as blank and never as malformed.

use std::collections::BTreeMap;
use std::fmt;

use validator::ValidateEmail;

use crate::error::AppError;

/// A predicate over a field's text paired with the message reported when it fails
#[derive(Clone, Copy)]
pub struct Rule {
    pub message: &'static str,
    pub check: fn(&str) -> bool,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

/// Rejects empty and whitespace-only text
pub const NOT_BLANK: Rule = Rule {
    message: "must not be blank",
    check: is_not_blank,
};

/// Rejects text that is not a well-formed email address; empty text passes
pub const WELL_FORMED_EMAIL: Rule = Rule {
    message: "must be a well-formed email address",
    check: is_well_formed_email,
};

fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

fn is_well_formed_email(value: &str) -> bool {
    value.is_empty() || value.validate_email()
}

/// The rules attached to one field of `T`
///
/// A rule list must name each field once; violations are keyed by field name.
pub struct FieldRules<T> {
    /// Field name as it appears on the wire
    pub field: &'static str,
    pub value: fn(&T) -> &str,
    pub rules: &'static [Rule],
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

/// The violations found on one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message reported for `field`, if any
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|v| v.field == field).map(|v| v.message)
    }

    /// `Ok(())` when nothing was violated
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    fn by_field(&self) -> BTreeMap<&'static str, &'static str> {
        self.0.iter().map(|v| (v.field, v.message)).collect()
    }
}

/// `{email=must be a well-formed email address, firstName=must not be blank}`
///
/// Entries are sorted by field name so the output is stable.
impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, message)) in self.by_field().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}={message}")?;
        }
        f.write_str("}")
    }
}

impl From<Violations> for AppError {
    fn from(violations: Violations) -> Self {
        let mut err = AppError::validation(format!("Invalid Field(s): {violations}"));
        for (field, message) in violations.by_field() {
            err = err.with_detail(field, message);
        }
        err
    }
}

/// Run `rules` against `record`
pub fn validate<T>(record: &T, rules: &[FieldRules<T>]) -> Violations {
    let violations = rules
        .iter()
        .filter_map(|field_rules| {
            let value = (field_rules.value)(record);
            field_rules
                .rules
                .iter()
                .find(|rule| !(rule.check)(value))
                .map(|rule| Violation {
                    field: field_rules.field,
                    message: rule.message,
                })
        })
        .collect();
    Violations(violations)
}

/// Types that carry their own field rules
pub trait Validate {
    fn validate(&self) -> Violations;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    struct Contact {
        name: String,
        email: String,
    }

    fn name(c: &Contact) -> &str {
        &c.name
    }

    fn email(c: &Contact) -> &str {
        &c.email
    }

    const CONTACT_RULES: &[FieldRules<Contact>] = &[
        FieldRules {
            field: "name",
            value: name,
            rules: &[NOT_BLANK],
        },
        FieldRules {
            field: "email",
            value: email,
            rules: &[NOT_BLANK, WELL_FORMED_EMAIL],
        },
    ];

    fn contact(name: &str, email: &str) -> Contact {
        Contact {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_record_has_no_violations() {
        let violations = validate(&contact("Max", "max@email.com"), CONTACT_RULES);
        assert!(violations.is_empty());
        assert!(violations.into_result().is_ok());
    }

    #[test]
    fn test_whitespace_is_blank() {
        let violations = validate(&contact("   ", "max@email.com"), CONTACT_RULES);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.message_for("name"), Some("must not be blank"));
    }

    #[test]
    fn test_blank_email_is_not_checked_for_format() {
        let violations = validate(&contact("Max", ""), CONTACT_RULES);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.message_for("email"), Some("must not be blank"));
    }

    #[test]
    fn test_malformed_emails() {
        for bad in ["invalid@comma,com", "wrongemail@", "no-at-sign", "@email.com"] {
            let violations = validate(&contact("Max", bad), CONTACT_RULES);
            assert_eq!(
                violations.message_for("email"),
                Some("must be a well-formed email address"),
                "{bad} should be rejected"
            );
            assert_eq!(violations.len(), 1);
        }
    }

    #[test]
    fn test_display_sorted_by_field() {
        let violations = validate(&contact("", "x@"), CONTACT_RULES);
        assert_eq!(
            violations.to_string(),
            "{email=must be a well-formed email address, name=must not be blank}"
        );
    }

    #[test]
    fn test_into_app_error() {
        let violations = validate(&contact("Max", "invalid@comma,com"), CONTACT_RULES);
        let err: AppError = violations.into();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(
            err.message,
            "Invalid Field(s): {email=must be a well-formed email address}"
        );
        assert_eq!(
            err.details.unwrap().get("email").unwrap(),
            "must be a well-formed email address"
        );
    }
}
