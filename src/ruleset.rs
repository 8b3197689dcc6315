//! Validator builder.
//!
//! Derives a field-keyed ruleset from the schema's `required` and
//! `validation` attributes. Building is a pure fold over the field list:
//! the same fields always produce an equal [`BuildReport`], and nothing is
//! cached between rebuilds.
//!
//! A malformed `validation.pattern` never aborts the build and never panics
//! at validate time: the offending field falls back to its nonempty rule
//! (when required) and the problem is reported as a [`BuildIssue`] for the
//! UI to display.

use std::collections::HashMap;

use regex::Regex;
use thiserror::Error;

use crate::schema::{Field, FieldKind};

/// Per-field problem found while compiling the ruleset. The ruleset itself
/// is still usable; issues describe which constraints could not be applied.
#[derive(Debug, Error, Clone)]
pub enum BuildIssue {
    #[error("field '{field_id}': invalid validation pattern: {source}")]
    InvalidPattern {
        field_id: String,
        #[source]
        source: regex::Error,
    },

    #[error("field '{field_id}': unsupported field type, no rule installed")]
    UnsupportedKind { field_id: String },
}

/// One field's failed validation, carrying the first failing check's
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub field_id: String,
    pub message: String,
}

#[derive(Debug, Clone)]
struct PatternCheck {
    regex: Regex,
    message: String,
}

impl PartialEq for PatternCheck {
    fn eq(&self, other: &Self) -> bool {
        // Regex has no equality; compare by source pattern.
        self.regex.as_str() == other.regex.as_str() && self.message == other.message
    }
}

#[derive(Debug, Clone, PartialEq)]
struct MembershipCheck {
    allowed: Vec<String>,
    message: String,
}

/// Compiled rule for a single field. Checks layer: required, then regex,
/// then option membership; the first failing check supplies the message.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    field_id: String,
    required: Option<String>,
    pattern: Option<PatternCheck>,
    membership: Option<MembershipCheck>,
}

impl FieldRule {
    fn is_empty(&self) -> bool {
        self.required.is_none() && self.pattern.is_none() && self.membership.is_none()
    }

    fn first_failure(&self, value: &str) -> Option<String> {
        if let Some(message) = &self.required {
            if value.is_empty() {
                return Some(message.clone());
            }
        }
        if let Some(check) = &self.pattern {
            if !check.regex.is_match(value) {
                return Some(check.message.clone());
            }
        }
        if let Some(check) = &self.membership {
            // Emptiness is the required rule's concern; membership only
            // rejects nonempty values outside the declared options.
            if !value.is_empty() && !check.allowed.iter().any(|v| v == value) {
                return Some(check.message.clone());
            }
        }
        None
    }
}

/// Immutable ruleset derived from a field list; rebuilt on every schema
/// change. Rules are kept in field order so failures report in render order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationRuleset {
    rules: Vec<FieldRule>,
}

/// Outcome of a ruleset build: the ruleset plus any per-field issues.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub ruleset: ValidationRuleset,
    pub issues: Vec<BuildIssue>,
}

impl ValidationRuleset {
    /// Compile the ruleset for `fields`.
    pub fn build(fields: &[Field]) -> BuildReport {
        let mut rules = Vec::new();
        let mut issues = Vec::new();

        for field in fields {
            if field.kind == FieldKind::Unsupported {
                // The renderer drops these with a visible notice; installing
                // a rule would make the form unsubmittable with no control
                // to correct it.
                issues.push(BuildIssue::UnsupportedKind {
                    field_id: field.id.clone(),
                });
                continue;
            }

            let mut rule = FieldRule {
                field_id: field.id.clone(),
                required: None,
                pattern: None,
                membership: None,
            };

            if field.required {
                rule.required = Some(format!("{} is required", field.label));
            }

            if let Some(validation) = &field.validation {
                match Regex::new(&validation.pattern) {
                    Ok(regex) => {
                        rule.pattern = Some(PatternCheck {
                            regex,
                            message: validation.message.clone(),
                        });
                    }
                    Err(source) => {
                        issues.push(BuildIssue::InvalidPattern {
                            field_id: field.id.clone(),
                            source,
                        });
                    }
                }
            }

            if field.kind == FieldKind::Select && !field.options.is_empty() {
                rule.membership = Some(MembershipCheck {
                    allowed: field.options.iter().map(|o| o.value.clone()).collect(),
                    message: format!("{} must be one of the listed options", field.label),
                });
            }

            if !rule.is_empty() {
                rules.push(rule);
            }
        }

        BuildReport {
            ruleset: ValidationRuleset { rules },
            issues,
        }
    }

    /// Evaluate every rule against the entered values.
    ///
    /// All failing fields are reported at once, one failure per field with
    /// the first failing check's message. A field with no entry is treated
    /// as the empty string.
    pub fn validate(&self, values: &HashMap<String, String>) -> Result<(), Vec<FieldFailure>> {
        let mut failures = Vec::new();

        for rule in &self.rules {
            let value = values
                .get(&rule.field_id)
                .map(String::as_str)
                .unwrap_or("");
            if let Some(message) = rule.first_failure(value) {
                failures.push(FieldFailure {
                    field_id: rule.field_id.clone(),
                    message,
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
