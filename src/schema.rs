//! Form schema model.
//!
//! The schema is plain data: a title, an optional description, and an
//! ordered field list. Field order is authoritative — it determines render
//! order and the key order of the submission payload.

use serde::{Deserialize, Serialize};

/// A complete form definition as edited in the schema editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    #[serde(default)]
    pub form_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_description: Option<String>,
    /// Ordered field list. A schema that omits this entirely still parses;
    /// it simply renders an empty form.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// One schema-declared input unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Unique key; also the key of this field's value in the submission
    /// payload. Uniqueness is the editor's responsibility, not enforced here.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Only meaningful for [`FieldKind::Select`]; rendered in list order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

/// Closed set of renderable control kinds.
///
/// An unknown `type` string on the wire still parses (the store does no
/// shape validation) but lands on `Unsupported`, which every consumer has
/// to handle explicitly: the renderer shows a notice and the validator
/// builder records a build issue. Adding a kind here forces both to catch
/// up at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Select,
    #[serde(other)]
    Unsupported,
}

/// One entry of a select field's option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// A single regex constraint with its user-facing failure message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValidation {
    pub pattern: String,
    pub message: String,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl FormSchema {
    /// The built-in sample schema used as initial session state.
    pub fn sample() -> Self {
        FormSchema {
            form_title: "Project Requirements Survey".to_string(),
            form_description: Some(
                "Please fill out this survey about your project needs".to_string(),
            ),
            fields: vec![
                Field {
                    id: "name".to_string(),
                    kind: FieldKind::Text,
                    label: "Full Name".to_string(),
                    required: true,
                    placeholder: Some("Enter your full name".to_string()),
                    options: vec![],
                    validation: None,
                },
                Field {
                    id: "email".to_string(),
                    kind: FieldKind::Email,
                    label: "Email Address".to_string(),
                    required: true,
                    placeholder: Some("you@example.com".to_string()),
                    options: vec![],
                    validation: Some(FieldValidation {
                        pattern: r"^[^\s@]+@[^\s@]+\.[^\s@]+$".to_string(),
                        message: "Please enter a valid email address".to_string(),
                    }),
                },
                Field {
                    id: "companySize".to_string(),
                    kind: FieldKind::Select,
                    label: "Company Size".to_string(),
                    required: true,
                    placeholder: None,
                    options: vec![
                        SelectOption {
                            value: "1-50".to_string(),
                            label: "1-50 employees".to_string(),
                        },
                        SelectOption {
                            value: "51-200".to_string(),
                            label: "51-200 employees".to_string(),
                        },
                        SelectOption {
                            value: "201-1000".to_string(),
                            label: "201-1000 employees".to_string(),
                        },
                        SelectOption {
                            value: "1000+".to_string(),
                            label: "1000+ employees".to_string(),
                        },
                    ],
                    validation: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_parses_as_unsupported() {
        let raw = r#"{"id": "x", "type": "datepicker", "label": "When"}"#;
        let field: Field = serde_json::from_str(raw).unwrap();
        assert_eq!(field.kind, FieldKind::Unsupported);
    }

    #[test]
    fn missing_fields_key_is_accepted() {
        let schema: FormSchema = serde_json::from_str(r#"{"formTitle": "Empty"}"#).unwrap();
        assert!(schema.fields.is_empty());
    }

    #[test]
    fn sample_round_trips() {
        let sample = FormSchema::sample();
        let json = serde_json::to_string(&sample).unwrap();
        let back: FormSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(sample, back);
    }
}
