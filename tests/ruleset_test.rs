use std::collections::HashMap;

use formgen::{Field, FieldKind, FieldValidation, ValidationRuleset};

fn field(id: &str, kind: FieldKind, label: &str) -> Field {
    Field {
        id: id.to_string(),
        kind,
        label: label.to_string(),
        required: false,
        placeholder: None,
        options: vec![],
        validation: None,
    }
}

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn build_is_idempotent() {
    let mut email = field("e", FieldKind::Email, "Email");
    email.required = true;
    email.validation = Some(FieldValidation {
        pattern: r"^[^\s@]+@[^\s@]+\.[^\s@]+$".to_string(),
        message: "bad email".to_string(),
    });
    let fields = vec![field("x", FieldKind::Text, "X"), email];

    let first = ValidationRuleset::build(&fields);
    let second = ValidationRuleset::build(&fields);
    assert_eq!(first.ruleset, second.ruleset);
    assert_eq!(first.issues.len(), second.issues.len());
}

#[test]
fn required_only_field() {
    let mut f = field("x", FieldKind::Text, "X");
    f.required = true;
    let report = ValidationRuleset::build(&[f]);
    assert!(report.issues.is_empty());

    let failures = report.ruleset.validate(&values(&[("x", "")])).unwrap_err();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].field_id, "x");
    assert_eq!(failures[0].message, "X is required");

    assert!(report.ruleset.validate(&values(&[("x", "anything")])).is_ok());
}

#[test]
fn regex_only_field() {
    let mut f = field("e", FieldKind::Email, "Email");
    f.validation = Some(FieldValidation {
        pattern: r"^[^\s@]+@[^\s@]+\.[^\s@]+$".to_string(),
        message: "bad email".to_string(),
    });
    let report = ValidationRuleset::build(&[f]);

    assert!(report.ruleset.validate(&values(&[("e", "a@b.com")])).is_ok());

    let failures = report
        .ruleset
        .validate(&values(&[("e", "nope")]))
        .unwrap_err();
    assert_eq!(failures[0].message, "bad email");
}

#[test]
fn layered_required_and_regex() {
    let mut f = field("e", FieldKind::Email, "Email Address");
    f.required = true;
    f.validation = Some(FieldValidation {
        pattern: r"^[^\s@]+@[^\s@]+\.[^\s@]+$".to_string(),
        message: "bad email".to_string(),
    });
    let report = ValidationRuleset::build(&[f]);

    // Empty input: the required rule's message wins.
    let failures = report.ruleset.validate(&values(&[("e", "")])).unwrap_err();
    assert_eq!(failures[0].message, "Email Address is required");

    // Nonempty but non-matching: the regex message supersedes.
    let failures = report
        .ruleset
        .validate(&values(&[("e", "not-an-email")]))
        .unwrap_err();
    assert_eq!(failures[0].message, "bad email");

    assert!(report.ruleset.validate(&values(&[("e", "a@b.com")])).is_ok());
}

#[test]
fn unconstrained_field_accepts_anything() {
    let f = field("free", FieldKind::Text, "Free");
    let report = ValidationRuleset::build(&[f]);
    assert!(report.ruleset.is_empty());

    assert!(report.ruleset.validate(&values(&[("free", "")])).is_ok());
    assert!(report.ruleset.validate(&HashMap::new()).is_ok());
    assert!(report
        .ruleset
        .validate(&values(&[("free", "whatever")]))
        .is_ok());
}

#[test]
fn missing_entry_counts_as_empty() {
    let mut f = field("x", FieldKind::Text, "X");
    f.required = true;
    let report = ValidationRuleset::build(&[f]);

    let failures = report.ruleset.validate(&HashMap::new()).unwrap_err();
    assert_eq!(failures[0].message, "X is required");
}
