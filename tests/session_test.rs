use std::collections::HashMap;

use formgen::{FormSession, SessionState};

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn end_to_end_sample_submission() -> anyhow::Result<()> {
    let mut session = FormSession::new();
    assert_eq!(session.schema().fields.len(), 3);
    assert_eq!(session.state(), SessionState::Editing);
    assert!(session.build_issues().is_empty());

    let entered = values(&[
        ("name", "Jane"),
        ("email", "jane@x.com"),
        ("companySize", "1-50"),
    ]);
    let payload = session
        .submit(&entered)
        .map_err(|failures| anyhow::anyhow!("unexpected failures: {failures:?}"))?;

    assert_eq!(payload.get("name"), Some("Jane"));
    assert_eq!(payload.get("email"), Some("jane@x.com"));
    assert_eq!(payload.get("companySize"), Some("1-50"));
    assert_eq!(payload.len(), 3);
    assert_eq!(session.state(), SessionState::Submitted);

    // Keys follow schema field order in the downloadable JSON.
    let json = session.payload().map(|p| p.to_pretty_json()).unwrap_or_default();
    let parsed: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(parsed["email"], "jane@x.com");
    assert!(json.find("\"name\"") < json.find("\"email\""));
    assert!(json.find("\"email\"") < json.find("\"companySize\""));
    Ok(())
}

#[test]
fn malformed_edit_leaves_schema_unchanged() {
    let mut session = FormSession::new();
    let before = session.schema().clone();

    let result = session.edit_schema("{\"formTitle\": ");
    assert!(result.is_err());
    assert_eq!(session.schema(), &before);
    assert_eq!(session.state(), SessionState::Editing);
}

#[test]
fn sample_submit_fails_on_bad_email() {
    let mut session = FormSession::new();
    let entered = values(&[
        ("name", "Jane"),
        ("email", "not-an-email"),
        ("companySize", "1-50"),
    ]);

    let failures = session.submit(&entered).unwrap_err();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].field_id, "email");
    assert_eq!(failures[0].message, "Please enter a valid email address");
    assert_eq!(session.state(), SessionState::Editing);
}

#[test]
fn sample_submit_rejects_forged_select_value() {
    let mut session = FormSession::new();
    let entered = values(&[
        ("name", "Jane"),
        ("email", "jane@x.com"),
        ("companySize", "7"),
    ]);

    let failures = session.submit(&entered).unwrap_err();
    assert_eq!(failures[0].field_id, "companySize");
}

#[test]
fn schema_replacement_resets_submitted_session() {
    let mut session = FormSession::new();
    let entered = values(&[
        ("name", "Jane"),
        ("email", "jane@x.com"),
        ("companySize", "1-50"),
    ]);
    session.submit(&entered).expect("sample submit");
    assert_eq!(session.state(), SessionState::Submitted);

    session
        .edit_schema(r#"{"formTitle": "Fresh", "fields": []}"#)
        .expect("valid edit");
    assert_eq!(session.state(), SessionState::Editing);
    assert!(session.payload().is_none());
    assert_eq!(session.schema().form_title, "Fresh");
}

#[test]
fn edit_with_bad_pattern_surfaces_build_issue() {
    let mut session = FormSession::new();
    let raw = r#"{
        "formTitle": "Broken",
        "fields": [
            {
                "id": "code",
                "type": "text",
                "label": "Code",
                "required": true,
                "validation": {"pattern": "[", "message": "bad"}
            }
        ]
    }"#;

    session.edit_schema(raw).expect("structurally valid edit");
    assert_eq!(session.build_issues().len(), 1);

    // The required fallback still gates submission.
    let failures = session.submit(&HashMap::new()).unwrap_err();
    assert_eq!(failures[0].message, "Code is required");
    assert!(session
        .submit(&values(&[("code", "anything")]))
        .is_ok());
}
