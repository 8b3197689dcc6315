//! Submission session.
//!
//! [`FormSession`] is the explicit context threaded through the renderer:
//! it owns the schema store, the current build report, the session state,
//! and the last captured payload. All mutation goes through the two named
//! transitions, `edit_schema` and `submit`. This is the only state machine
//! in the system: `Editing -> Submitted` on full validation success, back
//! to `Editing` whenever the schema is replaced.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ruleset::{BuildIssue, BuildReport, FieldFailure, ValidationRuleset};
use crate::schema::FormSchema;
use crate::store::{SchemaParseError, SchemaStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    Submitted,
}

/// Field-id to value mapping captured on a successful submit, kept in
/// schema field order. Replaced by the next submit, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionPayload {
    entries: Vec<(String, String)>,
}

impl SubmissionPayload {
    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, value)| value.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, value)| (id.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The downloadable artifact: a flat JSON object in field order.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Serialize for SubmissionPayload {
    // serde_json's map type does not keep insertion order; serialize the
    // entries directly so keys come out in schema field order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, value) in &self.entries {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

pub struct FormSession {
    store: SchemaStore,
    build: BuildReport,
    state: SessionState,
    payload: Option<SubmissionPayload>,
}

impl FormSession {
    /// A fresh session on the built-in sample schema.
    pub fn new() -> Self {
        Self::with_store(SchemaStore::new())
    }

    pub fn with_schema(schema: FormSchema) -> Self {
        Self::with_store(SchemaStore::with_schema(schema))
    }

    fn with_store(store: SchemaStore) -> Self {
        let build = ValidationRuleset::build(&store.schema().fields);
        Self {
            store,
            build,
            state: SessionState::Editing,
            payload: None,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        self.store.schema()
    }

    /// Pretty schema JSON for the editor textarea and clipboard copy.
    pub fn schema_json(&self) -> String {
        self.store.to_pretty_json()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Issues found while compiling the current ruleset, for inline display.
    pub fn build_issues(&self) -> &[BuildIssue] {
        &self.build.issues
    }

    pub fn payload(&self) -> Option<&SubmissionPayload> {
        self.payload.as_ref()
    }

    /// Apply a raw schema edit. On success the ruleset is rebuilt and the
    /// session resets to `Editing` with any previous payload discarded; a
    /// new schema is always unsubmitted. On failure nothing changes.
    pub fn edit_schema(&mut self, raw: &str) -> Result<(), SchemaParseError> {
        let schema = self.store.apply_edit(raw)?;
        self.build = ValidationRuleset::build(&schema.fields);
        self.state = SessionState::Editing;
        self.payload = None;
        Ok(())
    }

    /// Run the current ruleset against the entered values. On success the
    /// payload is captured (one entry per schema field, in field order,
    /// missing inputs as empty strings) and the session transitions to
    /// `Submitted`; on failure it stays in `Editing` and the per-field
    /// failures are returned.
    pub fn submit(
        &mut self,
        values: &HashMap<String, String>,
    ) -> Result<&SubmissionPayload, Vec<FieldFailure>> {
        self.build.ruleset.validate(values)?;

        let entries = self
            .store
            .schema()
            .fields
            .iter()
            .map(|field| {
                let value = values.get(&field.id).cloned().unwrap_or_default();
                (field.id.clone(), value)
            })
            .collect();

        self.state = SessionState::Submitted;
        Ok(self.payload.insert(SubmissionPayload { entries }))
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
