//! Schema store.
//!
//! Owns the current [`FormSchema`] and replaces it wholesale on every
//! accepted raw-text edit. A rejected edit leaves the current schema
//! untouched; the error is returned to the caller so the editor can show
//! it inline, and logged at warn level.

use thiserror::Error;

use crate::schema::FormSchema;

/// Raw edit text was not a valid schema document.
#[derive(Debug, Error)]
#[error("schema edit rejected: {0}")]
pub struct SchemaParseError(#[from] serde_json::Error);

pub struct SchemaStore {
    schema: FormSchema,
}

impl SchemaStore {
    /// A store seeded with the built-in sample schema.
    pub fn new() -> Self {
        Self {
            schema: FormSchema::sample(),
        }
    }

    pub fn with_schema(schema: FormSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Parse `raw` and replace the current schema on success.
    ///
    /// No shape validation happens beyond the parse: an empty field list or
    /// an unknown field type is accepted as-is and surfaces downstream as a
    /// build issue or renderer notice.
    pub fn apply_edit(&mut self, raw: &str) -> Result<&FormSchema, SchemaParseError> {
        match serde_json::from_str::<FormSchema>(raw) {
            Ok(parsed) => {
                self.schema = parsed;
                Ok(&self.schema)
            }
            Err(err) => {
                log::warn!("schema edit rejected, keeping previous schema: {err}");
                Err(err.into())
            }
        }
    }

    /// Pretty-printed schema JSON for the editor textarea and clipboard.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.schema).unwrap_or_default()
    }
}

impl Default for SchemaStore {
    fn default() -> Self {
        Self::new()
    }
}
