//! # Formgen
//!
//! Core library for a client-side dynamic form renderer. A JSON schema
//! describes the form (title, description, ordered fields); this crate owns
//! everything except presentation:
//!
//! - **Schema store**: holds the current [`FormSchema`], replaces it on an
//!   accepted raw-text edit, keeps the previous schema on a parse failure.
//! - **Validator builder**: derives an immutable [`ValidationRuleset`] from
//!   the field list on every schema change. Pattern-compile failures are
//!   collected as per-field [`BuildIssue`]s instead of surfacing at
//!   validate time.
//! - **Submission session**: the editing/submitted state machine. A
//!   successful submit captures a [`SubmissionPayload`] keyed in field
//!   order; replacing the schema resets the session to editing.
//!
//! Everything is synchronous and in-memory; the crate compiles for native
//! targets (tests) and wasm32 (the `formgen-ui` renderer).

pub mod ruleset;
pub mod schema;
pub mod session;
pub mod store;

pub use ruleset::{BuildIssue, BuildReport, FieldFailure, ValidationRuleset};
pub use schema::{Field, FieldKind, FieldValidation, FormSchema, SelectOption};
pub use session::{FormSession, SessionState, SubmissionPayload};
pub use store::{SchemaParseError, SchemaStore};
