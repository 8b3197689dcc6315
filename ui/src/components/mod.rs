pub mod form_view;
pub mod schema_editor;
pub mod submission;
