//! Raw field names and batch validation

pub mod fields;
mod validator;

pub use fields::RawFields;
pub use validator::{validate, FieldIssue, ProjectionInput, ValidationReport, DATE_FORMAT};
