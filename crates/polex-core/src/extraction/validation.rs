//! Final annotation of missing fields.

use super::FieldSpec;
use crate::models::result::{MissingReason, WrappedField};

/// Mark a valueless required field as `required_field_missing`.
///
/// Any other field keeps the reason it already carries.
pub fn validate(field: &mut WrappedField, spec: &FieldSpec) {
    if spec.required && field.value.is_none() {
        field.reason = Some(MissingReason::RequiredFieldMissing);
    }
}
