//! Form state: field values plus the errors from the last validation pass.

use signup_shared::{FieldErrors, FormField, RegistrationForm};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: RegistrationForm,
    errors: FieldErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &RegistrationForm {
        &self.values
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(field)
    }

    /// Update one field. A stale error on that field is dropped.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors.remove(field);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn has_error(&self, field: FormField) -> bool {
        self.errors.has_error(field)
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.message(field)
    }

    /// Back to an empty form with no errors.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors = FieldErrors::new();
    }
}
