//! Declarative validation for the registration form.
//!
//! A [`ValidationSchema`] is an explicit list of `field -> rules`. Running it
//! over a [`RegistrationForm`] yields either `Ok(())` or a [`FieldErrors`]
//! holding one message per failing field.

use std::collections::BTreeMap;

use crate::models::{FormField, RegistrationForm};

/// A single constraint on a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    Email,
    /// Absolute `http`/`https` URL.
    Url,
    /// Value must equal another field's value.
    Matches(FormField),
}

impl Rule {
    fn check(self, field: FormField, value: &str, form: &RegistrationForm) -> Result<(), String> {
        match self {
            Rule::Required => {
                if value.trim().is_empty() {
                    return Err(format!("{} is required", field.label()));
                }
            }
            Rule::MinLength(min) => {
                if value.chars().count() < min {
                    return Err(format!(
                        "{} must have at least {min} characters",
                        field.label()
                    ));
                }
            }
            Rule::Email => {
                if !is_email(value) {
                    return Err("Invalid email address".to_string());
                }
            }
            Rule::Url => {
                if !is_http_url(value) {
                    return Err("Image must be a valid URL".to_string());
                }
            }
            Rule::Matches(other) => {
                if value != form.get(other) {
                    return Err("Passwords do not match".to_string());
                }
            }
        }
        Ok(())
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| is_domain_label(label))
}

// Letters, digits and inner hyphens only.
fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}

fn is_http_url(value: &str) -> bool {
    url::Url::parse(value.trim())
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
        .unwrap_or(false)
}

/// Per-field error messages collected by a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FormField, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    pub fn has_error(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn message(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field.id(), message)?;
            first = false;
        }
        Ok(())
    }
}

/// Ordered mapping from field to the rules it must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSchema {
    fields: Vec<(FormField, Vec<Rule>)>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append rules for a field.
    pub fn field(mut self, field: FormField, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((field, rules.into_iter().collect()));
        self
    }

    /// Schema used by the signup modal.
    pub fn registration() -> Self {
        Self::new()
            .field(FormField::Image, [Rule::Url])
            .field(FormField::Name, [Rule::Required, Rule::MinLength(3)])
            .field(FormField::Email, [Rule::Required, Rule::Email])
            .field(FormField::Password, [Rule::Required, Rule::MinLength(6)])
            .field(
                FormField::ConfirmPassword,
                [Rule::Required, Rule::Matches(FormField::Password)],
            )
    }

    pub fn rules(&self, field: FormField) -> &[Rule] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Validate a single field. Fields without [`Rule::Required`] are optional
    /// and skip their remaining rules when empty.
    pub fn validate_field(&self, field: FormField, form: &RegistrationForm) -> Result<(), String> {
        let rules = self.rules(field);
        let value = form.get(field);
        if value.trim().is_empty() && !rules.contains(&Rule::Required) {
            return Ok(());
        }
        for rule in rules {
            rule.check(field, value, form)?;
        }
        Ok(())
    }

    /// Validate every field, reporting the first failing rule per field.
    pub fn validate(&self, form: &RegistrationForm) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for (field, _) in &self.fields {
            if let Err(message) = self.validate_field(*field, form) {
                errors.insert(*field, message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::registration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            image: None,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "analytical".to_string(),
            confirm_password: "analytical".to_string(),
        }
    }

    #[test]
    fn accepts_valid_form() {
        assert_eq!(ValidationSchema::registration().validate(&valid_form()), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ValidationSchema::registration()
            .validate(&RegistrationForm::default())
            .unwrap_err();
        assert!(!errors.has_error(FormField::Image));
        for field in [
            FormField::Name,
            FormField::Email,
            FormField::Password,
            FormField::ConfirmPassword,
        ] {
            assert!(errors.has_error(field), "{field:?} should fail");
        }
        assert_eq!(errors.message(FormField::Name), Some("Name is required"));
    }

    #[test]
    fn mismatched_confirmation_is_reported_on_confirm_field() {
        let mut form = valid_form();
        form.confirm_password = "analytic".to_string();
        let errors = ValidationSchema::registration().validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.message(FormField::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn short_password_reports_min_length() {
        let mut form = valid_form();
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();
        let errors = ValidationSchema::registration().validate(&form).unwrap_err();
        assert_eq!(
            errors.message(FormField::Password),
            Some("Password must have at least 6 characters")
        );
        assert!(!errors.has_error(FormField::ConfirmPassword));
    }

    #[test]
    fn email_format() {
        for bad in [
            "ada",
            "ada@",
            "@example.com",
            "ada@example",
            "a da@example.com",
            "a@b@c.com",
            "a@b..com",
            "a@-.com",
            "a@.example.com",
            "a@example.com.",
            "a@exa_mple.com",
        ] {
            assert!(!is_email(bad), "{bad} accepted");
        }
        for good in ["ada@example.com", "a.b+c@mail.example.org", "x@my-host.io"] {
            assert!(is_email(good), "{good} rejected");
        }
    }

    #[test]
    fn image_is_optional_but_must_be_a_url_when_given() {
        let schema = ValidationSchema::registration();
        let mut form = valid_form();

        form.image = Some("   ".to_string());
        assert!(schema.validate(&form).is_ok());

        form.image = Some("not a url".to_string());
        let errors = schema.validate(&form).unwrap_err();
        assert_eq!(errors.message(FormField::Image), Some("Image must be a valid URL"));

        form.image = Some("ftp://example.com/me.png".to_string());
        assert!(schema.validate(&form).is_err());

        form.image = Some("https://example.com/me.png".to_string());
        assert!(schema.validate(&form).is_ok());
    }

    #[test]
    fn custom_schema_only_checks_listed_fields() {
        let schema = ValidationSchema::new().field(FormField::Email, [Rule::Required]);
        let errors = schema.validate(&RegistrationForm::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_error(FormField::Email));
    }

    #[test]
    fn display_lists_field_ids() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Email, "Invalid email address");
        errors.insert(FormField::Name, "Name is required");
        assert_eq!(
            errors.to_string(),
            "name: Name is required; email: Invalid email address"
        );
    }
}
