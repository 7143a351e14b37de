//! Registration form data model.

use serde::{Deserialize, Serialize};

/// Identifier for one input of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Image,
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 5] = [
        FormField::Image,
        FormField::Name,
        FormField::Email,
        FormField::Password,
        FormField::ConfirmPassword,
    ];

    /// Wire/DOM identifier, matches the JSON key sent to the backend.
    pub fn id(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human readable label used by inputs and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Profile picture (optional)",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm password",
        }
    }

    /// Whether the input should mask its content.
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// Body of `POST /user`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[serde(
        default,
        skip_serializing_if = "is_blank_image",
        serialize_with = "serialize_image"
    )]
    pub image: Option<String>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

// A blank image is the same as no image: the key is left out entirely.
fn is_blank_image(image: &Option<String>) -> bool {
    image.as_deref().map_or(true, |url| url.trim().is_empty())
}

fn serialize_image<S>(image: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match image.as_deref().map(str::trim) {
        Some(url) => serializer.serialize_some(url),
        None => serializer.serialize_none(),
    }
}

impl RegistrationForm {
    /// Current value of a field. A missing image reads as empty.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Image => self.image.as_deref().unwrap_or(""),
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace a field's value.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Image => {
                self.image = if value.trim().is_empty() { None } else { Some(value) };
            }
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.set(FormField::Name, "Ada Lovelace");
        form.set(FormField::Email, "ada@example.com");
        form.set(FormField::Password, "secret1");
        form.set(FormField::ConfirmPassword, "secret1");
        form
    }

    #[test]
    fn serializes_with_camel_case_keys_and_no_image() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "password": "secret1",
                "confirmPassword": "secret1",
            })
        );
    }

    #[test]
    fn blank_image_is_left_out() {
        let mut form = filled();
        form.image = Some("   ".to_string());
        let json = serde_json::to_value(form).unwrap();
        assert!(json.get("image").is_none(), "{json}");
    }

    #[test]
    fn whitespace_image_from_input_is_not_sent() {
        let mut form = filled();
        form.set(FormField::Image, " ");
        assert_eq!(form.image, None);

        let body = serde_json::to_string(&form).unwrap();
        assert!(!body.contains("\"image\""), "{body}");
    }

    #[test]
    fn image_is_sent_when_present() {
        let mut form = filled();
        form.set(FormField::Image, "https://example.com/me.png");
        let json = serde_json::to_value(form).unwrap();
        assert_eq!(json["image"], "https://example.com/me.png");
    }

    #[test]
    fn setting_empty_image_clears_it() {
        let mut form = filled();
        form.set(FormField::Image, "https://example.com/me.png");
        form.set(FormField::Image, "");
        assert_eq!(form.image, None);
        assert_eq!(form.get(FormField::Image), "");
    }

    #[test]
    fn clear_empties_every_field() {
        let mut form = filled();
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form, RegistrationForm::default());
    }

    #[test]
    fn field_ids_match_wire_keys() {
        let json = serde_json::to_value(filled()).unwrap();
        for field in FormField::ALL.iter().filter(|f| **f != FormField::Image) {
            assert!(json.get(field.id()).is_some(), "missing {}", field.id());
        }
    }
}
