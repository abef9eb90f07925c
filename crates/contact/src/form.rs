use std::str::FromStr;

use strum::{Display, EnumString, IntoStaticStr, VariantArray};
use validator::{Validate, ValidationErrors};

use crate::{DEFAULT_COUNTRY_CODE, Subject};

/// Editable fields of the contact form, keyed by their HTML input name.
#[derive(EnumString, Display, VariantArray, IntoStaticStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    CountryCode,
    Phone,
    Company,
    Subject,
    Message,
}

#[derive(Validate, Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    #[validate(length(min = 1, message = "Please enter your full name."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    pub country_code: String,
    pub phone: String,
    pub company: String,
    pub subject: Option<Subject>,
    #[validate(length(min = 1, message = "Please tell us about your project."))]
    pub message: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_owned(),
            phone: String::new(),
            company: String::new(),
            subject: None,
            message: String::new(),
        }
    }
}

impl FormState {
    /// Initial state when entering the contact page, with the subject taken
    /// from the `subject` query parameter when it names a known service.
    pub fn with_subject_param(subject: Option<&str>) -> Self {
        Self {
            subject: subject.and_then(parse_subject),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();

        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::CountryCode => self.country_code = value,
            FormField::Phone => self.phone = value,
            FormField::Company => self.company = value,
            FormField::Subject => self.subject = parse_subject(&value),
            FormField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::CountryCode => &self.country_code,
            FormField::Phone => &self.phone,
            FormField::Company => &self.company,
            FormField::Subject => self.subject.as_ref().map(AsRef::<str>::as_ref).unwrap_or_default(),
            FormField::Message => &self.message,
        }
    }

    /// Country code and local number joined by a single space. Empty parts
    /// are left out.
    pub fn phone_number(&self) -> String {
        [self.country_code.trim(), self.phone.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn parse_subject(value: &str) -> Option<Subject> {
    Subject::from_str(value.trim()).ok()
}

/// First validation message in form order, so the visitor always sees the
/// topmost offending field.
pub(crate) fn first_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();

    [FormField::Name, FormField::Email, FormField::Message]
        .iter()
        .filter_map(|field| fields.get(<&str>::from(*field)))
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
