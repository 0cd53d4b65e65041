//! Profile completion form and its validation.

use crate::error::CommerceError;
use crate::profile::UserProfile;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Israeli landline or mobile number, optionally dashed after the prefix.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0\d{1,2}-?\d{7}$").expect("phone pattern is valid"));

/// Phone section of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneFields {
    /// Primary phone, required.
    pub phone_1: String,
    /// Secondary phone, optional.
    #[serde(default)]
    pub phone_2: String,
}

/// Address section of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
    pub city: String,
    pub street: String,
    #[serde(rename = "houseNumber", default)]
    pub house_number: String,
}

/// Raw profile form values, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub phone: PhoneFields,
    pub address: AddressFields,
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted field path, e.g. `phone.phone_1`.
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A form that passed validation. Only this can be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedProfile(ProfileForm);

impl ValidatedProfile {
    pub fn form(&self) -> &ProfileForm {
        &self.0
    }

    pub fn into_form(self) -> ProfileForm {
        self.0
    }
}

impl ProfileForm {
    /// Prefill from a stored user, leaving missing parts empty.
    pub fn from_user(user: &UserProfile) -> Self {
        let phone = user.phone.clone().unwrap_or_default();
        let address = user.address.clone().unwrap_or_default();
        Self {
            phone: PhoneFields {
                phone_1: phone.phone_1.unwrap_or_default(),
                phone_2: phone.phone_2.unwrap_or_default(),
            },
            address: AddressFields {
                city: address.city.unwrap_or_default(),
                street: address.street.unwrap_or_default(),
                house_number: address.house_number.unwrap_or_default(),
            },
        }
    }

    /// Check every field and collect all failures.
    pub fn validate(&self) -> Result<ValidatedProfile, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.phone.phone_1.trim().is_empty() {
            errors.push(FieldError::new("phone.phone_1", "primary phone is required"));
        } else if !is_valid_phone(&self.phone.phone_1) {
            errors.push(FieldError::new("phone.phone_1", "invalid Israeli phone number"));
        }

        if !self.phone.phone_2.trim().is_empty() && !is_valid_phone(&self.phone.phone_2) {
            errors.push(FieldError::new("phone.phone_2", "invalid Israeli phone number"));
        }

        if self.address.city.trim().is_empty() {
            errors.push(FieldError::new("address.city", "city is required"));
        }
        if self.address.street.trim().is_empty() {
            errors.push(FieldError::new("address.street", "street is required"));
        }

        if errors.is_empty() {
            Ok(ValidatedProfile(self.trimmed()))
        } else {
            Err(errors)
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            phone: PhoneFields {
                phone_1: self.phone.phone_1.trim().to_string(),
                phone_2: self.phone.phone_2.trim().to_string(),
            },
            address: AddressFields {
                city: self.address.city.trim().to_string(),
                street: self.address.street.trim().to_string(),
                house_number: self.address.house_number.trim().to_string(),
            },
        }
    }

    /// Like [`validate`](Self::validate), folding failures into one error.
    pub fn try_validate(&self) -> Result<ValidatedProfile, CommerceError> {
        self.validate().map_err(|errors| {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            CommerceError::ValidationError(joined)
        })
    }
}

/// Whether a phone string matches the Israeli number format.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{StoredAddress, StoredPhone};

    fn valid_form() -> ProfileForm {
        ProfileForm {
            phone: PhoneFields {
                phone_1: "050-1234567".to_string(),
                phone_2: String::new(),
            },
            address: AddressFields {
                city: "Tel Aviv".to_string(),
                street: "Dizengoff".to_string(),
                house_number: String::new(),
            },
        }
    }

    #[test]
    fn test_phone_formats() {
        assert!(is_valid_phone("0501234567"));
        assert!(is_valid_phone("050-1234567"));
        assert!(is_valid_phone("03-1234567"));
        assert!(!is_valid_phone("501234567"));
        assert!(!is_valid_phone("050-123456"));
        assert!(!is_valid_phone("050--1234567"));
        assert!(!is_valid_phone("+972501234567"));
    }

    #[test]
    fn test_valid_form() {
        let validated = valid_form().validate().unwrap();
        assert_eq!(validated.form(), &valid_form());
    }

    #[test]
    fn test_validated_fields_are_trimmed() {
        let mut form = valid_form();
        form.phone.phone_1 = " 050-1234567 ".to_string();
        form.address.city = "Tel Aviv  ".to_string();

        let validated = form.validate().unwrap();
        assert_eq!(validated.form(), &valid_form());
    }

    #[test]
    fn test_optional_phone_must_match_when_present() {
        let mut form = valid_form();
        form.phone.phone_2 = "12345".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "phone.phone_2");

        form.phone.phone_2 = "04-8123456".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = ProfileForm::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["phone.phone_1", "address.city", "address.street"]);
    }

    #[test]
    fn test_try_validate_folds_errors() {
        let mut form = valid_form();
        form.address.street = "   ".to_string();
        match form.try_validate() {
            Err(CommerceError::ValidationError(msg)) => assert!(msg.contains("address.street")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_prefill_from_user() {
        let user = UserProfile {
            id: "u1".into(),
            email: None,
            role: Default::default(),
            phone: Some(StoredPhone {
                phone_1: Some("0521112222".to_string()),
                phone_2: None,
            }),
            address: Some(StoredAddress {
                city: Some("Haifa".to_string()),
                street: None,
                house_number: Some("12".to_string()),
            }),
        };

        let form = ProfileForm::from_user(&user);
        assert_eq!(form.phone.phone_1, "0521112222");
        assert_eq!(form.phone.phone_2, "");
        assert_eq!(form.address.city, "Haifa");
        assert_eq!(form.address.street, "");
        assert_eq!(form.address.house_number, "12");
    }

    #[test]
    fn test_submission_shape() {
        let validated = valid_form().validate().unwrap();
        let json = serde_json::to_value(&validated).unwrap();
        assert_eq!(json["phone"]["phone_1"], "050-1234567");
        assert_eq!(json["address"]["houseNumber"], "");
    }
}
