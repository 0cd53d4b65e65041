//! Customer profile completion.
//!
//! Contains the user record as the user service returns it and the
//! validated form used to complete it.

mod form;
mod user;

pub use form::{is_valid_phone, AddressFields, FieldError, PhoneFields, ProfileForm, ValidatedProfile};
pub use user::{Role, StoredAddress, StoredPhone, UserProfile};
