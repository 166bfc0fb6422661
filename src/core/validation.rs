//! Client-side validation for the sign-in and registration forms
//!
//! Runs before any network call. Checks are ordered and the first failure
//! wins, so the user fixes one problem at a time.

use serde::{Deserialize, Serialize};

use crate::core::supabase::UserMetadata;

/// Minimum password length (characters)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (characters)
pub const MAX_PASSWORD_LENGTH: usize = 16;

/// Characters accepted as "special" in a password
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Validation error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Sign-in form has an empty field
    MissingCredentials,
    /// A registration field is empty or only whitespace
    MissingField,
    /// E-mail is not shaped like `local@domain.tld`
    InvalidEmail,
    /// Password is outside the allowed length range
    PasswordLength,
    PasswordNoUppercase,
    PasswordNoLowercase,
    PasswordNoDigit,
    PasswordNoSpecial,
    /// Confirmation does not equal the password
    PasswordMismatch,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingCredentials => write!(f, "All fields are required"),
            ValidationError::MissingField => {
                write!(f, "All fields are required. Spaces are not valid input.")
            }
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email address"),
            ValidationError::PasswordLength => write!(
                f,
                "Password must be {}-{} characters",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            ),
            ValidationError::PasswordNoUppercase => {
                write!(f, "Password needs at least one uppercase letter")
            }
            ValidationError::PasswordNoLowercase => {
                write!(f, "Password needs at least one lowercase letter")
            }
            ValidationError::PasswordNoDigit => write!(f, "Password needs at least one number"),
            ValidationError::PasswordNoSpecial => {
                write!(f, "Password needs at least one special character")
            }
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Registration form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    fn fields(&self) -> [&str; 7] {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.nickname.as_str(),
            self.username.as_str(),
            self.email.as_str(),
            self.password.as_str(),
            self.confirm_password.as_str(),
        ]
    }

    /// Profile fields sent to the provider as user metadata
    pub fn metadata(&self) -> UserMetadata {
        UserMetadata {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            nickname: self.nickname.clone(),
            username: self.username.clone(),
        }
    }

    /// Validate the whole form, returning the first failing rule
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.fields().iter().any(|value| value.trim().is_empty()) {
            return Err(ValidationError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        validate_password(&self.password)?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Sign-in form only needs both fields present
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the domain
/// with at least one character on each side of it
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Password strength rules, checked in order
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    // Counted in UTF-16 units, as browsers measure input length
    let length = password.encode_utf16().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(ValidationError::PasswordLength);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordNoUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::PasswordNoLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordNoDigit);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(ValidationError::PasswordNoSpecial);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            nickname: "ada".to_string(),
            username: "ada_l".to_string(),
            email: "ada@example.com".to_string(),
            password: "Analyt1cal!".to_string(),
            confirm_password: "Analyt1cal!".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut form = valid_form();
        form.nickname = "   ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingField));

        let mut form = valid_form();
        form.confirm_password.clear();
        assert_eq!(form.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@example"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@example."));
        assert!(!is_valid_email("a@@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("a b@example.com"));
    }

    #[test]
    fn test_invalid_email_reported_before_password() {
        let mut form = valid_form();
        form.email = "ada.example.com".to_string();
        form.password = "short".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_password_length_bounds() {
        assert_eq!(validate_password("Ab1!xyz"), Err(ValidationError::PasswordLength));
        assert_eq!(validate_password("Ab1!xyzw"), Ok(()));
        assert_eq!(validate_password("Ab1!xyzwxyzwxyzw"), Ok(()));
        assert_eq!(
            validate_password("Ab1!xyzwxyzwxyzwx"),
            Err(ValidationError::PasswordLength)
        );
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // 11 characters, but each emoji is two UTF-16 units
        let emoji = format!("Ab1!{}", "😀".repeat(7));
        assert_eq!(validate_password(&emoji), Err(ValidationError::PasswordLength));

        let accented = "Ab1!éééé";
        assert_eq!(validate_password(accented), Ok(()));
    }

    #[test]
    fn test_password_character_classes() {
        assert_eq!(
            validate_password("abcd1234!"),
            Err(ValidationError::PasswordNoUppercase)
        );
        assert_eq!(
            validate_password("ABCD1234!"),
            Err(ValidationError::PasswordNoLowercase)
        );
        assert_eq!(
            validate_password("Abcdefgh!"),
            Err(ValidationError::PasswordNoDigit)
        );
        assert_eq!(
            validate_password("Abcd12345"),
            Err(ValidationError::PasswordNoSpecial)
        );
        // Characters outside the accepted set do not count as special
        assert_eq!(
            validate_password("Abcd1234-_"),
            Err(ValidationError::PasswordNoSpecial)
        );
        assert_eq!(validate_password("Abcd1234\""), Ok(()));
    }

    #[test]
    fn test_mismatched_confirmation() {
        let mut form = valid_form();
        form.confirm_password = "Analyt1cal?".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(
            validate_login("", "pw"),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            validate_login("a@b.co", ""),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(validate_login("a@b.co", "pw"), Ok(()));
    }

    #[test]
    fn test_metadata_carries_profile_fields() {
        let metadata = valid_form().metadata();
        assert_eq!(metadata.first_name, "Ada");
        assert_eq!(metadata.username, "ada_l");
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "All fields are required. Spaces are not valid input."
        );
        assert_eq!(
            ValidationError::PasswordLength.to_string(),
            "Password must be 8-16 characters"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }
}
