//! Field validators and the whole-form validation pass
//!
//! Validators are pure predicates over the raw input. `validate_form` runs
//! all of them and maps each failure to the message shown under the field.

use super::field::FieldName;
use super::registration::RegistrationFormData;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// Scheme optional, lowercase host, 2-6 char tld, loose path
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?[0-9a-z.-]+\.[a-z.]{2,6}[/0-9A-Za-z_ .-]*/?$")
        .expect("url pattern is valid")
});

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MAX_PHONE_DIGITS: usize = 15;

/// At least two characters after trimming, letters and whitespace only
pub fn validate_name(value: &str) -> bool {
    value.trim().chars().count() >= MIN_NAME_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

pub fn validate_firm_name(value: &str) -> bool {
    value.trim().chars().count() >= MIN_NAME_LEN
}

/// `local@domain.tld` shape. Deliberately loose.
pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Digit count, ignoring every other character, must be within 10..=15
pub fn validate_phone(value: &str) -> bool {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

/// Basic URL shape, or anything mentioning `linkedin.com`.
///
/// The substring fallback keeps LinkedIn vanity URLs passing even when they
/// miss the host pattern. It also lets through strings such as
/// `notlinkedin.com.evil.biz`.
pub fn validate_url(value: &str) -> bool {
    URL_RE.is_match(value) || value.contains("linkedin.com")
}

pub fn validate_consent(value: bool) -> bool {
    value
}

/// Per-field error messages from the last submit attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldName, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Drop the entry for `field`, returning whether one existed
    pub fn remove(&mut self, field: FieldName) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields in form order
    pub fn fields(&self) -> Vec<FieldName> {
        self.0.keys().copied().collect()
    }
}

fn required_message(field: FieldName) -> &'static str {
    match field {
        FieldName::FullName => "Full name is required",
        FieldName::FirmName => "Firm name is required",
        FieldName::Email => "Work email is required",
        FieldName::Whatsapp => "WhatsApp number is required",
        FieldName::WebsiteOrLinkedIn => "Website or LinkedIn URL is required",
        FieldName::Consent => "You must agree to the terms",
    }
}

fn invalid_message(field: FieldName) -> &'static str {
    match field {
        FieldName::FullName => "Please enter a valid name (letters only, min 2 characters)",
        FieldName::FirmName => "Firm name must be at least 2 characters",
        FieldName::Email => "Please enter a valid email address",
        FieldName::Whatsapp => "Please enter a valid phone number (10-15 digits)",
        FieldName::WebsiteOrLinkedIn => "Please enter a valid URL",
        FieldName::Consent => "You must agree to the terms",
    }
}

fn check_text(
    errors: &mut ValidationErrors,
    field: FieldName,
    value: &str,
    validator: fn(&str) -> bool,
) {
    if value.trim().is_empty() {
        errors.insert(field, required_message(field));
    } else if !validator(value) {
        errors.insert(field, invalid_message(field));
    }
}

/// Validate every field; an empty result means the form can be submitted
pub fn validate_form(data: &RegistrationFormData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    check_text(&mut errors, FieldName::FullName, &data.full_name, validate_name);
    check_text(
        &mut errors,
        FieldName::FirmName,
        &data.firm_name,
        validate_firm_name,
    );
    check_text(&mut errors, FieldName::Email, &data.email, validate_email);
    check_text(&mut errors, FieldName::Whatsapp, &data.whatsapp, validate_phone);
    check_text(
        &mut errors,
        FieldName::WebsiteOrLinkedIn,
        &data.website_or_linked_in,
        validate_url,
    );

    if !validate_consent(data.consent) {
        errors.insert(FieldName::Consent, invalid_message(FieldName::Consent));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_data() -> RegistrationFormData {
        RegistrationFormData {
            full_name: "Jane Doe".to_string(),
            firm_name: "Acme Legal".to_string(),
            email: "jane@acme.com".to_string(),
            country_code: "+91".to_string(),
            whatsapp: "9876543210".to_string(),
            website_or_linked_in: "https://acme.com".to_string(),
            consent: true,
        }
    }

    mod name {
        use super::*;

        #[test]
        fn test_accepts_letters_and_spaces() {
            assert!(validate_name("Jane Doe"));
            assert!(validate_name("  Al  "));
        }

        #[test]
        fn test_rejects_short() {
            assert!(!validate_name("J"));
            assert!(!validate_name(" J "));
            assert!(!validate_name(""));
        }

        #[test]
        fn test_rejects_digits_and_punctuation() {
            assert!(!validate_name("Jane2"));
            assert!(!validate_name("O'Brien"));
            assert!(!validate_name("Jane-Doe"));
        }

        #[test]
        fn test_rejects_non_ascii_letters() {
            assert!(!validate_name("José"));
        }
    }

    mod firm_name {
        use super::*;

        #[test]
        fn test_free_text_of_two_chars() {
            assert!(validate_firm_name("A1"));
            assert!(validate_firm_name("Smith & Co."));
        }

        #[test]
        fn test_rejects_short_after_trim() {
            assert!(!validate_firm_name(" A "));
            assert!(!validate_firm_name("   "));
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_without_at_is_invalid() {
            for s in ["", "plainaddress", "a.b.c", "user domain.com", "x.y"] {
                assert!(!validate_email(s), "{s}");
            }
        }

        #[test]
        fn test_basic_shape_is_valid() {
            for s in ["a@b.c", "jane@acme.com", "first.last@sub.example.org"] {
                assert!(validate_email(s), "{s}");
            }
        }

        #[test]
        fn test_requires_dot_after_at() {
            assert!(!validate_email("jane@localhost"));
        }

        #[test]
        fn test_rejects_whitespace_and_double_at() {
            assert!(!validate_email("ja ne@acme.com"));
            assert!(!validate_email("jane@@acme.com"));
            assert!(!validate_email(" jane@acme.com"));
        }
    }

    mod phone {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_digit_count_bounds() {
            assert!(!validate_phone("123456789"));
            assert!(validate_phone("1234567890"));
            assert!(validate_phone("123456789012345"));
            assert!(!validate_phone("1234567890123456"));
        }

        #[test]
        fn test_ignores_formatting_characters() {
            assert!(validate_phone("(987) 654-3210"));
            assert!(validate_phone("+44 7700 900 123"));
            assert!(!validate_phone("phone: 12-34"));
        }

        #[test]
        fn test_matches_digit_count_for_many_inputs() {
            for len in 0..20 {
                let s: String = "9".repeat(len);
                let padded = format!(" -{s}- ");
                let expected = (10..=15).contains(&len);
                assert_eq!(validate_phone(&s), expected, "{s}");
                assert_eq!(validate_phone(&padded), expected, "{padded}");
            }
        }
    }

    mod url {
        use super::*;

        #[test]
        fn test_accepts_common_urls() {
            assert!(validate_url("https://example.com"));
            assert!(validate_url("http://example.com/about"));
            assert!(validate_url("example.co.uk"));
            assert!(validate_url("www.example.com/path/to-page/"));
        }

        #[test]
        fn test_rejects_non_urls() {
            assert!(!validate_url("not a url"));
            assert!(!validate_url(""));
            assert!(!validate_url("https://"));
        }

        #[test]
        fn test_linkedin_fallback() {
            assert!(validate_url("linkedin.com/in/someone"));
            assert!(validate_url("https://www.linkedin.com/in/Jane-Doe?trk=x"));
        }

        #[test]
        fn test_linkedin_substring_anywhere_passes() {
            assert!(validate_url("notlinkedin.com.evil.biz"));
            assert!(validate_url("see linkedin.com !!"));
        }

        #[test]
        fn test_host_pattern_is_case_sensitive() {
            assert!(!validate_url("HTTPS://EXAMPLE.COM"));
        }
    }

    mod consent {
        use super::*;

        #[test]
        fn test_only_true_passes() {
            assert!(validate_consent(true));
            assert!(!validate_consent(false));
        }
    }

    mod form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_has_no_errors() {
            assert!(validate_form(&valid_data()).is_empty());
        }

        #[test]
        fn test_empty_form_reports_required_messages() {
            let errors = validate_form(&RegistrationFormData::default());
            assert_eq!(errors.fields(), FieldName::ALL.to_vec());
            assert_eq!(errors.get(FieldName::FullName), Some("Full name is required"));
            assert_eq!(errors.get(FieldName::Email), Some("Work email is required"));
            assert_eq!(
                errors.get(FieldName::WebsiteOrLinkedIn),
                Some("Website or LinkedIn URL is required")
            );
        }

        #[test]
        fn test_invalid_values_report_format_messages() {
            let data = RegistrationFormData {
                full_name: "J4ne".to_string(),
                email: "jane".to_string(),
                whatsapp: "123".to_string(),
                ..valid_data()
            };
            let errors = validate_form(&data);
            assert_eq!(
                errors.fields(),
                vec![FieldName::FullName, FieldName::Email, FieldName::Whatsapp]
            );
            assert_eq!(
                errors.get(FieldName::Whatsapp),
                Some("Please enter a valid phone number (10-15 digits)")
            );
        }

        #[test]
        fn test_consent_only_failure() {
            let data = RegistrationFormData {
                consent: false,
                ..valid_data()
            };
            let errors = validate_form(&data);
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(FieldName::Consent),
                Some("You must agree to the terms")
            );
        }
    }

    mod errors_map {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_remove_reports_presence() {
            let mut errors = ValidationErrors::new();
            errors.insert(FieldName::Email, "bad");
            assert!(errors.remove(FieldName::Email));
            assert!(!errors.remove(FieldName::Email));
            assert!(errors.is_empty());
        }

        #[test]
        fn test_fields_in_form_order() {
            let mut errors = ValidationErrors::new();
            errors.insert(FieldName::Consent, "c");
            errors.insert(FieldName::FullName, "n");
            assert_eq!(errors.fields(), vec![FieldName::FullName, FieldName::Consent]);
            assert_eq!(errors.get(FieldName::Consent), Some("c"));
        }
    }
}
