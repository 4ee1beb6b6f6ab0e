//! Registration form data

use super::country::{find_country, DEFAULT_COUNTRY_CODE};
use super::field::FieldName;

/// Raw values the user has entered, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationFormData {
    pub full_name: String,
    pub firm_name: String,
    pub email: String,
    pub country_code: String,
    /// Local number without the dialing code
    pub whatsapp: String,
    pub website_or_linked_in: String,
    pub consent: bool,
}

impl RegistrationFormData {
    /// Empty form with the given dialing code preselected.
    /// Unknown codes fall back to the table default.
    pub fn with_country_code(code: &str) -> Self {
        let country_code = find_country(code)
            .map(|c| c.code)
            .unwrap_or(DEFAULT_COUNTRY_CODE);
        Self {
            full_name: String::new(),
            firm_name: String::new(),
            email: String::new(),
            country_code: country_code.to_string(),
            whatsapp: String::new(),
            website_or_linked_in: String::new(),
            consent: false,
        }
    }

    /// Text value of a field, `None` for the consent checkbox
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::FullName => Some(&self.full_name),
            FieldName::FirmName => Some(&self.firm_name),
            FieldName::Email => Some(&self.email),
            FieldName::Whatsapp => Some(&self.whatsapp),
            FieldName::WebsiteOrLinkedIn => Some(&self.website_or_linked_in),
            FieldName::Consent => None,
        }
    }

    pub(crate) fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FullName => Some(&mut self.full_name),
            FieldName::FirmName => Some(&mut self.firm_name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Whatsapp => Some(&mut self.whatsapp),
            FieldName::WebsiteOrLinkedIn => Some(&mut self.website_or_linked_in),
            FieldName::Consent => None,
        }
    }

    /// WhatsApp number as submitted: dialing code followed by the local number
    pub fn full_whatsapp(&self) -> String {
        format!("{}{}", self.country_code, self.whatsapp)
    }
}

impl Default for RegistrationFormData {
    fn default() -> Self {
        Self::with_country_code(DEFAULT_COUNTRY_CODE)
    }
}
