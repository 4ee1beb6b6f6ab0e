//! Wire payload sent to the submission endpoint

use crate::state::RegistrationFormData;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Keys owned by the form; pass-through extras may not reuse them
const RESERVED_KEYS: &[&str] = &[
    "fullName",
    "firmName",
    "email",
    "countryCode",
    "whatsapp",
    "websiteOrLinkedIn",
    "consent",
    "timestamp",
];

/// JSON body of a registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "firmName")]
    pub firm_name: String,
    pub email: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    /// Dialing code followed by the local number
    pub whatsapp: String,
    #[serde(rename = "websiteOrLinkedIn")]
    pub website_or_linked_in: String,
    pub consent: bool,
    pub timestamp: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl SubmissionPayload {
    /// Build the payload for `data` as of `at`.
    /// Extra fields are copied unchanged unless they collide with a form key.
    pub fn compose(
        data: &RegistrationFormData,
        extra: &BTreeMap<String, String>,
        at: DateTime<Utc>,
    ) -> Self {
        let extra = extra
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Self {
            full_name: data.full_name.clone(),
            firm_name: data.firm_name.clone(),
            email: data.email.clone(),
            country_code: data.country_code.clone(),
            whatsapp: data.full_whatsapp(),
            website_or_linked_in: data.website_or_linked_in.clone(),
            consent: data.consent,
            timestamp: format_timestamp(at),
            extra,
        }
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2026-10-19T08:30:00.000Z`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> RegistrationFormData {
        RegistrationFormData {
            full_name: "Jane Doe".to_string(),
            firm_name: "Acme Legal".to_string(),
            email: "jane@acme.com".to_string(),
            country_code: "+91".to_string(),
            whatsapp: "9876543210".to_string(),
            website_or_linked_in: "linkedin.com/in/jane".to_string(),
            consent: true,
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_whatsapp_is_prefixed_with_country_code() {
        let payload = SubmissionPayload::compose(&sample(), &BTreeMap::new(), fixed_time());
        assert_eq!(payload.whatsapp, "+919876543210");
    }

    #[test]
    fn test_whatsapp_is_not_normalized() {
        let data = RegistrationFormData {
            whatsapp: "98765-43210".to_string(),
            ..sample()
        };
        let payload = SubmissionPayload::compose(&data, &BTreeMap::new(), fixed_time());
        assert_eq!(payload.whatsapp, "+9198765-43210");
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(format_timestamp(fixed_time()), "2026-10-19T08:30:00.000Z");
    }

    #[test]
    fn test_serialized_shape() {
        let payload = SubmissionPayload::compose(&sample(), &BTreeMap::new(), fixed_time());
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "fullName": "Jane Doe",
                "firmName": "Acme Legal",
                "email": "jane@acme.com",
                "countryCode": "+91",
                "whatsapp": "+919876543210",
                "websiteOrLinkedIn": "linkedin.com/in/jane",
                "consent": true,
                "timestamp": "2026-10-19T08:30:00.000Z"
            })
        );
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let mut extra = BTreeMap::new();
        extra.insert("source".to_string(), "tui".to_string());
        let payload = SubmissionPayload::compose(&sample(), &extra, fixed_time());
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["source"], "tui");
    }

    #[test]
    fn test_extra_fields_cannot_override_form_keys() {
        let mut extra = BTreeMap::new();
        extra.insert("whatsapp".to_string(), "0000".to_string());
        extra.insert("timestamp".to_string(), "yesterday".to_string());
        let payload = SubmissionPayload::compose(&sample(), &extra, fixed_time());
        assert!(payload.extra.is_empty());
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["whatsapp"], "+919876543210");
        assert_eq!(value["timestamp"], "2026-10-19T08:30:00.000Z");
    }
}
