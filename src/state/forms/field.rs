//! Registration form fields and focus stops

/// Fields that carry validation rules, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FullName,
    FirmName,
    Email,
    Whatsapp,
    WebsiteOrLinkedIn,
    Consent,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::FullName,
        FieldName::FirmName,
        FieldName::Email,
        FieldName::Whatsapp,
        FieldName::WebsiteOrLinkedIn,
        FieldName::Consent,
    ];

    /// Field name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::FirmName => "firmName",
            Self::Email => "email",
            Self::Whatsapp => "whatsapp",
            Self::WebsiteOrLinkedIn => "websiteOrLinkedIn",
            Self::Consent => "consent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::FirmName => "Firm Name",
            Self::Email => "Work Email",
            Self::Whatsapp => "WhatsApp Number",
            Self::WebsiteOrLinkedIn => "Website or LinkedIn",
            Self::Consent => "Consent",
        }
    }

    /// Hint rendered when the field is empty and unfocused
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "John Doe",
            Self::FirmName => "Your Company",
            Self::Email => "john@company.com",
            Self::Whatsapp => "9876543210",
            Self::WebsiteOrLinkedIn => "https://yourwebsite.com",
            Self::Consent => "",
        }
    }

    /// Whether the field takes free text input
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Consent)
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A place the keyboard focus can rest on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStop {
    Field(FieldName),
    CountryCode,
    Submit,
}

/// Focus order for Tab / Shift+Tab
pub const FORM_STOPS: [FormStop; 8] = [
    FormStop::Field(FieldName::FullName),
    FormStop::Field(FieldName::FirmName),
    FormStop::Field(FieldName::Email),
    FormStop::CountryCode,
    FormStop::Field(FieldName::Whatsapp),
    FormStop::Field(FieldName::WebsiteOrLinkedIn),
    FormStop::Field(FieldName::Consent),
    FormStop::Submit,
];
