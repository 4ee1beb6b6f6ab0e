//! Dialing code lookup table for the WhatsApp field

/// A selectable dialing code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    /// Dialing prefix, including the leading `+`
    pub code: &'static str,
    /// Short display name
    pub name: &'static str,
    /// ISO 3166-1 alpha-2, lowercase
    pub iso: &'static str,
}

impl CountryCode {
    /// Label shown in the country selector, e.g. `+44 UK`
    pub fn label(&self) -> String {
        format!("{} {}", self.code, self.name)
    }
}

/// Code used when nothing (or something unknown) is configured
pub const DEFAULT_COUNTRY_CODE: &str = "+1";

/// All codes offered by the registration form, in display order
pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode { code: "+1", name: "US", iso: "us" },
    CountryCode { code: "+44", name: "UK", iso: "gb" },
    CountryCode { code: "+91", name: "India", iso: "in" },
    CountryCode { code: "+61", name: "Australia", iso: "au" },
    CountryCode { code: "+971", name: "UAE", iso: "ae" },
    CountryCode { code: "+81", name: "Japan", iso: "jp" },
    CountryCode { code: "+86", name: "China", iso: "cn" },
    CountryCode { code: "+49", name: "Germany", iso: "de" },
    CountryCode { code: "+33", name: "France", iso: "fr" },
    CountryCode { code: "+39", name: "Italy", iso: "it" },
    CountryCode { code: "+34", name: "Spain", iso: "es" },
    CountryCode { code: "+7", name: "Russia", iso: "ru" },
    CountryCode { code: "+55", name: "Brazil", iso: "br" },
    CountryCode { code: "+52", name: "Mexico", iso: "mx" },
    CountryCode { code: "+27", name: "South Africa", iso: "za" },
    CountryCode { code: "+82", name: "South Korea", iso: "kr" },
    CountryCode { code: "+65", name: "Singapore", iso: "sg" },
    CountryCode { code: "+60", name: "Malaysia", iso: "my" },
    CountryCode { code: "+63", name: "Philippines", iso: "ph" },
    CountryCode { code: "+66", name: "Thailand", iso: "th" },
    CountryCode { code: "+62", name: "Indonesia", iso: "id" },
    CountryCode { code: "+92", name: "Pakistan", iso: "pk" },
    CountryCode { code: "+880", name: "Bangladesh", iso: "bd" },
    CountryCode { code: "+94", name: "Sri Lanka", iso: "lk" },
    CountryCode { code: "+977", name: "Nepal", iso: "np" },
    CountryCode { code: "+64", name: "New Zealand", iso: "nz" },
    CountryCode { code: "+353", name: "Ireland", iso: "ie" },
    CountryCode { code: "+31", name: "Netherlands", iso: "nl" },
    CountryCode { code: "+46", name: "Sweden", iso: "se" },
    CountryCode { code: "+47", name: "Norway", iso: "no" },
    CountryCode { code: "+41", name: "Switzerland", iso: "ch" },
    CountryCode { code: "+32", name: "Belgium", iso: "be" },
    CountryCode { code: "+351", name: "Portugal", iso: "pt" },
    CountryCode { code: "+20", name: "Egypt", iso: "eg" },
    CountryCode { code: "+234", name: "Nigeria", iso: "ng" },
    CountryCode { code: "+254", name: "Kenya", iso: "ke" },
];

/// Look up a table entry by its dialing code
pub fn find_country(code: &str) -> Option<&'static CountryCode> {
    COUNTRY_CODES.iter().find(|c| c.code == code)
}

/// Position of `code` in the table, falling back to the first entry
fn index_of(code: &str) -> usize {
    COUNTRY_CODES
        .iter()
        .position(|c| c.code == code)
        .unwrap_or(0)
}

/// Code following `code` in the table (wraps around)
pub fn next_code(code: &str) -> &'static str {
    COUNTRY_CODES[(index_of(code) + 1) % COUNTRY_CODES.len()].code
}

/// Code preceding `code` in the table (wraps around)
pub fn prev_code(code: &str) -> &'static str {
    let idx = index_of(code);
    if idx == 0 {
        COUNTRY_CODES[COUNTRY_CODES.len() - 1].code
    } else {
        COUNTRY_CODES[idx - 1].code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_code_is_in_table() {
        assert!(find_country(DEFAULT_COUNTRY_CODE).is_some());
        assert_eq!(COUNTRY_CODES[0].code, DEFAULT_COUNTRY_CODE);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = COUNTRY_CODES.iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), COUNTRY_CODES.len());
    }

    #[test]
    fn test_every_code_starts_with_plus_and_digits() {
        for entry in COUNTRY_CODES {
            assert!(entry.code.starts_with('+'), "{}", entry.code);
            assert!(entry.code[1..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_find_unknown_code() {
        assert!(find_country("+999").is_none());
    }

    #[test]
    fn test_label() {
        let india = find_country("+91").unwrap();
        assert_eq!(india.label(), "+91 India");
    }

    #[test]
    fn test_next_code_wraps() {
        assert_eq!(next_code("+1"), "+44");
        assert_eq!(next_code("+254"), "+1");
    }

    #[test]
    fn test_prev_code_wraps() {
        assert_eq!(prev_code("+44"), "+1");
        assert_eq!(prev_code("+1"), "+254");
    }

    #[test]
    fn test_unknown_code_cycles_from_start() {
        assert_eq!(next_code("+999"), "+44");
    }
}
