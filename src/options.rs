//! Dropdown options offered to company code editors.

use serde::Serialize;

/// A code with a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedCode {
    /// Code stored on the record.
    pub code: &'static str,

    /// Display name.
    pub name: &'static str,
}

const fn named(code: &'static str, name: &'static str) -> NamedCode {
    NamedCode { code, name }
}

/// Currency codes.
pub const CURRENCIES: [&str; 10] = [
    "USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "CNY", "SEK", "NZD",
];

/// Country codes and names.
pub const COUNTRIES: [NamedCode; 10] = [
    named("US", "United States"),
    named("GB", "United Kingdom"),
    named("DE", "Germany"),
    named("FR", "France"),
    named("CA", "Canada"),
    named("AU", "Australia"),
    named("JP", "Japan"),
    named("CN", "China"),
    named("IN", "India"),
    named("BR", "Brazil"),
];

/// Language codes and names.
pub const LANGUAGES: [NamedCode; 10] = [
    named("EN", "English"),
    named("FR", "French"),
    named("DE", "German"),
    named("ES", "Spanish"),
    named("IT", "Italian"),
    named("JA", "Japanese"),
    named("ZH", "Chinese"),
    named("PT", "Portuguese"),
    named("RU", "Russian"),
    named("AR", "Arabic"),
];

/// All dropdown option lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropdownOptions {
    /// Currency codes.
    pub currencies: &'static [&'static str],

    /// Countries.
    pub countries: &'static [NamedCode],

    /// Languages.
    pub languages: &'static [NamedCode],
}

/// The fixed option lists.
#[must_use]
pub const fn dropdown_options() -> DropdownOptions {
    DropdownOptions {
        currencies: &CURRENCIES,
        countries: &COUNTRIES,
        languages: &LANGUAGES,
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn option_codes_satisfy_field_lengths() {
        let options = dropdown_options();

        assert!(options.currencies.iter().all(|code| code.len() == 3));
        assert!(options.countries.iter().all(|c| c.code.len() == 2));
        assert!(options.languages.iter().all(|l| l.code.len() == 2));
    }

    #[test]
    fn serializes_named_codes() -> TestResult {
        let json = serde_json::to_value(dropdown_options())?;

        assert_eq!(json["countries"][0]["code"], "US");
        assert_eq!(json["countries"][0]["name"], "United States");
        assert_eq!(json["currencies"][1], "EUR");

        Ok(())
    }
}
