//! Company code field validation.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use thiserror::Error;

use super::{CompanyCodeUpdate, MAX_TEXT_LENGTH, NewCompanyCode};

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// `camelCase` field name as seen by API clients.
    pub field: String,

    /// Human readable message.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every problem found in one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Validation failed")]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// An error list holding a single entry.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }

    /// Record another problem.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Recorded problems in field order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Take ownership of the recorded problems.
    #[must_use]
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// `Ok` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one problem was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

#[derive(Debug, Clone, Copy)]
enum Length {
    Exactly(usize),
    AtMost(usize),
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    field: &'static str,
    label: &'static str,
    length_label: &'static str,
    length: Length,
}

impl Rule {
    const fn exactly(
        field: &'static str,
        label: &'static str,
        length_label: &'static str,
        size: usize,
    ) -> Self {
        Self {
            field,
            label,
            length_label,
            length: Length::Exactly(size),
        }
    }

    const fn text(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            length_label: label,
            length: Length::AtMost(MAX_TEXT_LENGTH),
        }
    }

    fn check_required(self, errors: &mut ValidationErrors, value: Option<&str>) {
        match value {
            None | Some("") => errors.push(self.field, format!("{} is required", self.label)),
            Some(value) => self.check_length(errors, value),
        }
    }

    fn check_optional(self, errors: &mut ValidationErrors, value: Option<&str>) {
        if let Some(value) = value {
            self.check_length(errors, value);
        }
    }

    fn check_length(self, errors: &mut ValidationErrors, value: &str) {
        let count = value.chars().count();

        match self.length {
            Length::Exactly(size) if count != size => errors.push(
                self.field,
                format!("{} must be exactly {size} characters", self.length_label),
            ),
            Length::AtMost(max) if count > max => errors.push(
                self.field,
                format!("{} cannot exceed {max} characters", self.length_label),
            ),
            _ => {}
        }
    }
}

const COMPANY_CODE: Rule = Rule::exactly("companyCode", "Company Code", "Company Code", 4);
const COMPANY_NAME: Rule = Rule::text("companyName", "Company Name");
const CITY: Rule = Rule::text("city", "City");
const COUNTRY: Rule = Rule::exactly("country", "Country", "Country code", 2);
const CURRENCY: Rule = Rule::exactly("currency", "Currency", "Currency code", 3);
const LANGUAGE: Rule = Rule::exactly("language", "Language", "Language code", 2);
const VAT_REGISTRATION_NUMBER: Rule =
    Rule::text("vatRegistrationNumber", "VAT Registration Number");
const INPUT_TAX_CODE: Rule = Rule::text("inputTaxCode", "Input Tax Code");
const OUTPUT_TAX_CODE: Rule = Rule::text("outputTaxCode", "Output Tax Code");
const ADDRESS_LINE1: Rule = Rule::text("addressLine1", "Address Line 1");
const ADDRESS_LINE2: Rule = Rule::text("addressLine2", "Address Line 2");
const ADDRESS_LINE3: Rule = Rule::text("addressLine3", "Address Line 3");
const REGION: Rule = Rule::text("region", "Region");
const DISTRICT: Rule = Rule::text("district", "District");
const COUNTY: Rule = Rule::text("county", "County");
const STATE: Rule = Rule::text("state", "State");
const POST_CODE: Rule = Rule::text("postCode", "Post Code");

/// Check a create input.
///
/// # Errors
///
/// Returns every missing required field and every length violation.
pub fn validate_new(input: &NewCompanyCode) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    COMPANY_CODE.check_required(&mut errors, input.company_code.as_deref());
    COMPANY_NAME.check_required(&mut errors, input.company_name.as_deref());
    CITY.check_required(&mut errors, input.city.as_deref());
    COUNTRY.check_required(&mut errors, input.country.as_deref());
    CURRENCY.check_required(&mut errors, input.currency.as_deref());
    LANGUAGE.check_required(&mut errors, input.language.as_deref());

    for (rule, value) in [
        (VAT_REGISTRATION_NUMBER, &input.vat_registration_number),
        (INPUT_TAX_CODE, &input.input_tax_code),
        (OUTPUT_TAX_CODE, &input.output_tax_code),
        (ADDRESS_LINE1, &input.address_line1),
        (ADDRESS_LINE2, &input.address_line2),
        (ADDRESS_LINE3, &input.address_line3),
        (REGION, &input.region),
        (DISTRICT, &input.district),
        (COUNTY, &input.county),
        (STATE, &input.state),
        (POST_CODE, &input.post_code),
    ] {
        rule.check_optional(&mut errors, value.as_deref());
    }

    errors.into_result()
}

/// Check a partial update on its own, before it is merged.
///
/// # Errors
///
/// Returns an error when no field is provided, when a provided required field
/// is blank, or when a provided value breaks its length rule.
pub fn validate_update(update: &CompanyCodeUpdate) -> Result<(), ValidationErrors> {
    if update.is_empty() {
        return Err(ValidationErrors::single(
            "body",
            "At least one field must be provided",
        ));
    }

    let mut errors = ValidationErrors::default();

    for (rule, value) in [
        (COMPANY_CODE, &update.company_code),
        (COMPANY_NAME, &update.company_name),
        (CITY, &update.city),
        (COUNTRY, &update.country),
        (CURRENCY, &update.currency),
        (LANGUAGE, &update.language),
    ] {
        if value.is_some() {
            rule.check_required(&mut errors, value.as_deref());
        }
    }

    for (rule, value) in [
        (VAT_REGISTRATION_NUMBER, &update.vat_registration_number),
        (INPUT_TAX_CODE, &update.input_tax_code),
        (OUTPUT_TAX_CODE, &update.output_tax_code),
        (ADDRESS_LINE1, &update.address_line1),
        (ADDRESS_LINE2, &update.address_line2),
        (ADDRESS_LINE3, &update.address_line3),
        (REGION, &update.region),
        (DISTRICT, &update.district),
        (COUNTY, &update.county),
        (STATE, &update.state),
        (POST_CODE, &update.post_code),
    ] {
        rule.check_optional(&mut errors, value.as_ref().and_then(Option::as_deref));
    }

    errors.into_result()
}

/// Message used when an update tries to change the business key.
pub(crate) fn immutable_company_code() -> ValidationErrors {
    ValidationErrors::single("companyCode", "Company Code cannot be changed")
}
