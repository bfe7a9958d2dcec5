//! Donation form domain logic.
//!
//! This module contains the business rules behind the donation form: turning
//! raw field text into a committed [`DonationRecord`], collecting field-level
//! validation errors, and producing the messages the form shows next to each
//! field. The UI only renders what this service decides.

use chrono::NaiveDate;
use shared::{
    DonationDraft, DonationRecord, DonationType, DraftField, DraftValidation, DraftValidationError,
    RegisterConfig, DATE_INPUT_FORMAT,
};

use crate::error::DraftRejected;

/// Form service that validates and normalizes donation drafts
#[derive(Debug, Clone)]
pub struct DonationFormService {
    config: RegisterConfig,
}

impl DonationFormService {
    pub fn new() -> Self {
        Self {
            config: RegisterConfig::default(),
        }
    }

    pub fn with_config(config: RegisterConfig) -> Self {
        Self { config }
    }

    /// Fresh draft: Money, no name, no amount, dated `today`
    pub fn default_draft(&self, today: NaiveDate) -> DonationDraft {
        DonationDraft::new(today)
    }

    /// Load a committed record back into form fields
    pub fn draft_from_record(&self, record: &DonationRecord) -> DonationDraft {
        DonationDraft {
            donor_name: record.donor_name.clone(),
            donation_type: record.donation_type.as_str().to_string(),
            donation_amount: record
                .donation_amount
                .map(|amount| format!("{:.2}", amount))
                .unwrap_or_default(),
            donation_qty: record
                .donation_qty
                .map(|qty| qty.to_string())
                .unwrap_or_default(),
            donation_date: record.donation_date.format(DATE_INPUT_FORMAT).to_string(),
        }
    }

    /// Apply the constraints a form control enforces while typing.
    ///
    /// Number inputs report an empty value for anything that is not a finite
    /// number; text, select and date inputs pass through unchanged.
    pub fn sanitize_input(&self, field: DraftField, value: String) -> String {
        if field.is_numeric() && !value.trim().is_empty() && !Self::is_numeric_input(&value) {
            String::new()
        } else {
            value
        }
    }

    fn is_numeric_input(value: &str) -> bool {
        value
            .trim()
            .parse::<f64>()
            .map(f64::is_finite)
            .unwrap_or(false)
    }

    /// Validate every field of the draft, collecting all errors
    pub fn validate_draft(&self, draft: &DonationDraft) -> DraftValidation {
        let mut errors = Vec::new();

        let donor_name = draft.donor_name.trim();
        if donor_name.is_empty() {
            errors.push(DraftValidationError::EmptyDonorName);
        } else {
            let length = donor_name.chars().count();
            if length > self.config.max_donor_name_length {
                errors.push(DraftValidationError::DonorNameTooLong(length));
            }
        }

        let donation_type = match draft.donation_type.parse::<DonationType>() {
            Ok(donation_type) => Some(donation_type),
            Err(_) => {
                errors.push(DraftValidationError::InvalidDonationType(draft.donation_type.clone()));
                None
            }
        };

        // Only the field that matches the type is required; the other one may be stale
        let mut donation_amount = None;
        let mut donation_qty = None;
        match donation_type {
            Some(DonationType::Money) => match self.parse_amount(&draft.donation_amount) {
                Ok(amount) => donation_amount = Some(amount),
                Err(error) => errors.push(error),
            },
            Some(_) => match self.parse_quantity(&draft.donation_qty) {
                Ok(qty) => donation_qty = Some(qty),
                Err(error) => errors.push(error),
            },
            None => {}
        }

        let donation_date = match self.parse_date(&draft.donation_date) {
            Ok(date) => Some(date),
            Err(error) => {
                errors.push(error);
                None
            }
        };

        let normalized_record = match (errors.is_empty(), donation_type, donation_date) {
            (true, Some(donation_type), Some(donation_date)) => Some(DonationRecord {
                donor_name: donor_name.to_string(),
                donation_type,
                donation_amount,
                donation_qty,
                donation_date,
            }),
            _ => None,
        };

        DraftValidation {
            is_valid: errors.is_empty(),
            errors,
            normalized_record,
        }
    }

    /// Validate and convert the draft into the record a submit would commit
    pub fn normalize_draft(&self, draft: &DonationDraft) -> Result<DonationRecord, DraftRejected> {
        let validation = self.validate_draft(draft);
        match validation.normalized_record {
            Some(record) => Ok(record),
            None => Err(DraftRejected {
                errors: validation.errors,
            }),
        }
    }

    /// Parse a money amount and round it to cents.
    ///
    /// Rounding is `(x * 100).round() / 100` on the parsed `f64`, half away from
    /// zero, so "10.005" and "2.675" round up while "1.005" rounds down.
    pub fn parse_amount(&self, input: &str) -> Result<f64, DraftValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DraftValidationError::EmptyAmount);
        }

        let amount = trimmed
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| DraftValidationError::InvalidAmountFormat(trimmed.to_string()))?;

        if amount < 0.0 {
            return Err(DraftValidationError::NegativeAmount);
        }

        let amount = Self::round_to_cents(amount);
        if amount > self.config.max_amount {
            return Err(DraftValidationError::AmountTooLarge);
        }

        Ok(amount)
    }

    /// Parse an item count; negative or fractional input is rejected
    pub fn parse_quantity(&self, input: &str) -> Result<u32, DraftValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DraftValidationError::EmptyQuantity);
        }

        trimmed
            .parse::<u32>()
            .map_err(|_| DraftValidationError::InvalidQuantityFormat(trimmed.to_string()))
    }

    /// Parse a `YYYY-MM-DD` date input value
    pub fn parse_date(&self, input: &str) -> Result<NaiveDate, DraftValidationError> {
        NaiveDate::parse_from_str(input.trim(), DATE_INPUT_FORMAT)
            .map_err(|_| DraftValidationError::InvalidDate(input.to_string()))
    }

    /// Round to two fractional digits; negative zero collapses to zero
    pub fn round_to_cents(amount: f64) -> f64 {
        let rounded = (amount * 100.0).round() / 100.0;
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    /// Format amount for display, e.g. "$10.00"
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.config.currency_symbol, amount)
    }

    /// Get user-friendly error message for a validation error
    pub fn error_message(&self, error: &DraftValidationError) -> String {
        match error {
            DraftValidationError::EmptyDonorName => "Please enter the donor's name".to_string(),
            DraftValidationError::DonorNameTooLong(len) => format!(
                "Donor name is too long ({} characters). Maximum is {}.",
                len, self.config.max_donor_name_length
            ),
            DraftValidationError::InvalidDonationType(value) => {
                format!("\"{}\" is not a donation type. Choose Money, Food or Clothing.", value)
            }
            DraftValidationError::EmptyAmount => "Please enter a donation amount".to_string(),
            DraftValidationError::InvalidAmountFormat(value) => {
                format!("Please enter a valid amount (like 5 or 5.00), not \"{}\"", value)
            }
            DraftValidationError::NegativeAmount => format!(
                "Amount must be at least {}",
                self.format_amount(0.0)
            ),
            DraftValidationError::AmountTooLarge => format!(
                "Amount is too large. Maximum is {}",
                self.format_amount(self.config.max_amount)
            ),
            DraftValidationError::EmptyQuantity => "Please enter a donation quantity".to_string(),
            DraftValidationError::InvalidQuantityFormat(value) => {
                format!("Quantity must be a whole number of 0 or more, not \"{}\"", value)
            }
            DraftValidationError::InvalidDate(_) => "Please pick a valid donation date".to_string(),
        }
    }

    pub fn error_messages(&self, errors: &[DraftValidationError]) -> Vec<String> {
        errors.iter().map(|e| self.error_message(e)).collect()
    }

    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }
}

impl Default for DonationFormService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> DonationFormService {
        DonationFormService::new()
    }

    fn create_test_draft() -> DonationDraft {
        let mut draft = DonationDraft::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        draft.donor_name = "Alice".to_string();
        draft.donation_amount = "10".to_string();
        draft
    }

    #[test]
    fn test_validate_money_draft_success() {
        let service = create_test_service();

        let validation = service.validate_draft(&create_test_draft());

        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
        let record = validation.normalized_record.unwrap();
        assert_eq!(record.donor_name, "Alice");
        assert_eq!(record.donation_type, DonationType::Money);
        assert_eq!(record.donation_amount, Some(10.0));
        assert_eq!(record.donation_qty, None);
        assert_eq!(record.donation_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_validate_food_draft_ignores_stale_amount() {
        let service = create_test_service();
        let mut draft = create_test_draft();
        draft.donation_type = "Food".to_string();
        draft.donation_amount = "not a number".to_string();
        draft.donation_qty = "3".to_string();

        let record = service.normalize_draft(&draft).unwrap();

        assert_eq!(record.donation_type, DonationType::Food);
        assert_eq!(record.donation_qty, Some(3));
        assert_eq!(record.donation_amount, None);
    }

    #[test]
    fn test_validate_collects_every_error() {
        let service = create_test_service();
        let mut draft = create_test_draft();
        draft.donor_name = "   ".to_string();
        draft.donation_amount = String::new();
        draft.donation_date = "2024-02-30".to_string();

        let validation = service.validate_draft(&draft);

        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            vec![
                DraftValidationError::EmptyDonorName,
                DraftValidationError::EmptyAmount,
                DraftValidationError::InvalidDate("2024-02-30".to_string()),
            ]
        );
        assert!(validation.normalized_record.is_none());
        assert_eq!(validation.errors_for(DraftField::DonationAmount).count(), 1);
    }

    #[test]
    fn test_validate_unknown_type() {
        let service = create_test_service();
        let mut draft = create_test_draft();
        draft.donation_type = "Books".to_string();

        let rejected = service.normalize_draft(&draft).unwrap_err();

        assert_eq!(
            rejected.errors,
            vec![DraftValidationError::InvalidDonationType("Books".to_string())]
        );
    }

    #[test]
    fn test_validate_missing_quantity() {
        let service = create_test_service();
        let mut draft = create_test_draft();
        draft.donation_type = "Clothing".to_string();

        let validation = service.validate_draft(&draft);

        assert_eq!(validation.errors, vec![DraftValidationError::EmptyQuantity]);
    }

    #[test]
    fn test_donor_name_length_limit() {
        let service = DonationFormService::with_config(RegisterConfig {
            max_donor_name_length: 5,
            ..RegisterConfig::default()
        });
        let mut draft = create_test_draft();
        draft.donor_name = "Alexandra".to_string();

        let validation = service.validate_draft(&draft);

        assert_eq!(validation.errors, vec![DraftValidationError::DonorNameTooLong(9)]);
    }

    #[test]
    fn test_donor_name_is_trimmed() {
        let service = create_test_service();
        let mut draft = create_test_draft();
        draft.donor_name = "  Alice Smith ".to_string();

        let record = service.normalize_draft(&draft).unwrap();

        assert_eq!(record.donor_name, "Alice Smith");
    }

    #[test]
    fn test_parse_amount() {
        let service = create_test_service();

        assert_eq!(service.parse_amount("10").unwrap(), 10.0);
        assert_eq!(service.parse_amount(" 12.346 ").unwrap(), 12.35);
        assert_eq!(service.parse_amount("0.004").unwrap(), 0.0);
        assert_eq!(service.parse_amount(""), Err(DraftValidationError::EmptyAmount));
        assert_eq!(service.parse_amount("-1"), Err(DraftValidationError::NegativeAmount));
        assert_eq!(
            service.parse_amount("abc"),
            Err(DraftValidationError::InvalidAmountFormat("abc".to_string()))
        );
        assert!(service.parse_amount("NaN").is_err());
        assert!(service.parse_amount("inf").is_err());
    }

    #[test]
    fn test_parse_amount_half_cents() {
        let service = create_test_service();

        assert_eq!(service.parse_amount("10.005").unwrap(), 10.01);
        assert_eq!(service.parse_amount("1.005").unwrap(), 1.0);
        // 2.675 is stored as 2.67499.. but 267.5 after scaling, so it rounds up
        assert_eq!(service.parse_amount("2.675").unwrap(), 2.68);
        assert_eq!(service.parse_amount("0.125").unwrap(), 0.13);
    }

    #[test]
    fn test_parse_amount_maximum() {
        let service = create_test_service();

        assert_eq!(service.parse_amount("1000000").unwrap(), 1_000_000.0);
        assert_eq!(service.parse_amount("1000000.004").unwrap(), 1_000_000.0);
        assert_eq!(
            service.parse_amount("1000000.01"),
            Err(DraftValidationError::AmountTooLarge)
        );
        assert_eq!(
            service.parse_amount("100000000000000000"),
            Err(DraftValidationError::AmountTooLarge)
        );
        assert_eq!(
            service.error_message(&DraftValidationError::AmountTooLarge),
            "Amount is too large. Maximum is $1000000.00"
        );
    }

    #[test]
    fn test_parse_amount_configured_maximum() {
        let service = DonationFormService::with_config(RegisterConfig {
            max_amount: 50.0,
            ..RegisterConfig::default()
        });

        assert_eq!(service.parse_amount("50").unwrap(), 50.0);
        assert_eq!(service.parse_amount("50.01"), Err(DraftValidationError::AmountTooLarge));
    }

    #[test]
    fn test_parse_quantity() {
        let service = create_test_service();

        assert_eq!(service.parse_quantity("3").unwrap(), 3);
        assert_eq!(service.parse_quantity("0").unwrap(), 0);
        assert_eq!(service.parse_quantity(" "), Err(DraftValidationError::EmptyQuantity));
        assert!(service.parse_quantity("2.5").is_err());
        assert!(service.parse_quantity("-4").is_err());
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(DonationFormService::round_to_cents(10.0), 10.0);
        assert_eq!(DonationFormService::round_to_cents(1.239), 1.24);
        assert_eq!(format!("{:.2}", DonationFormService::round_to_cents(-0.001)), "0.00");
    }

    #[test]
    fn test_sanitize_numeric_input() {
        let service = create_test_service();

        assert_eq!(service.sanitize_input(DraftField::DonationAmount, "12.5".to_string()), "12.5");
        assert_eq!(service.sanitize_input(DraftField::DonationAmount, "12,5".to_string()), "");
        assert_eq!(service.sanitize_input(DraftField::DonationQty, "three".to_string()), "");
        assert_eq!(service.sanitize_input(DraftField::DonationQty, String::new()), "");
        assert_eq!(service.sanitize_input(DraftField::DonorName, "three".to_string()), "three");
    }

    #[test]
    fn test_draft_from_record_round_trip() {
        let service = create_test_service();
        let draft = create_test_draft();
        let record = service.normalize_draft(&draft).unwrap();

        let loaded = service.draft_from_record(&record);

        assert_eq!(loaded.donation_amount, "10.00");
        assert_eq!(loaded.donation_qty, "");
        assert_eq!(loaded.donation_date, "2024-01-01");
        assert_eq!(service.normalize_draft(&loaded).unwrap(), record);
    }

    #[test]
    fn test_error_messages() {
        let service = create_test_service();

        let messages = service.error_messages(&[
            DraftValidationError::EmptyDonorName,
            DraftValidationError::NegativeAmount,
        ]);

        assert_eq!(
            messages,
            vec!["Please enter the donor's name", "Amount must be at least $0.00"]
        );
    }

    #[test]
    fn test_format_amount() {
        let service = create_test_service();

        assert_eq!(service.format_amount(10.5), "$10.50");
    }
}
