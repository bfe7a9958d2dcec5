use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Register key for a committed donation. Issued in increasing order, never reused.
pub type DonationId = u64;

/// Kind of donation a donor made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DonationType {
    /// Cash donation, tracked by amount
    #[default]
    Money,
    /// Food items, tracked by quantity
    Food,
    /// Clothing items, tracked by quantity
    Clothing,
}

impl DonationType {
    /// Every donation type, in the order the form selector lists them
    pub const ALL: [DonationType; 3] =
        [DonationType::Money, DonationType::Food, DonationType::Clothing];

    pub fn as_str(&self) -> &'static str {
        match self {
            DonationType::Money => "Money",
            DonationType::Food => "Food",
            DonationType::Clothing => "Clothing",
        }
    }

    /// Money donations carry an amount, everything else carries a quantity
    pub fn is_money(&self) -> bool {
        matches!(self, DonationType::Money)
    }
}

impl fmt::Display for DonationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown donation type: {0:?}")]
pub struct ParseDonationTypeError(pub String);

impl FromStr for DonationType {
    type Err = ParseDonationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Money" => Ok(DonationType::Money),
            "Food" => Ok(DonationType::Food),
            "Clothing" => Ok(DonationType::Clothing),
            other => Err(ParseDonationTypeError(other.to_string())),
        }
    }
}

/// Type filter for the donation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Money,
    Food,
    Clothing,
}

impl TypeFilter {
    /// Every filter option, in the order the list selector shows them
    pub const ALL: [TypeFilter; 4] = [
        TypeFilter::All,
        TypeFilter::Money,
        TypeFilter::Food,
        TypeFilter::Clothing,
    ];

    /// Value used for the `<option>` element
    pub fn as_value(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Money => "Money",
            TypeFilter::Food => "Food",
            TypeFilter::Clothing => "Clothing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            other => other.as_value(),
        }
    }

    pub fn matches(&self, donation_type: DonationType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Money => donation_type == DonationType::Money,
            TypeFilter::Food => donation_type == DonationType::Food,
            TypeFilter::Clothing => donation_type == DonationType::Clothing,
        }
    }
}

impl From<DonationType> for TypeFilter {
    fn from(donation_type: DonationType) -> Self {
        match donation_type {
            DonationType::Money => TypeFilter::Money,
            DonationType::Food => TypeFilter::Food,
            DonationType::Clothing => TypeFilter::Clothing,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = ParseDonationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" | "All" => Ok(TypeFilter::All),
            other => other.parse::<DonationType>().map(TypeFilter::from),
        }
    }
}

/// A committed donation
///
/// Exactly one of `donation_amount` / `donation_qty` is set, chosen by
/// `donation_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub donor_name: String,
    pub donation_type: DonationType,
    /// Amount in currency units, rounded to two decimal places (Money only)
    pub donation_amount: Option<f64>,
    /// Item count (Food and Clothing only)
    pub donation_qty: Option<u32>,
    pub donation_date: NaiveDate,
}

/// Form field addressed by a draft update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftField {
    DonorName,
    DonationType,
    DonationAmount,
    DonationQty,
    DonationDate,
}

impl DraftField {
    /// `name`/`id` attribute of the matching form control
    pub fn input_name(&self) -> &'static str {
        match self {
            DraftField::DonorName => "donorName",
            DraftField::DonationType => "donationType",
            DraftField::DonationAmount => "donationAmount",
            DraftField::DonationQty => "donationQty",
            DraftField::DonationDate => "donationDate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::DonorName => "Donor Name",
            DraftField::DonationType => "Donation Type",
            DraftField::DonationAmount => "Donation Amount",
            DraftField::DonationQty => "Donation Quantity",
            DraftField::DonationDate => "Donation Date",
        }
    }

    /// Whether the form renders this field as a number input
    pub fn is_numeric(&self) -> bool {
        matches!(self, DraftField::DonationAmount | DraftField::DonationQty)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_name())
    }
}

/// In-progress form contents, one raw string per field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationDraft {
    pub donor_name: String,
    pub donation_type: String,
    pub donation_amount: String,
    pub donation_qty: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub donation_date: String,
}

impl DonationDraft {
    /// Empty draft for a Money donation dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            donor_name: String::new(),
            donation_type: DonationType::default().as_str().to_string(),
            donation_amount: String::new(),
            donation_qty: String::new(),
            donation_date: today.format(DATE_INPUT_FORMAT).to_string(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::DonorName => &self.donor_name,
            DraftField::DonationType => &self.donation_type,
            DraftField::DonationAmount => &self.donation_amount,
            DraftField::DonationQty => &self.donation_qty,
            DraftField::DonationDate => &self.donation_date,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::DonorName => self.donor_name = value,
            DraftField::DonationType => self.donation_type = value,
            DraftField::DonationAmount => self.donation_amount = value,
            DraftField::DonationQty => self.donation_qty = value,
            DraftField::DonationDate => self.donation_date = value,
        }
    }

    /// Currently selected type, if the selector holds a known value
    pub fn selected_type(&self) -> Option<DonationType> {
        self.donation_type.parse().ok()
    }
}

/// `chrono` format string for `<input type="date">` values
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Whether the next submit creates a record or overwrites one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    Add,
    Edit,
}

impl FormMode {
    /// Suffix for the form heading
    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Add => "Adding",
            FormMode::Edit => "Editing",
        }
    }
}

/// A donation ready for the list surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedDonation {
    pub id: DonationId,
    pub donor_name: String,
    pub donation_type: DonationType,
    /// "Amount" for Money, "Qty" otherwise
    pub value_label: String,
    /// "$10.00" for Money, "3" otherwise
    pub formatted_value: String,
    pub formatted_date: String,
}

/// Aggregates over every record, independent of the list filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationStats {
    pub total_count: usize,
    /// Sum of Money amounts with two decimals, e.g. "10.00"
    pub total_money_amount: String,
    /// `total_money_amount` with the currency symbol, e.g. "$10.00"
    pub formatted_money_amount: String,
}

/// Field-level reason a draft cannot be committed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DraftValidationError {
    #[error("donor name is required")]
    EmptyDonorName,
    #[error("donor name is too long ({0} characters)")]
    DonorNameTooLong(usize),
    #[error("unknown donation type {0:?}")]
    InvalidDonationType(String),
    #[error("donation amount is required")]
    EmptyAmount,
    #[error("donation amount {0:?} is not a number")]
    InvalidAmountFormat(String),
    #[error("donation amount cannot be negative")]
    NegativeAmount,
    #[error("donation amount is above the configured maximum")]
    AmountTooLarge,
    #[error("donation quantity is required")]
    EmptyQuantity,
    #[error("donation quantity {0:?} is not a whole number")]
    InvalidQuantityFormat(String),
    #[error("donation date {0:?} is not a valid date")]
    InvalidDate(String),
}

impl DraftValidationError {
    /// The form field this error should be shown next to
    pub fn field(&self) -> DraftField {
        match self {
            DraftValidationError::EmptyDonorName | DraftValidationError::DonorNameTooLong(_) => {
                DraftField::DonorName
            }
            DraftValidationError::InvalidDonationType(_) => DraftField::DonationType,
            DraftValidationError::EmptyAmount
            | DraftValidationError::InvalidAmountFormat(_)
            | DraftValidationError::NegativeAmount
            | DraftValidationError::AmountTooLarge => DraftField::DonationAmount,
            DraftValidationError::EmptyQuantity
            | DraftValidationError::InvalidQuantityFormat(_) => DraftField::DonationQty,
            DraftValidationError::InvalidDate(_) => DraftField::DonationDate,
        }
    }
}

/// Result of validating a draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftValidation {
    pub is_valid: bool,
    pub errors: Vec<DraftValidationError>,
    /// The record the draft would commit as, when valid
    pub normalized_record: Option<DonationRecord>,
}

impl DraftValidation {
    pub fn errors_for(
        &self,
        field: DraftField,
    ) -> impl Iterator<Item = &DraftValidationError> + '_ {
        self.errors.iter().filter(move |error| error.field() == field)
    }
}

/// Date display options for the list surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    Iso,           // "2024-01-01"
    MonthDayYear,  // "January 1, 2024"
    ShortDate,     // "01/01/2024"
}

/// Display and validation settings for the register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    pub currency_symbol: String,
    pub max_donor_name_length: usize,
    /// Largest Money amount a single donation may carry
    pub max_amount: f64,
    pub date_format: DateFormat,
    /// `log` level name: "error", "warn", "info", "debug" or "trace"
    pub log_level: String,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            max_donor_name_length: 256,
            max_amount: 1_000_000.0,
            date_format: DateFormat::Iso,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid register configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RegisterConfig {
    /// Parse a JSON override; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
