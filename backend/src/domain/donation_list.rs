//! Donation list domain logic.
//!
//! Turns committed records into the rows the list surface shows: the amount
//! or quantity picked by donation type, currency formatting, and the
//! configured date style.

use chrono::NaiveDate;
use shared::{
    DateFormat, DonationId, DonationRecord, DonationType, FormattedDonation, RegisterConfig,
    TypeFilter,
};

/// Shown in place of the list when the filter matches nothing
pub const EMPTY_LIST_MESSAGE: &str = "No donations with these filters.";

/// List service that handles record formatting for display
#[derive(Debug, Clone)]
pub struct DonationListService {
    config: RegisterConfig,
}

impl DonationListService {
    pub fn new() -> Self {
        Self {
            config: RegisterConfig::default(),
        }
    }

    pub fn with_config(config: RegisterConfig) -> Self {
        Self { config }
    }

    /// Format a sequence of records for the list, preserving order
    pub fn format_records<'a, I>(&self, records: I) -> Vec<FormattedDonation>
    where
        I: IntoIterator<Item = (DonationId, &'a DonationRecord)>,
    {
        records
            .into_iter()
            .map(|(id, record)| self.format_single_record(id, record))
            .collect()
    }

    pub fn format_single_record(
        &self,
        id: DonationId,
        record: &DonationRecord,
    ) -> FormattedDonation {
        FormattedDonation {
            id,
            donor_name: record.donor_name.clone(),
            donation_type: record.donation_type,
            value_label: self.value_label(record.donation_type).to_string(),
            formatted_value: self.format_amount_or_qty(record),
            formatted_date: self.format_date(record.donation_date),
        }
    }

    pub fn value_label(&self, donation_type: DonationType) -> &'static str {
        if donation_type.is_money() {
            "Amount"
        } else {
            "Qty"
        }
    }

    /// "$10.00" for Money records, the item count otherwise
    pub fn format_amount_or_qty(&self, record: &DonationRecord) -> String {
        if record.donation_type.is_money() {
            self.format_amount(record.donation_amount.unwrap_or_default())
        } else {
            record.donation_qty.unwrap_or_default().to_string()
        }
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.config.currency_symbol, amount)
    }

    /// Format a date for display based on configuration
    pub fn format_date(&self, date: NaiveDate) -> String {
        match self.config.date_format {
            DateFormat::Iso => date.format("%Y-%m-%d").to_string(),
            DateFormat::MonthDayYear => date.format("%B %-d, %Y").to_string(),
            DateFormat::ShortDate => date.format("%m/%d/%Y").to_string(),
        }
    }

    pub fn matches_filter(&self, filter: TypeFilter, record: &DonationRecord) -> bool {
        filter.matches(record.donation_type)
    }

    pub fn empty_message(&self) -> &'static str {
        EMPTY_LIST_MESSAGE
    }
}

impl Default for DonationListService {
    fn default() -> Self {
        Self::new()
    }
}
