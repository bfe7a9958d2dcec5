//! The donation register state machine.
//!
//! A [`DonationRegister`] owns every piece of state behind the donation page:
//! the id counter, the committed records, the edit target, the list filter and
//! the form draft. Add and Edit mode are never stored; they fall out of
//! comparing the edit target with the next unused id.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use shared::{
    DonationDraft, DonationId, DonationRecord, DonationStats, DonationType, DraftField,
    DraftValidation, FormMode, FormattedDonation, RegisterConfig, TypeFilter,
};

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::commands::{CommandOutcome, RegisterCommand};
use crate::domain::donation_form::DonationFormService;
use crate::domain::donation_list::DonationListService;
use crate::error::{DraftRejected, RegisterError, Result};

/// 2^53, the first cent count an `f64` cannot hold exactly
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone)]
pub struct DonationRegister<C: Clock = SystemClock> {
    clock: C,
    form_service: DonationFormService,
    list_service: DonationListService,
    next_id: DonationId,
    // Ids only grow and edits overwrite in place, so key order is insertion order
    records: BTreeMap<DonationId, DonationRecord>,
    edit_target_id: DonationId,
    type_filter: TypeFilter,
    draft: DonationDraft,
}

impl DonationRegister<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DonationRegister<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DonationRegister<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::with_config(clock, RegisterConfig::default())
    }

    pub fn with_config(clock: C, config: RegisterConfig) -> Self {
        let form_service = DonationFormService::with_config(config.clone());
        let list_service = DonationListService::with_config(config);
        let draft = form_service.default_draft(clock.today());

        Self {
            clock,
            form_service,
            list_service,
            next_id: 0,
            records: BTreeMap::new(),
            edit_target_id: 0,
            type_filter: TypeFilter::All,
            draft,
        }
    }

    pub fn next_id(&self) -> DonationId {
        self.next_id
    }

    pub fn edit_target_id(&self) -> DonationId {
        self.edit_target_id
    }

    pub fn type_filter(&self) -> TypeFilter {
        self.type_filter
    }

    pub fn draft(&self) -> &DonationDraft {
        &self.draft
    }

    pub fn records(&self) -> &BTreeMap<DonationId, DonationRecord> {
        &self.records
    }

    pub fn get(&self, id: DonationId) -> Option<&DonationRecord> {
        self.records.get(&id)
    }

    pub fn form_service(&self) -> &DonationFormService {
        &self.form_service
    }

    /// Add while the edit target is the next unused id, Edit otherwise
    pub fn mode(&self) -> FormMode {
        if self.edit_target_id == self.next_id {
            FormMode::Add
        } else {
            FormMode::Edit
        }
    }

    /// "Adding" or "Editing"
    pub fn form_heading(&self) -> &'static str {
        self.mode().heading()
    }

    /// Apply one command, delegating to the operation of the same name
    pub fn apply(&mut self, command: RegisterCommand) -> Result<CommandOutcome> {
        match command {
            RegisterCommand::UpdateDraftField { field, value } => {
                self.update_draft_field(field, value);
                Ok(CommandOutcome::DraftUpdated(field))
            }
            RegisterCommand::SubmitDraft => {
                let mode = self.mode();
                let id = self.submit_draft()?;
                Ok(CommandOutcome::Committed { id, mode })
            }
            RegisterCommand::DeleteRecord(id) => {
                let existed = self.delete_record(id).is_some();
                Ok(CommandOutcome::Deleted { id, existed })
            }
            RegisterCommand::StartEdit(id) => {
                self.start_edit(id)?;
                Ok(CommandOutcome::EditStarted(id))
            }
            RegisterCommand::ResetDraft => {
                self.reset_draft();
                Ok(CommandOutcome::DraftReset)
            }
            RegisterCommand::SetTypeFilter(filter) => {
                self.set_type_filter(filter);
                Ok(CommandOutcome::FilterChanged(filter))
            }
        }
    }

    /// Set one draft field. Numeric fields drop non-numeric text.
    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = self.form_service.sanitize_input(field, value.into());
        debug!("Draft field {} updated", field);
        self.draft.set_field(field, value);
    }

    /// Run submit-time validation without committing
    pub fn validate_draft(&self) -> DraftValidation {
        self.form_service.validate_draft(&self.draft)
    }

    /// Commit the draft at the edit target and return to add mode.
    ///
    /// On rejection nothing changes: records, ids and the draft stay as they were.
    pub fn submit_draft(&mut self) -> std::result::Result<DonationId, DraftRejected> {
        let record = match self.form_service.normalize_draft(&self.draft) {
            Ok(record) => record,
            Err(rejected) => {
                warn!("Donation draft rejected: {}", rejected);
                return Err(rejected);
            }
        };

        let id = self.edit_target_id;
        let mode = self.mode();
        self.records.insert(id, record);

        if mode == FormMode::Add {
            self.next_id += 1;
        }
        self.edit_target_id = self.next_id;
        self.draft = self.form_service.default_draft(self.clock.today());

        info!("💾 Donation {} committed ({})", id, mode.heading());
        Ok(id)
    }

    /// Remove a record; returns it if it existed.
    ///
    /// Deleting the record currently being edited also cancels the edit, so
    /// the next submit cannot resurrect the deleted id.
    pub fn delete_record(&mut self, id: DonationId) -> Option<DonationRecord> {
        let removed = self.records.remove(&id);
        match &removed {
            Some(_) => {
                info!("🗑️ Donation {} deleted", id);
                if self.mode() == FormMode::Edit && self.edit_target_id == id {
                    info!("Donation {} was being edited, returning to add mode", id);
                    self.reset_draft();
                }
            }
            None => debug!("Delete of missing donation {} ignored", id),
        }
        removed
    }

    /// Load a record into the draft and target it for the next submit
    pub fn start_edit(&mut self, id: DonationId) -> Result<()> {
        let record = self
            .records
            .get(&id)
            .ok_or(RegisterError::UnknownDonation(id))?;

        self.draft = self.form_service.draft_from_record(record);
        self.edit_target_id = id;
        info!("✏️ Editing donation {}", id);
        Ok(())
    }

    /// Cancel any edit and clear the form
    pub fn reset_draft(&mut self) {
        self.edit_target_id = self.next_id;
        self.draft = self.form_service.default_draft(self.clock.today());
        debug!("Draft reset");
    }

    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        debug!("Type filter set to {}", filter.label());
        self.type_filter = filter;
    }

    /// Records matching the current filter, in insertion order.
    ///
    /// The iterator borrows the register and can be cloned to restart it.
    pub fn filtered_records(
        &self,
    ) -> impl Iterator<Item = (DonationId, &DonationRecord)> + Clone + '_ {
        let filter = self.type_filter;
        let list_service = &self.list_service;
        self.records
            .iter()
            .filter(move |(_, record)| list_service.matches_filter(filter, record))
            .map(|(id, record)| (*id, record))
    }

    /// Filtered records formatted for the list surface
    pub fn formatted_records(&self) -> Vec<FormattedDonation> {
        self.list_service.format_records(self.filtered_records())
    }

    pub fn empty_list_message(&self) -> &'static str {
        self.list_service.empty_message()
    }

    /// Number of records, ignoring the filter
    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    /// Sum of Money amounts with two decimals, ignoring the filter
    pub fn total_money_amount(&self) -> String {
        format!("{:.2}", self.total_money_value())
    }

    fn total_money_value(&self) -> f64 {
        let amounts = self
            .records
            .values()
            .filter(|record| record.donation_type == DonationType::Money)
            .filter_map(|record| record.donation_amount);

        // Amounts are stored rounded to cents; summing whole cents keeps the total exact
        // while every cent count fits in an f64 mantissa
        let cents = amounts.clone().try_fold(0_i64, |total, amount| {
            let cents = (amount * 100.0).round();
            if cents.abs() < MAX_EXACT_CENTS {
                total.checked_add(cents as i64)
            } else {
                None
            }
        });

        match cents {
            Some(cents) => cents as f64 / 100.0,
            None => amounts.sum::<f64>(),
        }
    }

    pub fn stats(&self) -> DonationStats {
        let total = self.total_money_value();
        DonationStats {
            total_count: self.total_count(),
            total_money_amount: format!("{:.2}", total),
            formatted_money_amount: self.list_service.format_amount(total),
        }
    }
}
