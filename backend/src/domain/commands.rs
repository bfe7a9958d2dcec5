//! Command and outcome types for driving the register.
//!
//! The UI turns every user interaction into exactly one [`RegisterCommand`]
//! and hands it to [`DonationRegister::apply`](super::DonationRegister::apply).

use shared::{DonationId, DraftField, FormMode, TypeFilter};

/// One user interaction against the register
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterCommand {
    /// A form control changed
    UpdateDraftField { field: DraftField, value: String },
    /// The form was submitted
    SubmitDraft,
    /// Delete button on a list entry
    DeleteRecord(DonationId),
    /// Edit button on a list entry
    StartEdit(DonationId),
    /// Reset button on the form
    ResetDraft,
    /// The list filter changed
    SetTypeFilter(TypeFilter),
}

/// What a successfully applied command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    DraftUpdated(DraftField),
    /// The draft was written at `id`; `mode` is the mode it was submitted in
    Committed { id: DonationId, mode: FormMode },
    /// `existed` is false when the id was already gone
    Deleted { id: DonationId, existed: bool },
    EditStarted(DonationId),
    DraftReset,
    FilterChanged(TypeFilter),
}
