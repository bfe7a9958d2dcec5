use std::rc::Rc;

use donation_register_backend::{
    CommandOutcome, DonationRegister, RegisterCommand, RegisterError, SystemClock,
};
use shared::{DonationId, DraftField, DraftValidationError, RegisterConfig, TypeFilter};
use yew::prelude::*;

/// Register plus the field errors from the last rejected submit
#[derive(Clone, Debug)]
pub struct RegisterState {
    pub register: DonationRegister,
    pub field_errors: Vec<DraftValidationError>,
}

impl RegisterState {
    pub fn new(config: RegisterConfig) -> Self {
        Self {
            register: DonationRegister::with_config(SystemClock, config),
            field_errors: Vec::new(),
        }
    }

    /// (field, message) pairs for inline display
    pub fn field_error_messages(&self) -> Vec<(DraftField, String)> {
        let form_service = self.register.form_service();
        self.field_errors
            .iter()
            .map(|error| (error.field(), form_service.error_message(error)))
            .collect()
    }
}

impl Reducible for RegisterState {
    type Action = RegisterCommand;

    fn reduce(self: Rc<Self>, command: RegisterCommand) -> Rc<Self> {
        let mut next = (*self).clone();

        match next.register.apply(command) {
            Ok(CommandOutcome::DraftUpdated(_)) => {
                // After a rejected submit the inline errors track the draft as it changes
                if !next.field_errors.is_empty() {
                    next.field_errors = next.register.validate_draft().errors;
                }
            }
            Ok(CommandOutcome::Committed { .. })
            | Ok(CommandOutcome::DraftReset)
            | Ok(CommandOutcome::EditStarted(_)) => {
                next.field_errors.clear();
            }
            Ok(CommandOutcome::Deleted { .. }) | Ok(CommandOutcome::FilterChanged(_)) => {}
            Err(RegisterError::DraftRejected(rejected)) => {
                next.field_errors = rejected.errors;
            }
            Err(error) => {
                log::error!("Register command failed: {}", error);
            }
        }

        Rc::new(next)
    }
}

pub struct UseDonationRegisterResult {
    pub state: UseReducerHandle<RegisterState>,
    pub actions: UseDonationRegisterActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDonationRegisterActions {
    pub on_field_change: Callback<(DraftField, String)>,
    pub on_submit: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_delete: Callback<DonationId>,
    pub on_edit: Callback<DonationId>,
    pub on_filter_change: Callback<TypeFilter>,
}

#[hook]
pub fn use_donation_register(config: &RegisterConfig) -> UseDonationRegisterResult {
    let state = {
        let config = config.clone();
        use_reducer(move || RegisterState::new(config))
    };

    let on_field_change = {
        let dispatcher = state.dispatcher();
        use_callback((), move |(field, value): (DraftField, String), _| {
            dispatcher.dispatch(RegisterCommand::UpdateDraftField { field, value });
        })
    };

    let on_submit = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(RegisterCommand::SubmitDraft))
    };

    let on_reset = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(RegisterCommand::ResetDraft))
    };

    let on_delete = {
        let dispatcher = state.dispatcher();
        use_callback((), move |id: DonationId, _| {
            dispatcher.dispatch(RegisterCommand::DeleteRecord(id))
        })
    };

    let on_edit = {
        let dispatcher = state.dispatcher();
        use_callback((), move |id: DonationId, _| {
            dispatcher.dispatch(RegisterCommand::StartEdit(id))
        })
    };

    let on_filter_change = {
        let dispatcher = state.dispatcher();
        use_callback((), move |filter: TypeFilter, _| {
            dispatcher.dispatch(RegisterCommand::SetTypeFilter(filter))
        })
    };

    let actions = UseDonationRegisterActions {
        on_field_change,
        on_submit,
        on_reset,
        on_delete,
        on_edit,
        on_filter_change,
    };

    UseDonationRegisterResult { state, actions }
}
