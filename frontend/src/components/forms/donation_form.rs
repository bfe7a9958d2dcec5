use shared::{DonationDraft, DonationType, DraftField, FormMode};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonationFormProps {
    // Form state
    pub draft: DonationDraft,
    pub mode: FormMode,
    pub field_errors: Vec<(DraftField, String)>,

    // Event handlers
    pub on_field_change: Callback<(DraftField, String)>,
    pub on_submit: Callback<()>,
    pub on_reset: Callback<()>,
}

fn input_handler(
    field: DraftField,
    on_field_change: &Callback<(DraftField, String)>,
) -> Callback<InputEvent> {
    let on_field_change = on_field_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_field_change.emit((field, input.value()));
    })
}

fn field_errors(props: &DonationFormProps, field: DraftField) -> Html {
    props
        .field_errors
        .iter()
        .filter(|(f, _)| *f == field)
        .map(|(_, message)| html! { <p class="field-error">{message}</p> })
        .collect()
}

fn field_class(props: &DonationFormProps, field: DraftField) -> &'static str {
    if props.field_errors.iter().any(|(f, _)| *f == field) {
        "form-input invalid"
    } else {
        "form-input"
    }
}

#[function_component(DonationForm)]
pub fn donation_form(props: &DonationFormProps) -> Html {
    let is_money = props.draft.selected_type() == Some(DonationType::Money);

    let on_type_change = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field_change.emit((DraftField::DonationType, select.value()));
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <section class="donation-form-section">
            <h3>{format!("Donation Form ({})", props.mode.heading())}</h3>

            // Validation runs in the register so every field error shows inline
            <form class="donation-form" novalidate={true} onsubmit={on_submit}>
                <div class="form-group">
                    <label for={DraftField::DonorName.input_name()}>{DraftField::DonorName.label()}</label>
                    <input
                        type="text"
                        id={DraftField::DonorName.input_name()}
                        name={DraftField::DonorName.input_name()}
                        class={field_class(props, DraftField::DonorName)}
                        placeholder="Full Name"
                        required={true}
                        value={props.draft.donor_name.clone()}
                        oninput={input_handler(DraftField::DonorName, &props.on_field_change)}
                    />
                    {field_errors(props, DraftField::DonorName)}
                </div>

                <div class="form-group">
                    <label for={DraftField::DonationType.input_name()}>{DraftField::DonationType.label()}</label>
                    <select
                        id={DraftField::DonationType.input_name()}
                        name={DraftField::DonationType.input_name()}
                        class={field_class(props, DraftField::DonationType)}
                        required={true}
                        onchange={on_type_change}
                    >
                        {for DonationType::ALL.iter().map(|donation_type| {
                            html! {
                                <option
                                    value={donation_type.as_str()}
                                    selected={props.draft.donation_type == donation_type.as_str()}
                                >
                                    {donation_type.as_str()}
                                </option>
                            }
                        })}
                    </select>
                    {field_errors(props, DraftField::DonationType)}
                </div>

                {if is_money {
                    html! {
                        <div class="form-group">
                            <label for={DraftField::DonationAmount.input_name()}>{DraftField::DonationAmount.label()}</label>
                            <input
                                type="number"
                                id={DraftField::DonationAmount.input_name()}
                                name={DraftField::DonationAmount.input_name()}
                                class={field_class(props, DraftField::DonationAmount)}
                                placeholder="Donation Amount"
                                step="0.01"
                                min="0"
                                required={true}
                                value={props.draft.donation_amount.clone()}
                                oninput={input_handler(DraftField::DonationAmount, &props.on_field_change)}
                            />
                            {field_errors(props, DraftField::DonationAmount)}
                        </div>
                    }
                } else {
                    html! {
                        <div class="form-group">
                            <label for={DraftField::DonationQty.input_name()}>{DraftField::DonationQty.label()}</label>
                            <input
                                type="number"
                                id={DraftField::DonationQty.input_name()}
                                name={DraftField::DonationQty.input_name()}
                                class={field_class(props, DraftField::DonationQty)}
                                placeholder="Donation Quantity"
                                min="0"
                                required={true}
                                value={props.draft.donation_qty.clone()}
                                oninput={input_handler(DraftField::DonationQty, &props.on_field_change)}
                            />
                            {field_errors(props, DraftField::DonationQty)}
                        </div>
                    }
                }}

                <div class="form-group">
                    <label for={DraftField::DonationDate.input_name()}>{DraftField::DonationDate.label()}</label>
                    <input
                        type="date"
                        id={DraftField::DonationDate.input_name()}
                        name={DraftField::DonationDate.input_name()}
                        class={field_class(props, DraftField::DonationDate)}
                        required={true}
                        value={props.draft.donation_date.clone()}
                        oninput={input_handler(DraftField::DonationDate, &props.on_field_change)}
                    />
                    {field_errors(props, DraftField::DonationDate)}
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">{"Submit"}</button>
                    <button type="button" class="btn btn-secondary" onclick={on_reset}>{"Reset"}</button>
                </div>
            </form>
        </section>
    }
}
