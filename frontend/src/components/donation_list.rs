use shared::{DonationId, FormattedDonation, TypeFilter};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonationListProps {
    pub donations: Vec<FormattedDonation>,
    pub filter: TypeFilter,
    pub empty_message: AttrValue,
    pub on_filter_change: Callback<TypeFilter>,
    pub on_delete: Callback<DonationId>,
    pub on_edit: Callback<DonationId>,
}

#[function_component(DonationList)]
pub fn donation_list(props: &DonationListProps) -> Html {
    let on_filter_change = {
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<TypeFilter>() {
                Ok(filter) => on_filter_change.emit(filter),
                Err(error) => log::warn!("Ignoring filter selection: {}", error),
            }
        })
    };

    html! {
        <section class="donation-list-section">
            <h3>{"Donation List"}</h3>

            <div class="form-group">
                <label for="donationTypeFilter">{"Donation Type Filter"}</label>
                <select id="donationTypeFilter" name="donationTypeFilter" onchange={on_filter_change}>
                    {for TypeFilter::ALL.iter().map(|filter| {
                        html! {
                            <option value={filter.as_value()} selected={*filter == props.filter}>
                                {filter.label()}
                            </option>
                        }
                    })}
                </select>
            </div>

            {if props.donations.is_empty() {
                html! { <p class="empty-list">{props.empty_message.as_str()}</p> }
            } else {
                html! {
                    <ul class="donation-list">
                        {for props.donations.iter().map(|donation| {
                            let id = donation.id;
                            let on_delete = {
                                let on_delete = props.on_delete.clone();
                                Callback::from(move |_: MouseEvent| on_delete.emit(id))
                            };
                            let on_edit = {
                                let on_edit = props.on_edit.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(id))
                            };

                            html! {
                                <li key={id.to_string()} class="donation-entry">
                                    <p><strong>{"Name: "}</strong>{&donation.donor_name}</p>
                                    <p><strong>{"Type: "}</strong>{donation.donation_type.as_str()}</p>
                                    <p>
                                        <strong>{format!("{}: ", donation.value_label)}</strong>
                                        {&donation.formatted_value}
                                    </p>
                                    <p><strong>{"Date: "}</strong>{&donation.formatted_date}</p>
                                    <div class="entry-actions">
                                        <button type="button" class="btn btn-danger" onclick={on_delete}>{"Delete"}</button>
                                        <button type="button" class="btn btn-primary" onclick={on_edit}>{"Edit"}</button>
                                    </div>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
