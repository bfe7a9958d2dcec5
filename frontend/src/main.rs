use shared::RegisterConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{DonationForm, DonationList, DonationStatsPanel};
use hooks::use_donation_register;
use services::{config::load_config, logging::Logger};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: RegisterConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let register = use_donation_register(&props.config);
    let state = &*register.state;
    let actions = register.actions;

    html! {
        <main class="donation-app">
            <div class="donation-grid">
                <DonationList
                    donations={state.register.formatted_records()}
                    filter={state.register.type_filter()}
                    empty_message={state.register.empty_list_message()}
                    on_filter_change={actions.on_filter_change}
                    on_delete={actions.on_delete}
                    on_edit={actions.on_edit}
                />
                <DonationForm
                    draft={state.register.draft().clone()}
                    mode={state.register.mode()}
                    field_errors={state.field_error_messages()}
                    on_field_change={actions.on_field_change}
                    on_submit={actions.on_submit}
                    on_reset={actions.on_reset}
                />
                <DonationStatsPanel stats={state.register.stats()} />
            </div>
        </main>
    }
}

fn main() {
    let config = load_config();
    if let Err(e) = Logger::init(&config.log_level) {
        gloo::console::error!(format!("Console logging disabled: {:#}", e));
    }
    log::info!("Starting donation register");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
