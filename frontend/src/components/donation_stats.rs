use shared::DonationStats;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DonationStatsProps {
    pub stats: DonationStats,
}

/// Totals over every donation; the list filter does not apply here
#[function_component(DonationStatsPanel)]
pub fn donation_stats_panel(props: &DonationStatsProps) -> Html {
    html! {
        <section class="donation-stats-section">
            <h3>{"Donation Stats"}</h3>
            <div class="stat">
                <strong>{"Total Donations: "}</strong>
                {props.stats.total_count.to_string()}
            </div>
            <div class="stat">
                <strong>{"Total Donation Amount: "}</strong>
                {&props.stats.formatted_money_amount}
            </div>
        </section>
    }
}
