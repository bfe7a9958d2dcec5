pub mod donation_list;
pub mod donation_stats;
pub mod forms;

pub use donation_list::DonationList;
pub use donation_stats::DonationStatsPanel;
pub use forms::donation_form::DonationForm;
