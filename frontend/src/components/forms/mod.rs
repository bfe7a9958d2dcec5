pub mod donation_form;
