pub mod use_donation_register;

pub use use_donation_register::use_donation_register;
