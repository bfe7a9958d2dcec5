//! # Domain Module
//!
//! Business logic for the donation register.
//!
//! ## Module Organization
//!
//! - **donation_register**: The register state machine (draft, records, edit target, filter)
//! - **donation_form**: Draft validation, normalization and error messages
//! - **donation_list**: Record formatting for the list surface
//! - **commands**: Command and outcome types the UI dispatches through
//! - **clock**: Source of "today" for default drafts
//!
//! ## Business Rules
//!
//! - Ids are issued in increasing order and never reused
//! - Money donations carry an amount rounded to cents, others carry a whole quantity
//! - Every submit, add or edit, leaves the register in add mode
//! - Statistics ignore the list filter

pub mod clock;
pub mod commands;
pub mod donation_form;
pub mod donation_list;
pub mod donation_register;

pub use clock::*;
pub use commands::*;
pub use donation_form::*;
pub use donation_list::*;
pub use donation_register::*;
