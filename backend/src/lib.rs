//! # Donation Register Backend
//!
//! Contains all non-UI logic for the donation register.
//!
//! The backend is UI-agnostic: the Yew frontend owns a single
//! [`DonationRegister`] and drives it exclusively through
//! [`RegisterCommand`]s, but nothing here depends on a browser.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓  RegisterCommand
//! Domain Layer (register, form validation, list formatting)
//!     ↓
//! Shared models (records, drafts, config)
//! ```
//!
//! There is no storage layer. Records live only as long as the register.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::*;
