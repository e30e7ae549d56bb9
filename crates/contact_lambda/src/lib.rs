//! AWS-oriented adapters and handlers for the contact and profile endpoints.
//!
//! This crate owns runtime integration details (API Gateway event decoding,
//! Lambda handlers and the parameter-store/mail-send seams) on top of the
//! domain rules in `contact_core`.

pub mod adapters;
pub mod handlers;
