//! Contact-form domain primitives.
//!
//! This crate owns request contracts, field validation, the client tag
//! grammar, parameter naming and outbound message assembly. It intentionally
//! excludes AWS SDK and Lambda runtime concerns; those live in
//! `contact_lambda`.

pub mod client_tag;
pub mod contract;
pub mod error;
pub mod message;
pub mod parameters;
pub mod validation;
