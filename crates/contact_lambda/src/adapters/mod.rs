pub mod mail_sender;
pub mod parameter_store;
pub mod profile_store;
