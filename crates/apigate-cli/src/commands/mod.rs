//! Command implementations.

pub mod login;
pub mod request;
