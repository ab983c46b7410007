//! Request and response bodies

pub mod auth;
pub mod claims;
pub mod valuation;
pub mod dashboard;
