//! Request handlers

pub mod auth;
pub mod claims;
pub mod valuation;
pub mod dashboard;
pub mod health;
