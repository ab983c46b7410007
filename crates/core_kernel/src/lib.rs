//! Core Kernel - Foundational types for the damage-claims system
//!
//! This crate provides the building blocks used by the claims domain and the
//! HTTP interface:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - An injectable clock
//! - Port error types and the `DomainPort` marker

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency};
pub use temporal::{Clock, SystemClock, FixedClock};
pub use identifiers::{ClaimId, UserId};
pub use ports::{PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable};
