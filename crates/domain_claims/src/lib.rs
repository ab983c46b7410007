//! Damage Claims Domain
//!
//! This crate values vehicle-damage claims and tracks them through review.
//!
//! # Submission Flow
//!
//! ```text
//! photo + description + vehicle details
//!     -> DamageClassifier (location, severity)
//!     -> ClaimValuator (estimate)
//!     -> ClaimStore (newest first, marked active)
//! ```
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending -> Processing -> Approved/Rejected
//! ```

pub mod vehicle;
pub mod damage;
pub mod valuation;
pub mod classifier;
pub mod claim;
pub mod store;
pub mod session;
pub mod service;
pub mod dashboard;
pub mod error;

pub use vehicle::{BrandTier, InsuranceCompany, VehicleDetails, VehicleMake, VehicleProfile};
pub use damage::{DamageAssessment, DamageLocation, DamageSeverity};
pub use valuation::{ClaimValuator, ValuationBreakdown};
pub use classifier::{ClassifierError, DamageClassifier, RandomClassifier};
pub use claim::{Claim, ClaimImage, ClaimStatus, ClaimSubmission};
pub use store::{ClaimStore, InMemoryClaimStore};
pub use session::{AuthError, AuthState, Authenticator, DemoAuthenticator, User};
pub use service::{ClaimService, ServiceConfig};
pub use dashboard::ClaimSummary;
pub use error::{ClaimError, MissingField};
