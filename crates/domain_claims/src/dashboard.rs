//! Dashboard summary

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::claim::{Claim, ClaimStatus};
use crate::valuation::VALUATION_CURRENCY;

/// Headline figures shown above a user's claim history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSummary {
    pub total_claims: usize,
    pub pending_claims: usize,
    pub approved_claims: usize,
    pub total_estimated_value: Money,
}

impl ClaimSummary {
    /// Summarizes `claims`
    pub fn from_claims(claims: &[Claim]) -> Self {
        let count = |status: ClaimStatus| claims.iter().filter(|c| c.status == status).count();

        Self {
            total_claims: claims.len(),
            pending_claims: count(ClaimStatus::Pending),
            approved_claims: count(ClaimStatus::Approved),
            total_estimated_value: Money::total(
                VALUATION_CURRENCY,
                claims.iter().map(|c| &c.estimated_value),
            ),
        }
    }
}
