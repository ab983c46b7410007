//! Dashboard DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_claims::ClaimSummary;

use super::claims::ClaimResponse;

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_claims: usize,
    pub pending_claims: usize,
    pub approved_claims: usize,
    pub total_estimated_value: Decimal,
    pub total_estimated_value_display: String,
    /// Most recent claims, newest first
    pub recent_claims: Vec<ClaimResponse>,
}

impl DashboardResponse {
    pub fn new(summary: ClaimSummary, recent_claims: Vec<ClaimResponse>) -> Self {
        Self {
            total_claims: summary.total_claims,
            pending_claims: summary.pending_claims,
            approved_claims: summary.approved_claims,
            total_estimated_value: summary.total_estimated_value.amount(),
            total_estimated_value_display: summary.total_estimated_value.to_string(),
            recent_claims,
        }
    }
}
