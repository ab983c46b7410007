//! Valuation DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_claims::{DamageLocation, DamageSeverity, InsuranceCompany, ValuationBreakdown, VehicleMake};

use super::claims::VehicleDetailsDto;

#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(nested)]
    pub vehicle_details: VehicleDetailsDto,
    pub location: DamageLocation,
    pub severity: DamageSeverity,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub make: VehicleMake,
    pub insurer: InsuranceCompany,
    pub location: DamageLocation,
    pub severity: DamageSeverity,
    pub vehicle_age: i32,
    pub depreciation: Decimal,
    pub base_value: Decimal,
    pub repair_percentage: Decimal,
    pub parts_cost_multiplier: Decimal,
    pub estimate: Decimal,
    pub estimate_display: String,
}

impl From<ValuationBreakdown> for QuoteResponse {
    fn from(breakdown: ValuationBreakdown) -> Self {
        Self {
            make: breakdown.make,
            insurer: breakdown.insurer,
            location: breakdown.assessment.location,
            severity: breakdown.assessment.severity,
            vehicle_age: breakdown.vehicle_age,
            depreciation: breakdown.depreciation,
            base_value: breakdown.base_value.amount(),
            repair_percentage: breakdown.repair_percentage,
            parts_cost_multiplier: breakdown.parts_cost_multiplier,
            estimate: breakdown.estimate.amount(),
            estimate_display: breakdown.estimate.to_string(),
        }
    }
}
