//! Claim valuation
//!
//! The estimate for a damage claim is
//!
//! ```text
//! estimate = base_value(make, year) * repair_percentage(location, severity)
//!          * parts_cost_multiplier(insurer, make, year)
//! ```
//!
//! where `base_value` is the list price of the make depreciated by age (capped
//! at 65%), `repair_percentage` is the share of vehicle value a repair of that
//! kind typically costs, and the parts multiplier combines brand parts
//! expense, the insurer's usual coverage ratio and an age factor.
//!
//! Every input is a closed enumeration or an integer year and every factor is
//! a non-negative decimal constant, so the calculation is total, exact and
//! never negative.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Clock, Currency, Money};

use crate::damage::{DamageAssessment, DamageLocation, DamageSeverity};
use crate::vehicle::{BrandTier, InsuranceCompany, VehicleDetails, VehicleMake, VehicleProfile};

/// Maximum share of value lost to depreciation
pub const DEPRECIATION_CAP: Decimal = dec!(0.65);

/// Currency of the base price table
pub const VALUATION_CURRENCY: Currency = Currency::USD;

/// List price of a new vehicle of the given make (USD, Indian market)
pub fn base_price(make: VehicleMake) -> Decimal {
    match make {
        VehicleMake::Toyota => dec!(11000),
        VehicleMake::Honda => dec!(10500),
        VehicleMake::Nissan => dec!(9000),
        VehicleMake::Suzuki => dec!(7500),
        VehicleMake::Lexus => dec!(18000),
        VehicleMake::Hyundai => dec!(8500),
        VehicleMake::Kia => dec!(9000),
        VehicleMake::Maruti => dec!(6500),
        VehicleMake::Tata => dec!(7000),
        VehicleMake::Mahindra => dec!(9000),
        VehicleMake::Volkswagen => dec!(10500),
        VehicleMake::Skoda => dec!(10000),
        VehicleMake::Bmw => dec!(19000),
        VehicleMake::Mercedes => dec!(21000),
        VehicleMake::Audi => dec!(19000),
        VehicleMake::Renault => dec!(8500),
        VehicleMake::Ford => dec!(9500),
        VehicleMake::Chevrolet => dec!(9000),
        VehicleMake::Jeep => dec!(13000),
        VehicleMake::Mg => dec!(9000),
        VehicleMake::Other => dec!(9000),
    }
}

/// Yearly depreciation rate of a brand tier
pub fn depreciation_rate(tier: BrandTier) -> Decimal {
    match tier {
        BrandTier::Premium => dec!(0.09),
        BrandTier::Value => dec!(0.06),
        BrandTier::Standard => dec!(0.07),
    }
}

/// Relative cost of replacement parts for a make
pub fn parts_multiplier(make: VehicleMake) -> Decimal {
    match make {
        VehicleMake::Maruti => dec!(0.8),
        VehicleMake::Tata => dec!(0.85),
        VehicleMake::Hyundai => dec!(0.95),
        VehicleMake::Mahindra => dec!(0.9),
        VehicleMake::Toyota => dec!(1.2),
        VehicleMake::Honda => dec!(1.15),
        VehicleMake::Volkswagen => dec!(1.3),
        VehicleMake::Skoda => dec!(1.25),
        VehicleMake::Ford => dec!(1.1),
        VehicleMake::Kia => dec!(1.0),
        VehicleMake::Bmw => dec!(1.8),
        VehicleMake::Mercedes => dec!(1.9),
        VehicleMake::Audi => dec!(1.75),
        VehicleMake::Mg => dec!(1.05),
        VehicleMake::Nissan => dec!(1.1),
        VehicleMake::Renault => dec!(1.05),
        VehicleMake::Jeep => dec!(1.3),
        VehicleMake::Suzuki => dec!(0.9),
        // No dedicated parts row; priced at the default
        VehicleMake::Lexus | VehicleMake::Chevrolet => dec!(1.0),
        VehicleMake::Other => dec!(1.0),
    }
}

/// Share of repair cost an insurer typically covers
pub fn coverage_ratio(insurer: InsuranceCompany) -> Decimal {
    match insurer {
        InsuranceCompany::HdfcErgo => dec!(0.92),
        InsuranceCompany::IciciLombard => dec!(0.88),
        InsuranceCompany::BajajAllianz => dec!(0.90),
        InsuranceCompany::NewIndiaAssurance => dec!(0.85),
        InsuranceCompany::TataAig => dec!(0.89),
        InsuranceCompany::RelianceGeneral => dec!(0.86),
        InsuranceCompany::LibertyGeneral => dec!(0.88),
        InsuranceCompany::OrientalInsurance => dec!(0.84),
        InsuranceCompany::UnitedIndia => dec!(0.83),
        InsuranceCompany::NationalInsurance => dec!(0.85),
        InsuranceCompany::GoDigit => dec!(0.87),
        InsuranceCompany::Acko => dec!(0.86),
        InsuranceCompany::SbiGeneral => dec!(0.85),
        InsuranceCompany::RoyalSundaram => dec!(0.88),
        InsuranceCompany::ShriramGeneral => dec!(0.84),
        InsuranceCompany::Other => dec!(0.87),
    }
}

/// Labour/aftermarket factor by vehicle age
pub fn age_factor(age: i32) -> Decimal {
    if age <= 3 {
        dec!(1.0)
    } else if age <= 7 {
        dec!(0.9)
    } else {
        dec!(0.8)
    }
}

/// Share of vehicle value a repair of this kind costs
///
/// `Unknown` is valued at the cheapest tier of its axis: an unknown location
/// as side damage, an unknown severity as minor.
pub fn repair_percentage(location: DamageLocation, severity: DamageSeverity) -> Decimal {
    let (minor, moderate, severe) = match location {
        // Front repairs touch the most parts and sensors
        DamageLocation::Front => (dec!(0.015), dec!(0.065), dec!(0.13)),
        DamageLocation::Rear => (dec!(0.012), dec!(0.055), dec!(0.11)),
        DamageLocation::Side | DamageLocation::Unknown => (dec!(0.010), dec!(0.045), dec!(0.09)),
    };

    match severity {
        DamageSeverity::Minor | DamageSeverity::Unknown => minor,
        DamageSeverity::Moderate => moderate,
        DamageSeverity::Severe => severe,
    }
}

/// Every factor that went into an estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationBreakdown {
    pub make: VehicleMake,
    pub insurer: InsuranceCompany,
    pub assessment: DamageAssessment,
    /// Vehicle age in years at the valuation year
    pub vehicle_age: i32,
    /// Share of list price lost to depreciation
    pub depreciation: Decimal,
    /// Depreciated vehicle value
    pub base_value: Money,
    pub repair_percentage: Decimal,
    pub parts_cost_multiplier: Decimal,
    /// Final estimate
    pub estimate: Money,
}

/// Claim valuation calculator
///
/// Holds the calendar year that vehicle ages are measured against; all
/// methods are pure functions of their arguments and that year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimValuator {
    valuation_year: i32,
}

impl ClaimValuator {
    /// Creates a valuator measuring vehicle age against `valuation_year`
    pub fn for_year(valuation_year: i32) -> Self {
        Self { valuation_year }
    }

    /// Creates a valuator for the clock's current year
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::for_year(clock.current_year())
    }

    pub fn valuation_year(&self) -> i32 {
        self.valuation_year
    }

    /// Share of value lost to depreciation for `make` built in `year`
    ///
    /// Future model years give a negative age and therefore a negative
    /// depreciation; only the upper bound is capped.
    pub fn depreciation(&self, make: VehicleMake, year: i32) -> Decimal {
        let age = Decimal::from(i64::from(self.valuation_year) - i64::from(year));
        (age * depreciation_rate(make.tier())).min(DEPRECIATION_CAP)
    }

    /// Depreciated value of the vehicle
    ///
    /// Never less than 35% of the make's list price.
    pub fn base_value(&self, make: VehicleMake, year: i32) -> Money {
        let depreciation = self.depreciation(make, year);
        Money::new(base_price(make) * (Decimal::ONE - depreciation), VALUATION_CURRENCY)
    }

    /// Combined brand, insurer and age multiplier
    ///
    /// `severity` is accepted so callers can pass the full assessment, but
    /// the current tables do not vary by severity.
    pub fn parts_cost_multiplier(
        &self,
        insurer: InsuranceCompany,
        vehicle: &VehicleProfile,
        _severity: DamageSeverity,
    ) -> Decimal {
        let age = vehicle.age(self.valuation_year);
        parts_multiplier(vehicle.make) * coverage_ratio(insurer) * age_factor(age)
    }

    /// Estimated claim value for the given vehicle, insurer and damage
    pub fn estimate_claim_value(
        &self,
        vehicle: &VehicleProfile,
        insurer: InsuranceCompany,
        location: DamageLocation,
        severity: DamageSeverity,
    ) -> Money {
        let base_value = self.base_value(vehicle.make, vehicle.year);
        let factor = repair_percentage(location, severity)
            * self.parts_cost_multiplier(insurer, vehicle, severity);
        base_value.multiply(factor)
    }

    /// Values raw claimant input and reports every intermediate factor
    pub fn estimate(
        &self,
        details: &VehicleDetails,
        assessment: &DamageAssessment,
    ) -> ValuationBreakdown {
        let vehicle = details.profile();
        let insurer = details.insurer_key();

        let base_value = self.base_value(vehicle.make, vehicle.year);
        let repair = repair_percentage(assessment.location, assessment.severity);
        let parts = self.parts_cost_multiplier(insurer, &vehicle, assessment.severity);
        let estimate = self.estimate_claim_value(
            &vehicle,
            insurer,
            assessment.location,
            assessment.severity,
        );

        debug!(
            make = %vehicle.make,
            insurer = %insurer,
            location = %assessment.location,
            severity = %assessment.severity,
            base_value = %base_value.amount(),
            estimate = %estimate.amount(),
            "Valued damage claim"
        );

        ValuationBreakdown {
            make: vehicle.make,
            insurer,
            assessment: *assessment,
            vehicle_age: vehicle.age(self.valuation_year),
            depreciation: self.depreciation(vehicle.make, vehicle.year),
            base_value,
            repair_percentage: repair,
            parts_cost_multiplier: parts,
            estimate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2025;

    fn valuator() -> ClaimValuator {
        ClaimValuator::for_year(YEAR)
    }

    #[test]
    fn test_new_toyota_front_minor_hdfc() {
        let vehicle = VehicleProfile::new(VehicleMake::Toyota, YEAR);
        let v = valuator();

        assert_eq!(v.base_value(VehicleMake::Toyota, YEAR).amount(), dec!(11000));
        assert_eq!(
            v.parts_cost_multiplier(InsuranceCompany::HdfcErgo, &vehicle, DamageSeverity::Minor),
            dec!(1.104)
        );
        let estimate = v.estimate_claim_value(
            &vehicle,
            InsuranceCompany::HdfcErgo,
            DamageLocation::Front,
            DamageSeverity::Minor,
        );
        assert_eq!(estimate.amount(), dec!(182.16));
    }

    #[test]
    fn test_ten_year_old_bmw_rear_severe_unknown_insurer() {
        let vehicle = VehicleProfile::new(VehicleMake::Bmw, YEAR - 10);
        let v = valuator();

        assert_eq!(v.depreciation(VehicleMake::Bmw, YEAR - 10), dec!(0.65));
        assert_eq!(v.base_value(VehicleMake::Bmw, YEAR - 10).amount(), dec!(6650));
        assert_eq!(
            v.parts_cost_multiplier(InsuranceCompany::Other, &vehicle, DamageSeverity::Severe),
            dec!(1.2528)
        );
        let estimate = v.estimate_claim_value(
            &vehicle,
            InsuranceCompany::Other,
            DamageLocation::Rear,
            DamageSeverity::Severe,
        );
        assert_eq!(estimate.amount(), dec!(916.4232));
    }

    #[test]
    fn test_depreciation_rates_by_tier() {
        let v = valuator();
        assert_eq!(v.depreciation(VehicleMake::Audi, YEAR - 1), dec!(0.09));
        assert_eq!(v.depreciation(VehicleMake::Maruti, YEAR - 1), dec!(0.06));
        assert_eq!(v.depreciation(VehicleMake::Honda, YEAR - 1), dec!(0.07));
    }

    #[test]
    fn test_future_year_appreciates() {
        let v = valuator();
        let value = v.base_value(VehicleMake::Toyota, YEAR + 1);
        assert_eq!(value.amount(), dec!(11770));
    }

    #[test]
    fn test_age_factor_bands() {
        assert_eq!(age_factor(-1), dec!(1.0));
        assert_eq!(age_factor(3), dec!(1.0));
        assert_eq!(age_factor(4), dec!(0.9));
        assert_eq!(age_factor(7), dec!(0.9));
        assert_eq!(age_factor(8), dec!(0.8));
    }

    #[test]
    fn test_unknown_axes_use_cheapest_tier() {
        assert_eq!(
            repair_percentage(DamageLocation::Unknown, DamageSeverity::Severe),
            repair_percentage(DamageLocation::Side, DamageSeverity::Severe)
        );
        assert_eq!(
            repair_percentage(DamageLocation::Front, DamageSeverity::Unknown),
            repair_percentage(DamageLocation::Front, DamageSeverity::Minor)
        );
        assert_eq!(
            repair_percentage(DamageLocation::Unknown, DamageSeverity::Unknown),
            dec!(0.010)
        );
    }

    #[test]
    fn test_lexus_uses_default_parts_multiplier() {
        assert_eq!(parts_multiplier(VehicleMake::Lexus), dec!(1.0));
        assert_eq!(base_price(VehicleMake::Lexus), dec!(18000));
    }

    #[test]
    fn test_breakdown_from_raw_details() {
        let details = VehicleDetails::new("Toyota", "Corolla", YEAR, "HDFC Ergo");
        let assessment = DamageAssessment::new(DamageLocation::Front, DamageSeverity::Minor);

        let breakdown = valuator().estimate(&details, &assessment);

        assert_eq!(breakdown.make, VehicleMake::Toyota);
        assert_eq!(breakdown.insurer, InsuranceCompany::HdfcErgo);
        assert_eq!(breakdown.vehicle_age, 0);
        assert_eq!(breakdown.repair_percentage, dec!(0.015));
        assert_eq!(breakdown.estimate.amount(), dec!(182.16));
    }
}
