//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating vehicles, insurers and damage
//! assessments, including the messy free text claimants actually type.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money};
use domain_claims::{
    DamageAssessment, DamageLocation, DamageSeverity, InsuranceCompany, VehicleDetails,
    VehicleMake, VehicleProfile,
};

use crate::fixtures::VALUATION_YEAR;

/// Strategy for any make, including `Other`
pub fn make_strategy() -> impl Strategy<Value = VehicleMake> {
    let mut makes = VehicleMake::KNOWN.to_vec();
    makes.push(VehicleMake::Other);
    prop::sample::select(makes)
}

/// Strategy for any insurer, including `Other`
pub fn insurer_strategy() -> impl Strategy<Value = InsuranceCompany> {
    let mut insurers = InsuranceCompany::KNOWN.to_vec();
    insurers.push(InsuranceCompany::Other);
    prop::sample::select(insurers)
}

/// Strategy for locations a classifier can report
pub fn location_strategy() -> impl Strategy<Value = DamageLocation> {
    prop::sample::select(DamageLocation::ASSESSABLE.to_vec())
}

/// Strategy for severities a classifier can report
pub fn severity_strategy() -> impl Strategy<Value = DamageSeverity> {
    prop::sample::select(DamageSeverity::ASSESSABLE.to_vec())
}

/// Strategy for complete assessments
pub fn assessment_strategy() -> impl Strategy<Value = DamageAssessment> {
    (location_strategy(), severity_strategy())
        .prop_map(|(location, severity)| DamageAssessment::new(location, severity))
}

/// Strategy for assessments where either axis may be `Unknown`
pub fn any_assessment_strategy() -> impl Strategy<Value = DamageAssessment> {
    let location = prop_oneof![location_strategy(), Just(DamageLocation::Unknown)];
    let severity = prop_oneof![severity_strategy(), Just(DamageSeverity::Unknown)];
    (location, severity).prop_map(|(location, severity)| DamageAssessment::new(location, severity))
}

/// Strategy for model years up to 40 years before [`VALUATION_YEAR`]
pub fn past_model_year_strategy() -> impl Strategy<Value = i32> {
    (VALUATION_YEAR - 40)..=VALUATION_YEAR
}

/// Strategy for normalized vehicle profiles with past model years
pub fn profile_strategy() -> impl Strategy<Value = VehicleProfile> {
    (make_strategy(), past_model_year_strategy())
        .prop_map(|(make, year)| VehicleProfile::new(make, year))
}

/// Randomizes the case of `text` and pads it with spaces
fn messy_case(text: &'static str) -> impl Strategy<Value = String> {
    (prop::collection::vec(any::<bool>(), text.len()), 0usize..3, 0usize..3).prop_map(
        move |(upper, lead, trail)| {
            let body: String = text
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            format!("{}{}{}", " ".repeat(lead), body, " ".repeat(trail))
        },
    )
}

/// Strategy for a listed make typed with arbitrary case and padding
pub fn typed_make_strategy() -> impl Strategy<Value = (VehicleMake, String)> {
    prop::sample::select(VehicleMake::KNOWN.to_vec())
        .prop_flat_map(|make| messy_case(make.key()).prop_map(move |typed| (make, typed)))
}

/// Strategy for a listed insurer typed with arbitrary case and padding
pub fn typed_insurer_strategy() -> impl Strategy<Value = (InsuranceCompany, String)> {
    prop::sample::select(InsuranceCompany::KNOWN.to_vec())
        .prop_flat_map(|company| messy_case(company.key()).prop_map(move |typed| (company, typed)))
}

/// Strategy for raw vehicle details as a claimant might enter them
pub fn vehicle_details_strategy() -> impl Strategy<Value = VehicleDetails> {
    let make = prop_oneof![
        3 => typed_make_strategy().prop_map(|(_, typed)| typed),
        1 => "[A-Za-z ]{0,12}",
    ];
    let company = prop_oneof![
        3 => typed_insurer_strategy().prop_map(|(_, typed)| typed),
        1 => "[A-Za-z ]{0,16}",
    ];
    (make, "[A-Za-z0-9 ]{0,10}", past_model_year_strategy(), company)
        .prop_map(|(make, model, year, company)| VehicleDetails::new(make, model, year, company))
}

/// Strategy for non-negative USD amounts with cent precision
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2), Currency::USD))
}
