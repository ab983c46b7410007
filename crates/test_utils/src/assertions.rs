//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_claims::{Claim, ClaimStatus, ClaimSubmission};

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is not negative
pub fn assert_money_non_negative(money: &Money) {
    assert!(
        !money.is_negative(),
        "Expected non-negative money, got {}",
        money
    );
}

/// Asserts that a decimal is within [min, max]
pub fn assert_decimal_in_range(value: Decimal, min: Decimal, max: Decimal) {
    assert!(
        value >= min && value <= max,
        "Value {} is not in range [{}, {}]",
        value,
        min,
        max
    );
}

/// Asserts that claims are ordered newest first
///
/// Claims created at the same instant may appear in either order.
pub fn assert_newest_first(claims: &[Claim]) {
    for pair in claims.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "Claim {} ({}) is listed before newer claim {} ({})",
            pair[0].id,
            pair[0].created_at,
            pair[1].id,
            pair[1].created_at
        );
    }
}

/// Asserts that a freshly submitted claim carries the submission's data
pub fn assert_claim_matches_submission(claim: &Claim, submission: &ClaimSubmission) {
    assert_eq!(claim.description, submission.description, "Description mismatch");
    assert_eq!(claim.vehicle_details, submission.vehicle_details, "Vehicle details mismatch");
    assert_eq!(Some(&claim.image), submission.image.as_ref(), "Image mismatch");
    assert_eq!(claim.status, ClaimStatus::Pending, "New claims must be pending");
    assert_eq!(claim.created_at, claim.updated_at, "New claims must not be updated yet");
}
