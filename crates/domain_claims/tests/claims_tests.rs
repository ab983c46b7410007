//! Comprehensive tests for domain_claims

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Clock, FixedClock, UserId};

use domain_claims::classifier::mock::{FailingClassifier, FixedClassifier};
use domain_claims::valuation::{base_price, DEPRECIATION_CAP};
use domain_claims::{
    AuthState, ClaimError, ClaimImage, ClaimService, ClaimStatus, ClaimStore, ClaimSubmission,
    ClaimValuator, DamageAssessment, DamageClassifier, DamageLocation, DamageSeverity,
    InMemoryClaimStore, InsuranceCompany, MissingField, RandomClassifier, ServiceConfig, User,
    VehicleDetails, VehicleMake, VehicleProfile,
};

const VALUATION_YEAR: i32 = 2025;

fn all_makes() -> Vec<VehicleMake> {
    let mut makes = VehicleMake::KNOWN.to_vec();
    makes.push(VehicleMake::Other);
    makes
}

fn all_insurers() -> Vec<InsuranceCompany> {
    let mut insurers = InsuranceCompany::KNOWN.to_vec();
    insurers.push(InsuranceCompany::Other);
    insurers
}

// ============================================================================
// Valuation Scenarios
// ============================================================================

mod valuation_tests {
    use super::*;

    #[test]
    fn test_new_toyota_front_minor() {
        let valuator = ClaimValuator::for_year(VALUATION_YEAR);
        let details = VehicleDetails::new("toyota", "Corolla", VALUATION_YEAR, "hdfc ergo");
        let breakdown = valuator.estimate(
            &details,
            &DamageAssessment::new(DamageLocation::Front, DamageSeverity::Minor),
        );

        assert_eq!(breakdown.base_value.amount(), dec!(11000));
        assert_eq!(breakdown.depreciation, dec!(0));
        assert_eq!(breakdown.parts_cost_multiplier, dec!(1.104));
        assert_eq!(breakdown.estimate.amount(), dec!(182.16));
    }

    #[test]
    fn test_ten_year_old_bmw_rear_severe() {
        let valuator = ClaimValuator::for_year(VALUATION_YEAR);
        let details = VehicleDetails::new("BMW", "3 Series", VALUATION_YEAR - 10, "Acme Mutual");
        let breakdown = valuator.estimate(
            &details,
            &DamageAssessment::new(DamageLocation::Rear, DamageSeverity::Severe),
        );

        assert_eq!(breakdown.insurer, InsuranceCompany::Other);
        assert_eq!(breakdown.depreciation, DEPRECIATION_CAP);
        assert_eq!(breakdown.base_value.amount(), dec!(6650));
        assert_eq!(breakdown.parts_cost_multiplier, dec!(1.2528));
        assert_eq!(breakdown.estimate.amount(), dec!(916.4232));
        assert_eq!(breakdown.estimate.to_string(), "$916.42");
    }

    #[test]
    fn test_unmatched_make_and_insurer_use_defaults() {
        let valuator = ClaimValuator::for_year(VALUATION_YEAR);
        let profile = VehicleDetails::new("Tesla", "Model 3", VALUATION_YEAR, "").profile();

        assert_eq!(profile.make, VehicleMake::Other);
        assert_eq!(valuator.base_value(profile.make, profile.year).amount(), dec!(9000));
        assert_eq!(
            valuator.parts_cost_multiplier(InsuranceCompany::parse("nobody"), &profile, DamageSeverity::Minor),
            dec!(0.87)
        );
    }

    #[test]
    fn test_valuator_follows_clock_year() {
        let clock = FixedClock::in_year(2030).unwrap();
        let valuator = ClaimValuator::from_clock(&clock);
        assert_eq!(valuator.valuation_year(), clock.current_year());
        // Toyota, 5 years old: 7% a year
        assert_eq!(
            valuator.base_value(VehicleMake::Toyota, 2025).amount(),
            dec!(7150)
        );
    }
}

// ============================================================================
// Valuation Properties
// ============================================================================

mod valuation_properties {
    use super::*;
    use proptest::prelude::*;

    fn any_make() -> impl Strategy<Value = VehicleMake> {
        prop::sample::select(all_makes())
    }

    fn any_insurer() -> impl Strategy<Value = InsuranceCompany> {
        prop::sample::select(all_insurers())
    }

    fn any_location() -> impl Strategy<Value = DamageLocation> {
        prop::sample::select(DamageLocation::ASSESSABLE.to_vec())
    }

    fn any_severity() -> impl Strategy<Value = DamageSeverity> {
        prop::sample::select(DamageSeverity::ASSESSABLE.to_vec())
    }

    proptest! {
        #[test]
        fn base_value_never_increases_with_age(make in any_make(), age in 0i32..60) {
            let valuator = ClaimValuator::for_year(VALUATION_YEAR);
            let newer = valuator.base_value(make, VALUATION_YEAR - age);
            let older = valuator.base_value(make, VALUATION_YEAR - age - 1);
            prop_assert!(older.amount() <= newer.amount());
        }

        #[test]
        fn base_value_has_floor(make in any_make(), age in 0i32..200) {
            let valuator = ClaimValuator::for_year(VALUATION_YEAR);
            let floor = base_price(make) * (Decimal::ONE - DEPRECIATION_CAP);
            prop_assert!(valuator.base_value(make, VALUATION_YEAR - age).amount() >= floor);
        }

        #[test]
        fn parts_multiplier_is_positive(
            make in any_make(),
            insurer in any_insurer(),
            year in 1900i32..2040,
            severity in any_severity(),
        ) {
            let valuator = ClaimValuator::for_year(VALUATION_YEAR);
            let multiplier = valuator.parts_cost_multiplier(insurer, &VehicleProfile::new(make, year), severity);
            prop_assert!(multiplier > Decimal::ZERO);
        }

        #[test]
        fn estimate_is_non_negative(
            make in any_make(),
            insurer in any_insurer(),
            year in 1900i32..2040,
            location in any_location(),
            severity in any_severity(),
        ) {
            let valuator = ClaimValuator::for_year(VALUATION_YEAR);
            let estimate = valuator.estimate_claim_value(&VehicleProfile::new(make, year), insurer, location, severity);
            prop_assert!(!estimate.is_negative());
        }

        #[test]
        fn valuation_is_idempotent(
            make in any_make(),
            insurer in any_insurer(),
            year in 1900i32..2040,
            location in any_location(),
            severity in any_severity(),
        ) {
            let valuator = ClaimValuator::for_year(VALUATION_YEAR);
            let profile = VehicleProfile::new(make, year);
            prop_assert_eq!(
                valuator.estimate_claim_value(&profile, insurer, location, severity),
                valuator.estimate_claim_value(&profile, insurer, location, severity)
            );
            prop_assert_eq!(
                valuator.parts_cost_multiplier(insurer, &profile, severity),
                valuator.parts_cost_multiplier(insurer, &profile, severity)
            );
        }

        #[test]
        fn make_parsing_ignores_case(index in 0usize..20, upper in any::<bool>()) {
            let make = VehicleMake::KNOWN[index];
            let input = if upper { make.key().to_uppercase() } else { make.key().to_string() };
            prop_assert_eq!(VehicleMake::parse(&input), make);
        }
    }
}

// ============================================================================
// Submission Tests
// ============================================================================

mod submission_tests {
    use super::*;

    fn service(classifier: Arc<dyn DamageClassifier>) -> (ClaimService, InMemoryClaimStore) {
        let store = InMemoryClaimStore::new();
        let service = ClaimService::new(
            Arc::new(store.clone()),
            classifier,
            Arc::new(FixedClock::in_year(VALUATION_YEAR).unwrap()),
            ServiceConfig::default(),
        );
        (service, store)
    }

    fn submission(description: &str) -> ClaimSubmission {
        ClaimSubmission::new(
            ClaimImage::new("data:image/png;base64,iVBORw0KGgo=").with_content_type("image/png"),
            description,
            VehicleDetails::new("hyundai", "i20", 2021, "icici lombard"),
        )
    }

    #[tokio::test]
    async fn test_latest_submission_is_first() {
        let (service, store) = service(Arc::new(RandomClassifier::seeded(3)));
        let auth = AuthState::signed_in(User::demo());

        let mut last = None;
        for n in 0..5 {
            let claim = service
                .submit_claim(&auth, submission(&format!("dent #{n}")))
                .await
                .unwrap();

            let claims = store.list().await.unwrap();
            assert_eq!(claims.len(), n + 1);
            assert_eq!(claims[0].id, claim.id);
            last = Some(claim.id);
        }

        let active = service.active_claim(&User::demo()).await.unwrap().unwrap();
        assert_eq!(Some(active.id), last);
    }

    #[tokio::test]
    async fn test_missing_inputs() {
        let (service, store) = service(Arc::new(RandomClassifier::seeded(3)));
        let auth = AuthState::signed_in(User::demo());

        let mut no_image = submission("scratch");
        no_image.image = None;
        let err = service.submit_claim(&auth, no_image).await.unwrap_err();
        assert_eq!(err.user_message(), "Please upload a photo of the damage.");

        let err = service.submit_claim(&auth, submission("  ")).await.unwrap_err();
        assert!(matches!(err, ClaimError::MissingInput(MissingField::Description)));

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_signed_out_user_cannot_submit() {
        let (service, store) = service(Arc::new(RandomClassifier::seeded(3)));
        let mut auth = AuthState::signed_in(User::demo());
        service.submit_claim(&auth, submission("before")).await.unwrap();

        auth.sign_out();
        let err = service.submit_claim(&auth, submission("after")).await.unwrap_err();
        assert!(matches!(err, ClaimError::Unauthenticated));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_failure_leaves_existing_claims_untouched() {
        let store = InMemoryClaimStore::new();
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::in_year(VALUATION_YEAR).unwrap());
        let auth = AuthState::signed_in(User::demo());

        let working = ClaimService::new(
            Arc::new(store.clone()),
            Arc::new(FixedClassifier::new(DamageLocation::Side, DamageSeverity::Minor)),
            clock.clone(),
            ServiceConfig::default(),
        );
        let first = working.submit_claim(&auth, submission("first")).await.unwrap();

        let broken = ClaimService::new(
            Arc::new(store.clone()),
            Arc::new(FailingClassifier),
            clock,
            ServiceConfig::default(),
        );
        let err = broken.submit_claim(&auth, submission("second")).await.unwrap_err();
        assert!(matches!(err, ClaimError::ProcessingFailure(_)));

        let claims = store.list().await.unwrap();
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].id, first.id);
        assert_eq!(store.active(User::demo().id).await.unwrap().unwrap().id, first.id);
    }

    #[tokio::test]
    async fn test_concurrent_submissions_are_all_recorded() {
        let (service, store) = service(Arc::new(RandomClassifier::seeded(11)));
        let auth = AuthState::signed_in(User::demo());

        let handles: Vec<_> = (0..16)
            .map(|n| {
                let service = service.clone();
                let auth = auth.clone();
                tokio::spawn(async move { service.submit_claim(&auth, submission(&format!("claim {n}"))).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let claims = store.list().await.unwrap();
        assert_eq!(claims.len(), 16);
        let mut ids: Vec<_> = claims.iter().map(|c| c.id).collect();
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[tokio::test(start_paused = true)]
    async fn test_processing_delay_is_observed() {
        let store = InMemoryClaimStore::new();
        let service = ClaimService::new(
            Arc::new(store.clone()),
            Arc::new(FixedClassifier::new(DamageLocation::Front, DamageSeverity::Severe)),
            Arc::new(FixedClock::in_year(VALUATION_YEAR).unwrap()),
            ServiceConfig::with_processing_delay(Duration::from_millis(2000)),
        );
        let auth = AuthState::signed_in(User::demo());

        let started = tokio::time::Instant::now();
        service.submit_claim(&auth, submission("hail damage")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_claims_are_scoped_to_their_owner() {
        let (service, _) = service(Arc::new(RandomClassifier::seeded(5)));
        let demo = User::demo();
        let other = User::new(UserId::new(), "Priya", "priya@example.com");

        service
            .submit_claim(&AuthState::signed_in(demo.clone()), submission("mine"))
            .await
            .unwrap();
        service
            .submit_claim(&AuthState::signed_in(other.clone()), submission("theirs"))
            .await
            .unwrap();

        let mine = service.claims_for(&demo).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].description, "mine");
        assert_eq!(service.dashboard(&other).await.unwrap().total_claims, 1);
    }
}

// ============================================================================
// Review Workflow Tests
// ============================================================================

mod review_tests {
    use super::*;

    #[tokio::test]
    async fn test_rejection_path_and_dashboard() {
        let store = InMemoryClaimStore::new();
        let service = ClaimService::new(
            Arc::new(store),
            Arc::new(FixedClassifier::new(DamageLocation::Front, DamageSeverity::Minor)),
            Arc::new(FixedClock::in_year(VALUATION_YEAR).unwrap()),
            ServiceConfig::default(),
        );
        let user = User::demo();
        let auth = AuthState::signed_in(user.clone());
        let details = VehicleDetails::new("toyota", "Yaris", VALUATION_YEAR, "hdfc ergo");

        let a = service
            .submit_claim(&auth, ClaimSubmission::new(ClaimImage::new("a"), "a", details.clone()))
            .await
            .unwrap();
        let b = service
            .submit_claim(&auth, ClaimSubmission::new(ClaimImage::new("b"), "b", details))
            .await
            .unwrap();

        service.update_status(&user, a.id, ClaimStatus::Processing).await.unwrap();
        service.update_status(&user, a.id, ClaimStatus::Rejected).await.unwrap();

        let err = service
            .update_status(&user, a.id, ClaimStatus::Approved)
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "A rejected claim cannot be marked approved.");

        let summary = service.dashboard(&user).await.unwrap();
        assert_eq!(summary.total_claims, 2);
        assert_eq!(summary.pending_claims, 1);
        assert_eq!(summary.approved_claims, 0);
        assert_eq!(summary.total_estimated_value.amount(), dec!(364.32));

        let active = service.set_active_claim(&user, Some(a.id)).await.unwrap().unwrap();
        assert_eq!(active.id, a.id);
        assert_ne!(active.id, b.id);
        assert!(service.set_active_claim(&user, None).await.unwrap().is_none());
    }
}
