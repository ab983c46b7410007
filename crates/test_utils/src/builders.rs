//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use core_kernel::{Clock, FixedClock, Money, UserId};
use domain_claims::classifier::mock::FixedClassifier;
use domain_claims::{
    Claim, ClaimImage, ClaimService, ClaimStatus, ClaimSubmission, ClaimValuator,
    DamageAssessment, DamageClassifier, DamageLocation, DamageSeverity, InMemoryClaimStore,
    ServiceConfig, VehicleDetails,
};

use crate::fixtures::{ClockFixtures, ImageFixtures, TextFixtures, VehicleFixtures, VALUATION_YEAR};

/// Builder for constructing stored claims without going through the service
pub struct TestClaimBuilder {
    user_id: UserId,
    image: ClaimImage,
    description: String,
    vehicle_details: VehicleDetails,
    assessment: DamageAssessment,
    estimated_value: Option<Money>,
    status: ClaimStatus,
    created_at: DateTime<Utc>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            user_id: UserId::new(),
            image: ImageFixtures::jpeg(),
            description: TextFixtures::description().to_string(),
            vehicle_details: VehicleFixtures::new_toyota(),
            assessment: DamageAssessment::new(DamageLocation::Front, DamageSeverity::Minor),
            estimated_value: None,
            status: ClaimStatus::Pending,
            created_at: ClockFixtures::valuation_clock().now(),
        }
    }

    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_vehicle(mut self, vehicle_details: VehicleDetails) -> Self {
        self.vehicle_details = vehicle_details;
        self
    }

    pub fn with_damage(mut self, location: DamageLocation, severity: DamageSeverity) -> Self {
        self.assessment = DamageAssessment::new(location, severity);
        self
    }

    /// Overrides the estimate instead of valuing the vehicle
    pub fn with_estimated_value(mut self, estimated_value: Money) -> Self {
        self.estimated_value = Some(estimated_value);
        self
    }

    /// Sets the status directly, bypassing the review path
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds the claim, valuing it for [`VALUATION_YEAR`] unless an estimate was given
    pub fn build(self) -> Claim {
        let estimated_value = self.estimated_value.unwrap_or_else(|| {
            ClaimValuator::for_year(VALUATION_YEAR)
                .estimate(&self.vehicle_details, &self.assessment)
                .estimate
        });

        let mut claim = Claim::new(
            self.user_id,
            self.image,
            self.description,
            self.vehicle_details,
            self.assessment,
            estimated_value,
            self.created_at,
        );
        claim.status = self.status;
        claim
    }
}

/// Builder for claim submissions
pub struct SubmissionBuilder {
    image: Option<ClaimImage>,
    description: String,
    vehicle_details: VehicleDetails,
}

impl Default for SubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionBuilder {
    pub fn new() -> Self {
        Self {
            image: Some(ImageFixtures::jpeg()),
            description: TextFixtures::description().to_string(),
            vehicle_details: VehicleFixtures::new_toyota(),
        }
    }

    pub fn with_image(mut self, image: ClaimImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn without_image(mut self) -> Self {
        self.image = None;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_vehicle(mut self, vehicle_details: VehicleDetails) -> Self {
        self.vehicle_details = vehicle_details;
        self
    }

    pub fn build(self) -> ClaimSubmission {
        ClaimSubmission {
            image: self.image,
            description: self.description,
            vehicle_details: self.vehicle_details,
        }
    }
}

/// A claim service wired to an in-memory store and a fixed clock
pub struct ServiceHarness {
    pub service: ClaimService,
    pub store: InMemoryClaimStore,
    pub clock: FixedClock,
}

/// Builder for [`ServiceHarness`]
pub struct ServiceHarnessBuilder {
    classifier: Arc<dyn DamageClassifier>,
    clock: FixedClock,
    processing_delay: Duration,
    seed_claims: Vec<Claim>,
}

impl Default for ServiceHarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceHarnessBuilder {
    /// Front/minor classifier, clock in [`VALUATION_YEAR`], no delay
    pub fn new() -> Self {
        Self {
            classifier: Arc::new(FixedClassifier::new(DamageLocation::Front, DamageSeverity::Minor)),
            clock: ClockFixtures::valuation_clock(),
            processing_delay: Duration::ZERO,
            seed_claims: Vec::new(),
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn DamageClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_damage(self, location: DamageLocation, severity: DamageSeverity) -> Self {
        self.with_classifier(Arc::new(FixedClassifier::new(location, severity)))
    }

    pub fn with_clock(mut self, clock: FixedClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Pre-populates the store, oldest first
    pub fn with_claims(mut self, claims: Vec<Claim>) -> Self {
        self.seed_claims = claims;
        self
    }

    pub async fn build(self) -> ServiceHarness {
        let store = InMemoryClaimStore::with_claims(self.seed_claims).await;
        let service = ClaimService::new(
            Arc::new(store.clone()),
            self.classifier,
            Arc::new(self.clock.clone()),
            ServiceConfig::with_processing_delay(self.processing_delay),
        );

        ServiceHarness {
            service,
            store,
            clock: self.clock,
        }
    }
}

impl ServiceHarness {
    pub fn builder() -> ServiceHarnessBuilder {
        ServiceHarnessBuilder::new()
    }
}
