//! Claim service
//!
//! Orchestrates a claim submission: checks the session and the input, waits
//! out the simulated upload delay, classifies the photo, values the damage
//! and records the claim. Storage, classification and time are injected so
//! each can be swapped independently.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use core_kernel::{ClaimId, Clock, PortError};

use crate::claim::{Claim, ClaimStatus, ClaimSubmission};
use crate::classifier::DamageClassifier;
use crate::damage::DamageAssessment;
use crate::dashboard::ClaimSummary;
use crate::error::ClaimError;
use crate::session::{AuthState, User};
use crate::store::ClaimStore;
use crate::valuation::{ClaimValuator, ValuationBreakdown};
use crate::vehicle::VehicleDetails;

/// Tunables for [`ClaimService`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Pause before classification, standing in for the photo upload
    pub processing_delay: Duration,
}

impl ServiceConfig {
    pub fn with_processing_delay(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }
}

/// Application service for damage claims
#[derive(Clone)]
pub struct ClaimService {
    store: Arc<dyn ClaimStore>,
    classifier: Arc<dyn DamageClassifier>,
    clock: Arc<dyn Clock>,
    config: ServiceConfig,
}

impl ClaimService {
    pub fn new(
        store: Arc<dyn ClaimStore>,
        classifier: Arc<dyn DamageClassifier>,
        clock: Arc<dyn Clock>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            store,
            classifier,
            clock,
            config,
        }
    }

    pub fn store(&self) -> &Arc<dyn ClaimStore> {
        &self.store
    }

    pub fn config(&self) -> ServiceConfig {
        self.config
    }

    fn valuator(&self) -> ClaimValuator {
        ClaimValuator::from_clock(self.clock.as_ref())
    }

    /// Submits a new claim for the signed-in user
    ///
    /// This method:
    /// 1. Requires a signed-in user
    /// 2. Validates the photo and description
    /// 3. Waits out the configured processing delay
    /// 4. Classifies the damage and values it
    /// 5. Records the claim as the newest one and marks it active
    ///
    /// Nothing is recorded if any step fails.
    #[instrument(skip_all)]
    pub async fn submit_claim(
        &self,
        auth: &AuthState,
        submission: ClaimSubmission,
    ) -> Result<Claim, ClaimError> {
        let user = auth.user().ok_or(ClaimError::Unauthenticated)?;
        let image = submission.validate()?.clone();

        if !self.config.processing_delay.is_zero() {
            tokio::time::sleep(self.config.processing_delay).await;
        }

        let assessment = self
            .classifier
            .classify(&image, &submission.description)
            .await
            .map_err(|e| {
                warn!(
                    user = %user.id,
                    classifier = self.classifier.name(),
                    error = %e,
                    "Damage classification failed"
                );
                ClaimError::ProcessingFailure(e.to_string())
            })?;

        let breakdown = self.valuator().estimate(&submission.vehicle_details, &assessment);

        let claim = Claim::new(
            user.id,
            image,
            submission.description,
            submission.vehicle_details,
            assessment,
            breakdown.estimate,
            self.clock.now(),
        );

        self.store.prepend(claim.clone()).await.map_err(|e| {
            warn!(user = %user.id, error = %e, "Failed to record claim");
            ClaimError::ProcessingFailure(e.to_string())
        })?;

        info!(
            claim_id = %claim.id,
            user = %user.id,
            location = %claim.damage_location,
            severity = %claim.damage_severity,
            estimate = %claim.estimated_value,
            "Claim submitted"
        );

        Ok(claim)
    }

    /// Claims of `user`, newest first
    pub async fn claims_for(&self, user: &User) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.store.list_for_user(user.id).await?)
    }

    /// One of `user`'s claims
    pub async fn claim(&self, user: &User, id: ClaimId) -> Result<Claim, ClaimError> {
        let claim = self.store.get(id).await.map_err(|e| not_found(e, id))?;
        if claim.user_id != user.id {
            return Err(ClaimError::ClaimNotFound(id.to_string()));
        }
        Ok(claim)
    }

    /// The claim `user` is currently viewing, if any
    pub async fn active_claim(&self, user: &User) -> Result<Option<Claim>, ClaimError> {
        Ok(self.store.active(user.id).await?)
    }

    /// Selects or clears the claim `user` is viewing
    pub async fn set_active_claim(
        &self,
        user: &User,
        id: Option<ClaimId>,
    ) -> Result<Option<Claim>, ClaimError> {
        match id {
            Some(id) => {
                self.store
                    .set_active(user.id, Some(id))
                    .await
                    .map_err(|e| not_found(e, id))?;
            }
            None => self.store.set_active(user.id, None).await?,
        }
        self.active_claim(user).await
    }

    /// Moves one of `user`'s claims along the review path
    pub async fn update_status(
        &self,
        user: &User,
        id: ClaimId,
        status: ClaimStatus,
    ) -> Result<Claim, ClaimError> {
        let current = self.claim(user, id).await?;
        if !current.status.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                from: current.status.to_string(),
                to: status.to_string(),
            });
        }

        let updated = self
            .store
            .update_status(id, status, self.clock.now())
            .await
            .map_err(|e| match e {
                // Lost a race with another update
                PortError::Conflict { .. } => ClaimError::InvalidStatusTransition {
                    from: current.status.to_string(),
                    to: status.to_string(),
                },
                other => not_found(other, id),
            })?;

        info!(claim_id = %id, user = %user.id, status = %status, "Claim status updated");
        Ok(updated)
    }

    /// Values a vehicle and damage without recording anything
    pub fn quote(&self, details: &VehicleDetails, assessment: &DamageAssessment) -> ValuationBreakdown {
        self.valuator().estimate(details, assessment)
    }

    /// Dashboard figures for `user`
    pub async fn dashboard(&self, user: &User) -> Result<ClaimSummary, ClaimError> {
        let claims = self.claims_for(user).await?;
        Ok(ClaimSummary::from_claims(&claims))
    }
}

fn not_found(error: PortError, id: ClaimId) -> ClaimError {
    if error.is_not_found() {
        ClaimError::ClaimNotFound(id.to_string())
    } else {
        ClaimError::Store(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::FixedClock;
    use rust_decimal_macros::dec;

    use crate::claim::ClaimImage;
    use crate::classifier::mock::{FailingClassifier, FixedClassifier};
    use crate::damage::{DamageLocation, DamageSeverity};
    use crate::store::InMemoryClaimStore;

    fn service_with(classifier: Arc<dyn DamageClassifier>) -> (ClaimService, InMemoryClaimStore) {
        let store = InMemoryClaimStore::new();
        let clock = FixedClock::in_year(2025).unwrap();
        let service = ClaimService::new(
            Arc::new(store.clone()),
            classifier,
            Arc::new(clock),
            ServiceConfig::default(),
        );
        (service, store)
    }

    fn toyota_submission() -> ClaimSubmission {
        ClaimSubmission::new(
            ClaimImage::new("data:image/jpeg;base64,/9j/"),
            "Cracked front bumper",
            VehicleDetails::new("toyota", "Corolla", 2025, "hdfc ergo"),
        )
    }

    #[tokio::test]
    async fn test_submit_values_and_records() {
        let (service, store) = service_with(Arc::new(FixedClassifier::new(
            DamageLocation::Front,
            DamageSeverity::Minor,
        )));
        let auth = AuthState::signed_in(User::demo());

        let claim = service.submit_claim(&auth, toyota_submission()).await.unwrap();
        assert_eq!(claim.estimated_value.amount(), dec!(182.16));
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(store.len().await, 1);

        let active = service.active_claim(&User::demo()).await.unwrap().unwrap();
        assert_eq!(active.id, claim.id);
    }

    #[tokio::test]
    async fn test_anonymous_submit_is_rejected() {
        let (service, store) = service_with(Arc::new(FixedClassifier::new(
            DamageLocation::Side,
            DamageSeverity::Minor,
        )));

        let err = service
            .submit_claim(&AuthState::anonymous(), toyota_submission())
            .await
            .unwrap_err();
        assert!(matches!(err, ClaimError::Unauthenticated));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_classifier_failure_records_nothing() {
        let (service, store) = service_with(Arc::new(FailingClassifier));
        let auth = AuthState::signed_in(User::demo());

        let err = service.submit_claim(&auth, toyota_submission()).await.unwrap_err();
        assert!(matches!(err, ClaimError::ProcessingFailure(_)));
        assert_eq!(err.user_message(), "Failed to process claim. Please try again.");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_other_users_claims_are_hidden() {
        let (service, _) = service_with(Arc::new(FixedClassifier::new(
            DamageLocation::Rear,
            DamageSeverity::Moderate,
        )));
        let claim = service
            .submit_claim(&AuthState::signed_in(User::demo()), toyota_submission())
            .await
            .unwrap();

        let stranger = User::new(core_kernel::UserId::new(), "x", "x@example.com");
        let err = service.claim(&stranger, claim.id).await.unwrap_err();
        assert!(matches!(err, ClaimError::ClaimNotFound(_)));
        assert!(service.claims_for(&stranger).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_status_follows_review_path() {
        let (service, _) = service_with(Arc::new(FixedClassifier::new(
            DamageLocation::Rear,
            DamageSeverity::Moderate,
        )));
        let user = User::demo();
        let claim = service
            .submit_claim(&AuthState::signed_in(user.clone()), toyota_submission())
            .await
            .unwrap();

        let err = service
            .update_status(&user, claim.id, ClaimStatus::Approved)
            .await
            .unwrap_err();
        assert!(matches!(err, ClaimError::InvalidStatusTransition { .. }));

        service.update_status(&user, claim.id, ClaimStatus::Processing).await.unwrap();
        let approved = service
            .update_status(&user, claim.id, ClaimStatus::Approved)
            .await
            .unwrap();
        assert_eq!(approved.status, ClaimStatus::Approved);

        let summary = service.dashboard(&user).await.unwrap();
        assert_eq!(summary.approved_claims, 1);
        assert_eq!(summary.pending_claims, 0);
    }

    #[tokio::test]
    async fn test_quote_does_not_record() {
        let (service, store) = service_with(Arc::new(FailingClassifier));
        let breakdown = service.quote(
            &VehicleDetails::new("bmw", "X1", 2015, "Acme Mutual"),
            &DamageAssessment::new(DamageLocation::Rear, DamageSeverity::Severe),
        );
        assert_eq!(breakdown.estimate.amount(), dec!(916.4232));
        assert!(store.is_empty().await);
    }
}
