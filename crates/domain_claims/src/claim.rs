//! Claim aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClaimId, Money, UserId};
use crate::damage::{DamageAssessment, DamageLocation, DamageSeverity};
use crate::error::{ClaimError, MissingField};
use crate::vehicle::VehicleDetails;

/// Claim status
///
/// ```text
/// Pending -> Processing -> Approved | Rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Submitted and valued, awaiting review
    Pending,
    /// Picked up by a reviewer
    Processing,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Processing => "processing",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }

    /// Checks if transition is valid
    pub fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (*self, target),
            (Pending, Processing) | (Processing, Approved) | (Processing, Rejected)
        )
    }

    /// True once a decision has been made
    pub fn is_final(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Rejected)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to the uploaded damage photo (typically a data URL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimImage {
    /// Encoded image or a reference to it
    pub data: String,
    /// MIME type, if the uploader supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl ClaimImage {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.data.trim().is_empty()
    }
}

/// What the claimant submits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSubmission {
    pub image: Option<ClaimImage>,
    pub description: String,
    pub vehicle_details: VehicleDetails,
}

impl ClaimSubmission {
    pub fn new(
        image: ClaimImage,
        description: impl Into<String>,
        vehicle_details: VehicleDetails,
    ) -> Self {
        Self {
            image: Some(image),
            description: description.into(),
            vehicle_details,
        }
    }

    /// Checks the submission is complete, returning the image on success
    pub fn validate(&self) -> Result<&ClaimImage, ClaimError> {
        let image = match &self.image {
            Some(image) if !image.is_empty() => image,
            _ => return Err(ClaimError::MissingInput(MissingField::Image)),
        };
        if self.description.trim().is_empty() {
            return Err(ClaimError::MissingInput(MissingField::Description));
        }
        Ok(image)
    }
}

/// A submitted damage claim with its valuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Owning user
    pub user_id: UserId,
    /// Damage photo
    pub image: ClaimImage,
    /// Claimant's description of the damage
    pub description: String,
    pub damage_location: DamageLocation,
    pub damage_severity: DamageSeverity,
    /// Estimated repair value
    pub estimated_value: Money,
    pub status: ClaimStatus,
    pub vehicle_details: VehicleDetails,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a new pending claim
    pub fn new(
        user_id: UserId,
        image: ClaimImage,
        description: String,
        vehicle_details: VehicleDetails,
        assessment: DamageAssessment,
        estimated_value: Money,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ClaimId::new_v7(),
            user_id,
            image,
            description,
            damage_location: assessment.location,
            damage_severity: assessment.severity,
            estimated_value,
            status: ClaimStatus::Pending,
            vehicle_details,
            created_at,
            updated_at: created_at,
        }
    }

    /// The damage assessment the estimate was based on
    pub fn assessment(&self) -> DamageAssessment {
        DamageAssessment::new(self.damage_location, self.damage_severity)
    }

    /// Moves the claim to `status`
    pub fn update_status(&mut self, status: ClaimStatus, at: DateTime<Utc>) -> Result<(), ClaimError> {
        if !self.status.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: status.to_string(),
            });
        }
        self.status = status;
        self.updated_at = at;
        Ok(())
    }
}
