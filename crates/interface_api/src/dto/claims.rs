//! Claims DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::Currency;
use domain_claims::{
    Claim, ClaimImage, ClaimStatus, ClaimSubmission, DamageLocation, DamageSeverity,
    VehicleDetails,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VehicleDetailsDto {
    #[validate(length(min = 1, max = 64, message = "must not be empty"))]
    pub make: String,
    #[validate(length(max = 64))]
    #[serde(default)]
    pub model: String,
    #[validate(range(min = 1900, max = 2100, message = "must be a plausible model year"))]
    pub year: i32,
    #[validate(length(max = 128))]
    #[serde(default)]
    pub company: String,
}

impl From<VehicleDetailsDto> for VehicleDetails {
    fn from(dto: VehicleDetailsDto) -> Self {
        VehicleDetails::new(dto.make, dto.model, dto.year, dto.company)
    }
}

impl From<VehicleDetails> for VehicleDetailsDto {
    fn from(details: VehicleDetails) -> Self {
        Self {
            make: details.make,
            model: details.model,
            year: details.year,
            company: details.company,
        }
    }
}

/// Image and description are checked by the claims domain so the claimant
/// sees the same notices as in the browser flow
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitClaimRequest {
    /// Encoded photo, usually a data URL
    pub image: Option<String>,
    pub image_content_type: Option<String>,
    #[serde(default)]
    pub description: String,
    #[validate(nested)]
    pub vehicle_details: VehicleDetailsDto,
}

impl From<SubmitClaimRequest> for ClaimSubmission {
    fn from(request: SubmitClaimRequest) -> Self {
        let image = request.image.map(|data| {
            let image = ClaimImage::new(data);
            match request.image_content_type {
                Some(content_type) => image.with_content_type(content_type),
                None => image,
            }
        });

        ClaimSubmission {
            image,
            description: request.description,
            vehicle_details: request.vehicle_details.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ClaimStatus,
}

#[derive(Debug, Deserialize)]
pub struct SetActiveClaimRequest {
    /// Claim to open, or `null` to close the result screen
    pub claim_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub id: String,
    pub user_id: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_content_type: Option<String>,
    pub description: String,
    pub damage_location: DamageLocation,
    pub damage_severity: DamageSeverity,
    pub estimated_value: Decimal,
    pub currency: Currency,
    /// Estimate formatted for display, e.g. `$182.16`
    pub estimated_value_display: String,
    pub status: ClaimStatus,
    pub vehicle_details: VehicleDetailsDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.to_string(),
            user_id: claim.user_id.to_string(),
            image: claim.image.data,
            image_content_type: claim.image.content_type,
            description: claim.description,
            damage_location: claim.damage_location,
            damage_severity: claim.damage_severity,
            estimated_value: claim.estimated_value.amount(),
            currency: claim.estimated_value.currency(),
            estimated_value_display: claim.estimated_value.to_string(),
            status: claim.status,
            vehicle_details: claim.vehicle_details.into(),
            created_at: claim.created_at,
            updated_at: claim.updated_at,
        }
    }
}
