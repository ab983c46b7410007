//! Claim storage port and in-memory adapter
//!
//! Claims live only for the lifetime of the process. The store keeps them
//! newest-first and remembers, per user, which claim is currently open on
//! the result screen.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

use core_kernel::{ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PortError, UserId};

use crate::claim::{Claim, ClaimStatus};

/// Storage operations the claims domain needs
#[async_trait]
pub trait ClaimStore: DomainPort + HealthCheckable {
    /// Adds a claim at the front of the list and makes it the owner's active claim
    async fn prepend(&self, claim: Claim) -> Result<(), PortError>;

    /// All claims, newest first
    async fn list(&self) -> Result<Vec<Claim>, PortError>;

    /// Claims owned by `user_id`, newest first
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Claim>, PortError>;

    /// Fetches one claim
    async fn get(&self, id: ClaimId) -> Result<Claim, PortError>;

    /// Applies a status transition, returning the updated claim
    ///
    /// Invalid transitions fail with [`PortError::Conflict`].
    async fn update_status(
        &self,
        id: ClaimId,
        status: ClaimStatus,
        at: DateTime<Utc>,
    ) -> Result<Claim, PortError>;

    /// Sets or clears the active claim of `user_id`
    async fn set_active(&self, user_id: UserId, claim_id: Option<ClaimId>) -> Result<(), PortError>;

    /// The active claim of `user_id`, if any
    async fn active(&self, user_id: UserId) -> Result<Option<Claim>, PortError>;
}

#[derive(Debug, Default)]
struct ClaimState {
    claims: VecDeque<Claim>,
    active: HashMap<UserId, ClaimId>,
}

/// In-memory [`ClaimStore`]
///
/// A single lock guards both the list and the active markers, so a prepend
/// and its activation are observed together.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClaimStore {
    state: Arc<RwLock<ClaimState>>,
}

impl InMemoryClaimStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store, oldest first, for tests and demos
    pub async fn with_claims(claims: Vec<Claim>) -> Self {
        let store = Self::new();
        {
            let mut state = store.state.write().await;
            for claim in claims {
                state.claims.push_front(claim);
            }
        }
        store
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.claims.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl DomainPort for InMemoryClaimStore {}

#[async_trait]
impl HealthCheckable for InMemoryClaimStore {
    async fn health_check(&self) -> HealthCheckResult {
        let count = self.len().await;
        HealthCheckResult::healthy("in-memory-claim-store")
            .with_message(format!("{} claims held", count))
    }
}

#[async_trait]
impl ClaimStore for InMemoryClaimStore {
    async fn prepend(&self, claim: Claim) -> Result<(), PortError> {
        let mut state = self.state.write().await;
        if state.claims.iter().any(|c| c.id == claim.id) {
            return Err(PortError::conflict(format!("claim {} already recorded", claim.id)));
        }
        state.active.insert(claim.user_id, claim.id);
        state.claims.push_front(claim);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Claim>, PortError> {
        Ok(self.state.read().await.claims.iter().cloned().collect())
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Claim>, PortError> {
        Ok(self
            .state
            .read()
            .await
            .claims
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: ClaimId) -> Result<Claim, PortError> {
        self.state
            .read()
            .await
            .claims
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Claim", id))
    }

    async fn update_status(
        &self,
        id: ClaimId,
        status: ClaimStatus,
        at: DateTime<Utc>,
    ) -> Result<Claim, PortError> {
        let mut state = self.state.write().await;
        let claim = state
            .claims
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| PortError::not_found("Claim", id))?;

        claim
            .update_status(status, at)
            .map_err(|e| PortError::conflict(e.to_string()))?;
        Ok(claim.clone())
    }

    async fn set_active(&self, user_id: UserId, claim_id: Option<ClaimId>) -> Result<(), PortError> {
        let mut state = self.state.write().await;
        match claim_id {
            Some(id) => {
                let owned = state.claims.iter().any(|c| c.id == id && c.user_id == user_id);
                if !owned {
                    return Err(PortError::not_found("Claim", id));
                }
                state.active.insert(user_id, id);
            }
            None => {
                state.active.remove(&user_id);
            }
        }
        Ok(())
    }

    async fn active(&self, user_id: UserId) -> Result<Option<Claim>, PortError> {
        let state = self.state.read().await;
        Ok(state
            .active
            .get(&user_id)
            .and_then(|id| state.claims.iter().find(|c| c.id == *id))
            .cloned())
    }
}
