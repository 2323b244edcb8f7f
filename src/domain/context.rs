// ============================================================================
// Request Context
// Caller identity and request metadata passed into every operation
// ============================================================================

use super::OwnerId;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    /// Wallet holder
    User,
    /// Operator allowed to call privileged endpoints (teardown)
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RequestContext {
    pub caller: OwnerId,
    pub request_id: Uuid,
    pub role: Role,
}

impl RequestContext {
    pub fn new(caller: OwnerId, role: Role) -> Self {
        Self {
            caller,
            request_id: Uuid::new_v4(),
            role,
        }
    }

    pub fn user(caller: impl Into<String>) -> Self {
        Self::new(OwnerId::new(caller), Role::User)
    }

    pub fn admin(caller: impl Into<String>) -> Self {
        Self::new(OwnerId::new(caller), Role::Admin)
    }

    /// Builder method: Set an explicit request id (e.g. propagated from a gateway)
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
