// ============================================================================
// Owner Registry Interface
// One-wallet-per-owner enforcement ledger
// ============================================================================

use crate::domain::OwnerId;
use parking_lot::Mutex;
use std::collections::HashSet;

/// Append-only set of owners that have claimed their wallet.
///
/// `try_claim` is the operation issuance relies on: it must check and mark in
/// one atomic step so two concurrent claims for the same owner cannot both
/// succeed.
pub trait OwnerRegistry: Send + Sync {
    fn has_claimed(&self, owner: &OwnerId) -> bool;

    /// Mark `owner` as claimed. Idempotent.
    fn mark_claimed(&self, owner: &OwnerId);

    /// Atomically mark `owner` as claimed. Returns `false` if it already was.
    fn try_claim(&self, owner: &OwnerId) -> bool;
}

#[derive(Debug, Default)]
pub struct InMemoryOwnerRegistry {
    claimed: Mutex<HashSet<OwnerId>>,
}

impl InMemoryOwnerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.claimed.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.lock().is_empty()
    }
}

impl OwnerRegistry for InMemoryOwnerRegistry {
    fn has_claimed(&self, owner: &OwnerId) -> bool {
        self.claimed.lock().contains(owner)
    }

    fn mark_claimed(&self, owner: &OwnerId) {
        self.claimed.lock().insert(owner.clone());
    }

    fn try_claim(&self, owner: &OwnerId) -> bool {
        self.claimed.lock().insert(owner.clone())
    }
}
