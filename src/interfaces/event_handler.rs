// ============================================================================
// Event Handler Interface
// Defines the contract for handling wallet events
// ============================================================================

use crate::domain::{Asset, OwnerId, WalletId};
use crate::numeric::{ExchangeRate, FixedPointDecimal};
use chrono::{DateTime, Utc};
use crossbeam::channel::Sender;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the wallet service
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WalletEvent {
    /// Wallet issued to a first-time owner
    WalletIssued {
        wallet_id: WalletId,
        owner: OwnerId,
        request_id: Uuid,
        timestamp: DateTime<Utc>,
    },

    /// Issuance refused because the owner already claimed a wallet
    RegistrationRejected {
        owner: OwnerId,
        request_id: Uuid,
        timestamp: DateTime<Utc>,
    },

    /// Swap settled, both balances written
    SwapSettled {
        wallet_id: WalletId,
        request_id: Uuid,
        from: Asset,
        to: Asset,
        debited: FixedPointDecimal,
        credited: FixedPointDecimal,
        rate: ExchangeRate,
        timestamp: DateTime<Utc>,
    },

    /// Swap refused, balances untouched
    SwapRejected {
        wallet_id: WalletId,
        request_id: Uuid,
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// Wallet removed by an operator
    WalletDestroyed {
        wallet_id: WalletId,
        request_id: Uuid,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing wallet events
/// Implementations can handle logging, auditing, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a wallet event
    fn on_event(&self, event: WalletEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<WalletEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: WalletEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: WalletEvent) {
        match &event {
            WalletEvent::RegistrationRejected { owner, .. } => {
                tracing::warn!(%owner, "Wallet event: {:?}", event);
            },
            WalletEvent::SwapRejected {
                wallet_id, reason, ..
            } => {
                tracing::warn!(%wallet_id, %reason, "Wallet event: {:?}", event);
            },
            _ => tracing::debug!("Wallet event: {:?}", event),
        }
    }
}

/// Forwards events to a channel consumer (audit trail, projections)
pub struct ChannelEventHandler {
    sender: Sender<WalletEvent>,
}

impl ChannelEventHandler {
    pub fn new(sender: Sender<WalletEvent>) -> Self {
        Self { sender }
    }
}

impl EventHandler for ChannelEventHandler {
    fn on_event(&self, event: WalletEvent) {
        if self.sender.send(event).is_err() {
            tracing::warn!("Event receiver dropped, wallet event discarded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::unbounded;

    fn destroyed() -> WalletEvent {
        WalletEvent::WalletDestroyed {
            wallet_id: WalletId::new(),
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        NoOpEventHandler.on_event(destroyed());
        // Should not panic
    }

    #[test]
    fn test_channel_handler() {
        let (tx, rx) = unbounded();
        let handler = ChannelEventHandler::new(tx);

        handler.on_events(vec![destroyed(), destroyed()]);
        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn test_channel_handler_receiver_dropped() {
        let (tx, rx) = unbounded();
        drop(rx);
        ChannelEventHandler::new(tx).on_event(destroyed());
        // Should not panic
    }
}
