// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod owner_registry;
mod price_oracle;
mod settlement_strategy;

pub use event_handler::{
    ChannelEventHandler, EventHandler, LoggingEventHandler, NoOpEventHandler, WalletEvent,
};
pub use owner_registry::{InMemoryOwnerRegistry, OwnerRegistry};
pub use price_oracle::{FixedRateOracle, InMemoryPriceOracle, PriceOracle};
pub use settlement_strategy::SettlementStrategy;
