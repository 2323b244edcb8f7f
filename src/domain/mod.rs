// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod asset;
pub mod config;
pub mod context;
pub mod error;
pub mod settlement;
pub mod wallet;

pub use asset::Asset;
pub use config::{SettlementPolicy, WalletConfig};
pub use context::{RequestContext, Role};
pub use error::{WalletError, WalletResult};
pub use settlement::{Settlement, SettlementRequest};
pub use wallet::{OwnerId, Wallet, WalletId};
