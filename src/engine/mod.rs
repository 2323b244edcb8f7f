// ============================================================================
// Engine Module
// Contains the wallet service and swap settlement logic
// ============================================================================

mod exact;
mod legacy;
mod rate;
mod wallet_service;

pub mod factory;

pub use exact::ExactSettlement;
pub use factory::{create_from_config, WalletServiceBuilder};
pub use legacy::LegacySettlement;
pub use rate::normalize_rate;
pub use wallet_service::WalletService;
