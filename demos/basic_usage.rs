// ============================================================================
// Basic Usage Example
// ============================================================================

use std::sync::Arc;
use wallet_engine::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Wallet Engine Example ===\n");

    // Oracle publishes 0.500000 for primary_coin -> asset_b
    let oracle = Arc::new(InMemoryPriceOracle::new());
    oracle.publish("primary_coin/asset_b", 500_000, 6);

    let service = match WalletServiceBuilder::new()
        .with_oracle(oracle)
        .build(Arc::new(LoggingEventHandler))
    {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Failed to build wallet service: {}", err);
            return;
        },
    };

    println!("Settlement strategy: {}\n", service.strategy_name());

    // Issue a wallet
    let alice = RequestContext::user("alice");
    let wallet_id = match service.issue_wallet(&alice) {
        Ok(id) => id,
        Err(err) => {
            eprintln!("Issuance failed: {}", err);
            return;
        },
    };
    println!("Issued wallet {} to alice", wallet_id);

    // A second request for the same owner is refused
    if let Err(err) = service.issue_wallet(&alice) {
        println!("Second issuance refused: {}", err);
    }

    print_balances(&service, wallet_id);

    // Swap 0.1000 primary_coin into asset_b
    println!("\n=== Swapping 0.1000 primary_coin -> asset_b ===");
    match service.swap(&alice, wallet_id, "primary_coin", "asset_b", 1_000) {
        Ok(settlement) => println!(
            "  Debited {} at rate {}, credited {}",
            settlement.debited, settlement.normalized_rate, settlement.credited
        ),
        Err(err) => println!("  Swap failed: {}", err),
    }

    // No reverse rate published
    println!("\n=== Swapping asset_b -> primary_coin ===");
    if let Err(err) = service.swap(&alice, wallet_id, "asset_b", "primary_coin", 1_000) {
        println!("  Swap failed: {}", err);
    }

    println!("\n=== Final Balances ===");
    print_balances(&service, wallet_id);
}

fn print_balances(service: &WalletService, wallet_id: WalletId) {
    if let Ok(wallet) = service.wallet(wallet_id) {
        for asset in Asset::ALL {
            println!("  {:<15} {}", asset, wallet.balance(asset));
        }
    }
}
