// ============================================================================
// Wallet Service
// Core business logic for wallet issuance and swap settlement
// ============================================================================

use crate::domain::{
    Asset, OwnerId, RequestContext, Settlement, SettlementRequest, Wallet, WalletConfig,
    WalletError, WalletId, WalletResult,
};
use crate::engine::factory::create_settlement_strategy;
use crate::interfaces::{EventHandler, OwnerRegistry, PriceOracle, SettlementStrategy, WalletEvent};
use crate::numeric::Balance;
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Wallet ledger with a pluggable settlement strategy.
///
/// Each wallet sits behind its own mutex: a swap holds it from reading the
/// two balances until both are written, so no caller ever observes a debit
/// without its credit. Issuance is serialized per owner by the registry's
/// atomic claim.
pub struct WalletService {
    /// Issuance defaults and swappable slots
    config: WalletConfig,

    /// Pluggable proceeds computation
    strategy: Box<dyn SettlementStrategy>,

    /// One-wallet-per-owner ledger
    registry: Arc<dyn OwnerRegistry>,

    /// Exchange rate source
    oracle: Arc<dyn PriceOracle>,

    /// Wallets by id
    wallets: RwLock<HashMap<WalletId, Arc<Mutex<Wallet>>>>,

    /// Ownership table (owner -> wallet)
    owners: RwLock<HashMap<OwnerId, WalletId>>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    /// Number of settled swaps
    swap_counter: AtomicU64,
}

impl WalletService {
    /// Create a new wallet service
    ///
    /// The settlement strategy follows `config.settlement_policy`.
    pub fn new(
        config: WalletConfig,
        registry: Arc<dyn OwnerRegistry>,
        oracle: Arc<dyn PriceOracle>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            strategy: create_settlement_strategy(config.settlement_policy),
            config,
            registry,
            oracle,
            wallets: RwLock::new(HashMap::new()),
            owners: RwLock::new(HashMap::new()),
            event_handler,
            swap_counter: AtomicU64::new(0),
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Issue a wallet to the caller, once per owner.
    ///
    /// # Errors
    /// `AlreadyRegistered` if the caller has claimed a wallet before, even if
    /// that wallet was later destroyed.
    pub fn issue_wallet(&self, ctx: &RequestContext) -> WalletResult<WalletId> {
        let owner = ctx.caller.clone();

        if !self.registry.try_claim(&owner) {
            tracing::warn!(%owner, request_id = %ctx.request_id, "Wallet already issued");
            self.event_handler.on_event(WalletEvent::RegistrationRejected {
                owner: owner.clone(),
                request_id: ctx.request_id,
                timestamp: Utc::now(),
            });
            return Err(WalletError::AlreadyRegistered(owner));
        }

        let wallet = Wallet::new(owner.clone(), self.config.initial_balance);
        let wallet_id = wallet.id;

        self.wallets
            .write()
            .insert(wallet_id, Arc::new(Mutex::new(wallet)));
        self.owners.write().insert(owner.clone(), wallet_id);

        tracing::info!(%owner, %wallet_id, request_id = %ctx.request_id, "Wallet issued");
        self.event_handler.on_event(WalletEvent::WalletIssued {
            wallet_id,
            owner,
            request_id: ctx.request_id,
            timestamp: Utc::now(),
        });

        Ok(wallet_id)
    }

    /// Swap `amount` (raw magnitude at the source asset's precision) of
    /// `from` into `to`, identified by their wire identifiers.
    ///
    /// # Errors
    /// `UnknownAsset` for unrecognized identifiers, plus everything
    /// [`swap_assets`](Self::swap_assets) returns.
    pub fn swap(
        &self,
        ctx: &RequestContext,
        wallet_id: WalletId,
        from: &str,
        to: &str,
        amount: u64,
    ) -> WalletResult<Settlement> {
        let assets = from
            .parse::<Asset>()
            .and_then(|from| to.parse::<Asset>().map(|to| (from, to)));

        match assets {
            Ok((from, to)) => self.swap_assets(ctx, wallet_id, from, to, amount),
            Err(err) => Err(self.reject_swap(ctx, wallet_id, err)),
        }
    }

    /// Swap between two typed assets.
    ///
    /// Either both balances change or neither does.
    ///
    /// # Errors
    /// - `AssetNotSwappable` / `SameAsset` for an invalid pair
    /// - `WalletNotFound` / `Unauthorized` if the caller does not hold the wallet
    /// - `RateUnavailable` if the oracle has no rate for the pair
    /// - `InsufficientAmount` if `amount` exceeds the source balance
    /// - `ZeroProceeds` if the amount is too small to credit anything
    /// - `Overflow` / `PrecisionMismatch` from the arithmetic
    pub fn swap_assets(
        &self,
        ctx: &RequestContext,
        wallet_id: WalletId,
        from: Asset,
        to: Asset,
        amount: u64,
    ) -> WalletResult<Settlement> {
        match self.settle_swap(ctx, wallet_id, from, to, amount) {
            Ok(settlement) => {
                self.swap_counter.fetch_add(1, Ordering::AcqRel);
                self.event_handler.on_event(WalletEvent::SwapSettled {
                    wallet_id,
                    request_id: ctx.request_id,
                    from,
                    to,
                    debited: settlement.debited,
                    credited: settlement.credited,
                    rate: settlement.normalized_rate,
                    timestamp: Utc::now(),
                });
                Ok(settlement)
            },
            Err(err) => Err(self.reject_swap(ctx, wallet_id, err)),
        }
    }

    /// Remove a wallet. Operators only; the owner's registry claim stays.
    pub fn destroy_wallet(&self, ctx: &RequestContext, wallet_id: WalletId) -> WalletResult<()> {
        if !ctx.is_admin() {
            return Err(WalletError::Unauthorized(ctx.caller.clone()));
        }

        let handle = self
            .wallets
            .write()
            .remove(&wallet_id)
            .ok_or(WalletError::WalletNotFound(wallet_id))?;
        let owner = handle.lock().owner.clone();
        self.owners.write().remove(&owner);

        tracing::info!(%wallet_id, %owner, request_id = %ctx.request_id, "Wallet destroyed");
        self.event_handler.on_event(WalletEvent::WalletDestroyed {
            wallet_id,
            request_id: ctx.request_id,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn balance(&self, wallet_id: WalletId, asset: Asset) -> WalletResult<Balance> {
        Ok(self.wallet_handle(wallet_id)?.lock().balance(asset))
    }

    /// Balance lookup by wire identifier
    pub fn balance_of(&self, wallet_id: WalletId, asset: &str) -> WalletResult<Balance> {
        self.balance(wallet_id, asset.parse()?)
    }

    /// Consistent snapshot of all five balances
    pub fn wallet(&self, wallet_id: WalletId) -> WalletResult<Wallet> {
        Ok(self.wallet_handle(wallet_id)?.lock().clone())
    }

    pub fn wallet_for_owner(&self, owner: &OwnerId) -> Option<WalletId> {
        self.owners.read().get(owner).copied()
    }

    pub fn wallet_count(&self) -> usize {
        self.wallets.read().len()
    }

    /// Number of swaps settled since start
    pub fn swap_count(&self) -> u64 {
        self.swap_counter.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn wallet_handle(&self, wallet_id: WalletId) -> WalletResult<Arc<Mutex<Wallet>>> {
        self.wallets
            .read()
            .get(&wallet_id)
            .cloned()
            .ok_or(WalletError::WalletNotFound(wallet_id))
    }

    fn settle_swap(
        &self,
        ctx: &RequestContext,
        wallet_id: WalletId,
        from: Asset,
        to: Asset,
        amount: u64,
    ) -> WalletResult<Settlement> {
        for asset in [from, to] {
            if !self.config.is_swappable(asset) {
                return Err(WalletError::AssetNotSwappable(asset));
            }
        }
        if from == to {
            return Err(WalletError::SameAsset(from));
        }

        let handle = self.wallet_handle(wallet_id)?;
        let mut wallet = handle.lock();

        if wallet.owner != ctx.caller {
            return Err(WalletError::Unauthorized(ctx.caller.clone()));
        }

        let pair_key = Asset::pair_key(from, to);
        let rate = self
            .oracle
            .latest_rate(&pair_key)
            .ok_or(WalletError::RateUnavailable(pair_key))?;

        let settlement = self.strategy.settle(&SettlementRequest {
            from,
            to,
            from_balance: wallet.balance(from),
            to_balance: wallet.balance(to),
            rate,
            amount,
        })?;
        wallet.apply(&settlement);

        tracing::debug!(
            %wallet_id,
            request_id = %ctx.request_id,
            from_balance = %settlement.from_balance,
            to_balance = %settlement.to_balance,
            "Swap settled"
        );

        Ok(settlement)
    }

    fn reject_swap(
        &self,
        ctx: &RequestContext,
        wallet_id: WalletId,
        err: WalletError,
    ) -> WalletError {
        tracing::warn!(%wallet_id, request_id = %ctx.request_id, error = %err, "Swap rejected");
        self.event_handler.on_event(WalletEvent::SwapRejected {
            wallet_id,
            request_id: ctx.request_id,
            reason: err.to_string(),
            timestamp: Utc::now(),
        });
        err
    }
}
