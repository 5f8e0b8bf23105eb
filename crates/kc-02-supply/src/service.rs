//! # Supply Controller Service
//!
//! Mint-once issuance of the fixed KALE supply.

use crate::domain::errors::SupplyError;
use crate::domain::params::BankParams;
use crate::domain::token::{total_supply_coin, KALE_DENOM, MODULE_NAME};
use crate::ports::outbound::BankKeeper;
use kc_01_params::ParamStore;
use shared_types::{Address, Coin, DomainEvent, Emitted, ExecutionContext, KeyLayout};
use std::sync::Arc;

/// Store keys owned by the supply controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyKeys {
    pub params: Vec<u8>,
    pub initialized: Vec<u8>,
}

impl Default for SupplyKeys {
    fn default() -> Self {
        Self {
            params: vec![0x10],
            initialized: vec![0x11],
        }
    }
}

impl SupplyKeys {
    pub fn layout(&self) -> KeyLayout {
        KeyLayout::new()
            .with("bank_params", self.params.clone())
            .with("supply_initialized", self.initialized.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyConfig {
    pub keys: SupplyKeys,
    /// Module account that receives minted coins before transfer.
    pub module_account: String,
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Self {
            keys: SupplyKeys::default(),
            module_account: MODULE_NAME.to_string(),
        }
    }
}

pub struct SupplyController {
    bank: Arc<dyn BankKeeper>,
    params: ParamStore<BankParams>,
    config: SupplyConfig,
}

impl SupplyController {
    pub fn new(bank: Arc<dyn BankKeeper>, config: SupplyConfig) -> Self {
        Self {
            bank,
            params: ParamStore::new(config.keys.params.clone()),
            config,
        }
    }

    pub fn params(&self) -> &ParamStore<BankParams> {
        &self.params
    }

    pub fn keys(&self) -> &SupplyKeys {
        &self.config.keys
    }

    pub fn is_initialized(&self, ctx: &ExecutionContext<'_>) -> Result<bool, SupplyError> {
        Ok(ctx.store().exists(&self.config.keys.initialized)?)
    }

    /// Mint the whole fixed supply to `recipient`. Succeeds at most once.
    ///
    /// Checks, in order: already initialized, then `check_initialize`
    /// against the stored params. Nothing is written unless all pass.
    pub fn initialize(
        &self,
        ctx: &mut ExecutionContext<'_>,
        recipient: &str,
    ) -> Result<Emitted<Coin>, SupplyError> {
        if self.is_initialized(ctx)? {
            return Err(SupplyError::AlreadyInitialized);
        }
        let params = self.params.get(ctx);
        let recipient = self.check_initialize(&params, recipient)?;

        let supply = total_supply_coin();
        let minted = self.mint(ctx, &recipient, supply.clone())?;
        ctx.store_mut().put(&self.config.keys.initialized, &[1])?;

        tracing::info!(
            recipient = %recipient,
            amount = %supply,
            "[kc-02] 🌱 KALE supply initialized"
        );

        Ok(Emitted::new(supply.clone(), minted.events).with_event(
            DomainEvent::SupplyInitialized {
                recipient,
                amount: supply,
            },
        ))
    }

    /// Every check `initialize` makes after the already-initialized guard,
    /// evaluated against `params` without touching the store or the bank.
    ///
    /// Genesis import runs this with the snapshot's params before its first
    /// write.
    pub fn check_initialize(
        &self,
        params: &BankParams,
        recipient: &str,
    ) -> Result<Address, SupplyError> {
        if !params.enable_minting {
            return Err(SupplyError::MintingDisabled);
        }
        let recipient = Address::parse(recipient)?;
        self.check_mint(params, &total_supply_coin())?;
        Ok(recipient)
    }

    /// Denom, amount, minting switch, module account and cap checks for
    /// minting `coin` under `params`.
    pub fn check_mint(&self, params: &BankParams, coin: &Coin) -> Result<(), SupplyError> {
        if coin.denom != KALE_DENOM {
            return Err(SupplyError::InvalidDenom {
                expected: KALE_DENOM.to_string(),
                got: coin.denom.clone(),
            });
        }
        if coin.is_zero() {
            return Err(SupplyError::ZeroAmount);
        }
        if !params.enable_minting {
            return Err(SupplyError::MintingDisabled);
        }

        let module = self.config.module_account.as_str();
        if !self.bank.module_account_exists(module) {
            return Err(SupplyError::ModuleAccountMissing {
                name: module.to_string(),
            });
        }

        let cap = params.minting_cap_base_units()?;
        let current = self.bank.supply_of(KALE_DENOM)?.amount;
        let requested = current.saturating_add(coin.amount);
        if requested > cap {
            return Err(SupplyError::MintingCapExceeded { requested, cap });
        }
        Ok(())
    }

    /// Mint `coin` to `to` via the module account.
    ///
    /// All preconditions are checked before the bank is called. The mint and
    /// the transfer are two bank calls; if the transfer fails the minted coins
    /// stay in the module account until the host rolls back the enclosing
    /// transaction, which covers the bank as well as the store.
    pub fn mint(
        &self,
        ctx: &mut ExecutionContext<'_>,
        to: &Address,
        coin: Coin,
    ) -> Result<Emitted<()>, SupplyError> {
        self.check_mint(&self.params.get(ctx), &coin)?;

        let module = self.config.module_account.as_str();
        self.bank.mint_to(module, &coin)?;
        self.bank.transfer_module_to_account(module, to, &coin)?;

        tracing::debug!(recipient = %to, amount = %coin, "[kc-02] Minted");

        Ok(Emitted::quiet(()).with_event(DomainEvent::TokensMinted {
            recipient: to.clone(),
            amount: coin,
        }))
    }

    pub fn balance(&self, address: &Address) -> Result<Coin, SupplyError> {
        Ok(self.bank.balance_of(address, KALE_DENOM)?)
    }

    pub fn total_supply(&self) -> Result<Coin, SupplyError> {
        Ok(self.bank.supply_of(KALE_DENOM)?)
    }
}
