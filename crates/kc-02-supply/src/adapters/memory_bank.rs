//! # In-Memory Bank
//!
//! `BankKeeper` implementation for tests and the reference host. Balances and
//! supply live behind a `parking_lot::RwLock`.

use crate::domain::token::MODULE_NAME;
use crate::ports::outbound::{BankError, BankKeeper};
use parking_lot::RwLock;
use shared_types::{Address, Coin};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default)]
struct BankState {
    module_accounts: BTreeSet<String>,
    module_balances: BTreeMap<(String, String), u128>,
    account_balances: BTreeMap<(Address, String), u128>,
    supply: BTreeMap<String, u128>,
}

#[derive(Debug, Default)]
pub struct InMemoryBank {
    state: RwLock<BankState>,
}

impl InMemoryBank {
    /// A bank with no module accounts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A bank with the `kalebank` module account registered.
    pub fn new() -> Self {
        let bank = Self::empty();
        bank.register_module_account(MODULE_NAME);
        bank
    }

    pub fn register_module_account(&self, name: &str) {
        self.state.write().module_accounts.insert(name.to_string());
    }

    pub fn module_balance(&self, module: &str, denom: &str) -> u128 {
        self.state
            .read()
            .module_balances
            .get(&(module.to_string(), denom.to_string()))
            .copied()
            .unwrap_or(0)
    }
}

impl BankKeeper for InMemoryBank {
    fn mint_to(&self, module: &str, coin: &Coin) -> Result<(), BankError> {
        let mut state = self.state.write();
        if !state.module_accounts.contains(module) {
            return Err(BankError::ModuleAccountNotFound {
                name: module.to_string(),
            });
        }

        let supply = state.supply.get(&coin.denom).copied().unwrap_or(0);
        let new_supply = supply.checked_add(coin.amount).ok_or(BankError::Overflow)?;
        let key = (module.to_string(), coin.denom.clone());
        let balance = state.module_balances.get(&key).copied().unwrap_or(0);
        let new_balance = balance.checked_add(coin.amount).ok_or(BankError::Overflow)?;

        state.supply.insert(coin.denom.clone(), new_supply);
        state.module_balances.insert(key, new_balance);
        Ok(())
    }

    fn transfer_module_to_account(
        &self,
        module: &str,
        to: &Address,
        coin: &Coin,
    ) -> Result<(), BankError> {
        let mut state = self.state.write();
        if !state.module_accounts.contains(module) {
            return Err(BankError::ModuleAccountNotFound {
                name: module.to_string(),
            });
        }

        let from_key = (module.to_string(), coin.denom.clone());
        let available = state.module_balances.get(&from_key).copied().unwrap_or(0);
        if available < coin.amount {
            return Err(BankError::InsufficientFunds {
                account: module.to_string(),
                needed: coin.amount,
                available,
            });
        }

        let to_key = (to.clone(), coin.denom.clone());
        let balance = state.account_balances.get(&to_key).copied().unwrap_or(0);
        let new_balance = balance.checked_add(coin.amount).ok_or(BankError::Overflow)?;

        state.module_balances.insert(from_key, available - coin.amount);
        state.account_balances.insert(to_key, new_balance);
        Ok(())
    }

    fn balance_of(&self, address: &Address, denom: &str) -> Result<Coin, BankError> {
        let amount = self
            .state
            .read()
            .account_balances
            .get(&(address.clone(), denom.to_string()))
            .copied()
            .unwrap_or(0);
        Ok(Coin::new(denom, amount))
    }

    fn supply_of(&self, denom: &str) -> Result<Coin, BankError> {
        let amount = self.state.read().supply.get(denom).copied().unwrap_or(0);
        Ok(Coin::new(denom, amount))
    }

    fn module_account_exists(&self, name: &str) -> bool {
        self.state.read().module_accounts.contains(name)
    }
}
