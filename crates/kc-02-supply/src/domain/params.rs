use super::token::DISPLAY_EXPONENT;
use kc_01_params::{parse_bounded_amount, ModuleParams};
use serde::{Deserialize, Serialize};
use shared_types::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankParams {
    pub enable_minting: bool,
    /// Maximum total supply in whole KALE, as a decimal integer string.
    pub minting_cap: String,
}

impl Default for BankParams {
    fn default() -> Self {
        Self {
            enable_minting: true,
            minting_cap: "1000000000".to_string(),
        }
    }
}

impl BankParams {
    /// The cap converted to ukale.
    pub fn minting_cap_base_units(&self) -> Result<u128, ValidationError> {
        let whole = parse_bounded_amount("minting_cap", &self.minting_cap)?;
        whole
            .checked_mul(10u128.pow(DISPLAY_EXPONENT))
            .ok_or_else(|| ValidationError::new("minting_cap", "cap in base units overflows"))
    }
}

impl ModuleParams for BankParams {
    const MODULE: &'static str = "kalebank";

    fn validate(&self) -> Result<(), ValidationError> {
        self.minting_cap_base_units().map(|_| ())
    }
}
