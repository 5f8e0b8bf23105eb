//! Genesis configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

/// What to do when a snapshot names a supply recipient but the supply is
/// already initialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SupplyImportPolicy {
    /// Leave the existing supply alone and continue.
    #[default]
    Skip,
    /// Reject the snapshot before any write.
    Fail,
}

impl FromStr for SupplyImportPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(SupplyImportPolicy::Skip),
            "fail" => Ok(SupplyImportPolicy::Fail),
            other => Err(format!("unknown supply import policy: {}", other)),
        }
    }
}

impl fmt::Display for SupplyImportPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplyImportPolicy::Skip => f.write_str("skip"),
            SupplyImportPolicy::Fail => f.write_str("fail"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisConfig {
    /// Include trader profiles in exports.
    pub export_profiles: bool,
    pub supply_import_policy: SupplyImportPolicy,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            export_profiles: true,
            supply_import_policy: SupplyImportPolicy::Skip,
        }
    }
}

impl GenesisConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `KALE_EXPORT_PROFILES`: Include profiles in exports (default: true)
    /// - `KALE_SUPPLY_IMPORT_POLICY`: `skip` or `fail` (default: skip)
    pub fn from_env() -> Self {
        Self {
            export_profiles: env::var("KALE_EXPORT_PROFILES")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),

            supply_import_policy: env::var("KALE_SUPPLY_IMPORT_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }
}
