//! Domain layer for module params.

pub mod errors;
pub mod rates;
pub mod validators;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::ValidationError;
use std::fmt::Debug;

/// A params record owned by one module.
pub trait ModuleParams:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + Debug + Send + Sync
{
    /// Module name, used in events and logs.
    const MODULE: &'static str;

    /// Check every field. Called before each write.
    fn validate(&self) -> Result<(), ValidationError>;
}
