//! # Param Store
//!
//! Reads and writes one module's params record under a fixed key.

use crate::domain::errors::ParamsError;
use crate::domain::ModuleParams;
use shared_types::codec;
use shared_types::{DomainEvent, Emitted, ExecutionContext, StoreError};
use std::marker::PhantomData;

#[derive(Debug, Clone)]
pub struct ParamStore<P> {
    key: Vec<u8>,
    _params: PhantomData<fn() -> P>,
}

impl<P: ModuleParams> ParamStore<P> {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            _params: PhantomData,
        }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Current params, or the defaults if none were ever written.
    ///
    /// Never fails. A store or decode failure is logged and the defaults are
    /// returned.
    pub fn get(&self, ctx: &ExecutionContext<'_>) -> P {
        match self.load(ctx) {
            Ok(Some(params)) => params,
            Ok(None) => P::default(),
            Err(e) => {
                tracing::warn!(
                    module = P::MODULE,
                    error = %e,
                    "[kc-01] Could not read params, falling back to defaults"
                );
                P::default()
            }
        }
    }

    /// The stored record, without falling back to defaults.
    pub fn load(&self, ctx: &ExecutionContext<'_>) -> Result<Option<P>, StoreError> {
        match ctx.store().get(&self.key)? {
            Some(bytes) => codec::decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Validate and overwrite the params record.
    pub fn set(&self, ctx: &mut ExecutionContext<'_>, params: P) -> Result<Emitted<()>, ParamsError> {
        params.validate().map_err(|source| ParamsError::Invalid {
            module: P::MODULE,
            source,
        })?;

        let bytes = codec::encode(&params)?;
        ctx.store_mut().put(&self.key, &bytes)?;

        tracing::info!(module = P::MODULE, "[kc-01] Params updated");

        Ok(Emitted::quiet(()).with_event(DomainEvent::ParamsUpdated {
            module: P::MODULE.to_string(),
        }))
    }
}
