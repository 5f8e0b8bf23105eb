use kc_01_params::ParamsError;
use shared_types::{Address, Classify, ErrorKind, StoreError, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("trader profile not found: {trader}")]
    NotFound { trader: Address },

    #[error("{trader} cannot follow itself")]
    SelfFollow { trader: Address },

    #[error("{follower} already follows {trader}")]
    AlreadyFollowing { follower: Address, trader: Address },

    #[error("{follower} does not follow {trader}")]
    NotFollowing { follower: Address, trader: Address },

    #[error("amount must be positive")]
    ZeroAmount,

    #[error("stake of {resulting} is below the minimum of {minimum}")]
    BelowMinimumStake { resulting: u128, minimum: u128 },

    #[error("cannot unstake {requested}: only {staked} staked")]
    InsufficientStake { requested: u128, staked: u128 },

    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Classify for ProfileError {
    fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::NotFound { .. } => ErrorKind::NotFound,
            ProfileError::SelfFollow { .. }
            | ProfileError::AlreadyFollowing { .. }
            | ProfileError::NotFollowing { .. }
            | ProfileError::ZeroAmount
            | ProfileError::BelowMinimumStake { .. }
            | ProfileError::InsufficientStake { .. }
            | ProfileError::Overflow { .. }
            | ProfileError::Invalid(_) => ErrorKind::Validation,
            ProfileError::Params(e) => e.kind(),
            ProfileError::Store(e) => e.kind(),
        }
    }
}
