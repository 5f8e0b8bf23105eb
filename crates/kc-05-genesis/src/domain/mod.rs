pub mod errors;
pub mod snapshot;
