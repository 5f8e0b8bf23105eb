pub mod entities;
pub mod errors;
pub mod keys;
pub mod params;
pub mod social;
