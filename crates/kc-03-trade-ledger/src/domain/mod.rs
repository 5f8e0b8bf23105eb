pub mod entities;
pub mod errors;
pub mod fees;
pub mod keys;
pub mod params;
