pub mod error;
pub mod geo;
pub mod power;
