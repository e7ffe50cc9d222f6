pub mod outlook;
pub mod parameter;
pub mod raw;
pub mod series;
pub mod statistics;
