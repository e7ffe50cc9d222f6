pub mod calibration;
pub mod seasonal;
