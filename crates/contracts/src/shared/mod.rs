pub mod browse;
pub mod config;
pub mod number_format;
pub mod placeholder;
