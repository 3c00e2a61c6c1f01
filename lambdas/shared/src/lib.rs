pub mod config;
pub mod display;
pub mod env_keys;
