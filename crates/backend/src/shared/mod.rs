pub mod config;
pub mod logger;
pub mod status_registry;
