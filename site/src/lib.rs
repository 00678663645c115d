//! Static host for the storefront bundle.

pub mod config;
pub mod server;

pub use config::ServerConfig;
