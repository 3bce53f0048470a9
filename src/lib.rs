// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod resolver;

// Re-export commonly used items
pub use cli_context::CliContext;
pub use client::GatewayClient;
pub use config::{OutputFormat, Settings};
pub use error::{GatewayError, GatewayResult};
pub use models::*;
