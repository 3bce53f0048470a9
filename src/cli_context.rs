use crate::client::GatewayClient;
use crate::config::{OutputFormat, Settings};
use crate::error::GatewayResult;

/// Per-invocation context: resolved settings plus one client built from
/// them. Constructed once in main and passed by reference into every
/// command handler.
pub struct CliContext {
    pub settings: Settings,
    pub client: GatewayClient,
}

impl CliContext {
    pub fn new(settings: Settings) -> GatewayResult<Self> {
        let client = GatewayClient::new(&settings.api_url, &settings.api_key)?;
        Ok(Self { settings, client })
    }

    pub fn output(&self) -> OutputFormat {
        self.settings.output
    }
}
