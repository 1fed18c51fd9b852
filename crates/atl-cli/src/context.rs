use anyhow::Context;
use atl_api::ApiClient;
use atl_config::AtelierConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub client: ApiClient,
    pub config: AtelierConfig,
}

impl AppContext {
    pub fn init(config: AtelierConfig) -> anyhow::Result<Self> {
        let client = ApiClient::from_config(&config.api)
            .context("failed to build records API client")?;
        tracing::debug!(base_url = client.base_url(), "records API client ready");
        Ok(Self { client, config })
    }
}
