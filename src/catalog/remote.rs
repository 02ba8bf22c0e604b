use super::Catalog;
use crate::config::CatalogConfig;
use crate::errors::{LoraStackError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Client for the graph host's object-info API
///
/// The host publishes every node's input schema under `/object_info`; the
/// selectable LoRA names are the option list of the first node that declares a
/// required `lora_name` input.
#[derive(Debug)]
pub struct RemoteCatalog {
    client: Client,
    base_url: String,
}

impl RemoteCatalog {
    /// Create a new catalog client
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let parsed = Url::parse(&config.url)?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(LoraStackError::config(format!(
                "Catalog URL must use http or https: {}",
                config.url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LoraStackError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.url.clone(),
        })
    }

    fn object_info_url(&self) -> String {
        format!("{}/object_info", self.base_url.trim_end_matches('/'))
    }

    /// Fetch the selectable name list from the host
    ///
    /// Every failure mode (transport, non-success status, unexpected shape,
    /// empty list) maps to `CatalogUnavailable`.
    pub async fn fetch_selectable_names(&self) -> Result<Vec<String>> {
        let url = self.object_info_url();
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LoraStackError::catalog(format!("Request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(LoraStackError::catalog(format!(
                "{url} returned {}",
                response.status()
            )));
        }

        let info: Value = response
            .json()
            .await
            .map_err(|e| LoraStackError::catalog(format!("Invalid object-info response: {e}")))?;

        let names = extract_lora_names(&info).ok_or_else(|| {
            LoraStackError::catalog("No node in the object-info response exposes a lora_name input")
        })?;

        if names.is_empty() {
            return Err(LoraStackError::catalog("Host returned an empty LoRA list"));
        }

        Ok(names)
    }

    /// Fetch the catalog, degrading to the `"None"`-only fallback on failure
    pub async fn fetch_or_fallback(&self) -> Catalog {
        match self.fetch_selectable_names().await {
            Ok(names) => Catalog::from_names(names),
            Err(e) => {
                warn!("{e}; falling back to the None-only catalog");
                Catalog::fallback()
            }
        }
    }
}

/// Scan the object-info node map for the first required `lora_name` input and
/// return its option list
fn extract_lora_names(info: &Value) -> Option<Vec<String>> {
    let nodes = info.as_object()?;

    for node in nodes.values() {
        if let Some(options) = node
            .pointer("/input/required/lora_name/0")
            .and_then(Value::as_array)
        {
            return Some(
                options
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            );
        }
    }

    None
}
