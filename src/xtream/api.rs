use std::fmt;

use anyhow::{Context, Result, bail, ensure};
use serde_json::Value;
use tracing::{error, info, instrument};

/// Collections exposed by `player_api.php` that the playlist is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Categories,
    Channels,
}

impl Resource {
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Categories => "get_live_categories",
            Self::Channels => "get_live_streams",
        }
    }

    /// `base_url` already carries the credentials query, so the action is simply appended
    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        format!("{base_url}&action={}", self.action())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Categories => "categories",
            Self::Channels => "channels",
        })
    }
}

/// Fetches a collection as raw JSON records
///
/// Never fails: network errors, non-success statuses and undecodable bodies are
/// logged and come back as an empty list. Callers decide what emptiness means.
#[instrument(skip(client, base_url))]
pub async fn fetch(client: &reqwest::Client, base_url: &str, resource: Resource) -> Vec<Value> {
    match try_fetch(client, base_url, resource).await {
        Ok(records) => {
            info!("Fetched {} {resource}", records.len());
            records
        }
        Err(e) => {
            error!("Error fetching {resource}: {e:#}");
            Vec::new()
        }
    }
}

pub async fn fetch_categories(client: &reqwest::Client, base_url: &str) -> Vec<Value> {
    fetch(client, base_url, Resource::Categories).await
}

pub async fn fetch_channels(client: &reqwest::Client, base_url: &str) -> Vec<Value> {
    fetch(client, base_url, Resource::Channels).await
}

async fn try_fetch(
    client: &reqwest::Client,
    base_url: &str,
    resource: Resource,
) -> Result<Vec<Value>> {
    let res = client
        .get(resource.url(base_url))
        .send()
        .await
        .with_context(|| format!("Requesting {resource}"))?;

    ensure!(
        res.status().is_success(),
        "Upstream answered {} for {resource}",
        res.status()
    );

    let json = res
        .json::<Value>()
        .await
        .with_context(|| format!("Parsing {resource} response"))?;

    let Value::Array(records) = json else {
        bail!("Expected a JSON array of {resource}");
    };

    Ok(records)
}
