use std::path::PathBuf;

use anyhow::Result;
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    config::PlaylistConfig,
    playlist,
    token::TokenRecord,
    writer,
    xtream::{fetch_categories, fetch_channels},
};

/// Conditions that stop a run before anything is written
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("No categories fetched")]
    NoCategories,
    #[error("No channels fetched")]
    NoChannels,
}

/// Where a run leaves its results
#[derive(Debug, Clone)]
pub struct Outputs {
    pub playlist: PathBuf,
    pub token: PathBuf,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub categories: usize,
    pub channels: usize,
    pub accepted: usize,
    pub skipped: usize,
    pub token: TokenRecord,
}

/// Fetches, filters and writes one playlist along with its token record
///
/// Both files are left untouched unless categories and channels were fetched.
///
/// # Errors
/// * [`PipelineError`] when upstream returned nothing
/// * If either output file cannot be written
#[instrument(skip(client, base_url, config))]
pub async fn run(
    client: &reqwest::Client,
    base_url: &str,
    config: &PlaylistConfig,
    outputs: &Outputs,
) -> Result<RunSummary> {
    let token = TokenRecord::generate();
    info!("Token generated");

    let categories = fetch_categories(client, base_url).await;
    let channels = fetch_channels(client, base_url).await;

    if categories.is_empty() {
        return Err(PipelineError::NoCategories.into());
    }
    if channels.is_empty() {
        return Err(PipelineError::NoChannels.into());
    }
    info!(
        "Fetched {} categories and {} channels",
        categories.len(),
        channels.len()
    );

    let built = playlist::build(&channels, &categories, &token, config);

    token.persist(&outputs.token).await?;
    writer::write(&outputs.playlist, &built.text).await?;
    info!(
        "Playlist written to {:?} with {} channels",
        outputs.playlist, built.accepted
    );

    Ok(RunSummary {
        categories: categories.len(),
        channels: channels.len(),
        accepted: built.accepted,
        skipped: built.skipped,
        token,
    })
}
