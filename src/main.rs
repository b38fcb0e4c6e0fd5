#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::cargo)]
#![warn(clippy::perf)]
#![warn(clippy::complexity)]
#![warn(clippy::style)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use config::{API_URL_ENV, Profile};
use pipeline::Outputs;
use tracing::{error, info, warn};
use util::init_http_client;

pub mod config;
pub mod pipeline;
pub mod playlist;
pub mod token;
pub mod util;
pub mod writer;
pub mod xtream;

#[cfg(test)]
mod test_util;

/// Builds a tokenized M3U playlist from an Xtream IPTV panel
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Deployment profile to build for
    #[arg(short, long, value_enum, default_value_t = Profile::Bdix)]
    profile: Profile,

    /// Where the playlist is written
    #[arg(short, long, default_value = "playlist.m3u")]
    output: PathBuf,

    /// Where the token record is written
    #[arg(long, default_value = "token.json")]
    token_file: PathBuf,

    /// Overrides the profile's stream proxy
    #[arg(long)]
    proxy_base: Option<String>,

    /// Overrides the profile's allowed category IDs (repeatable)
    #[arg(short, long = "category")]
    categories: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| {
        warn!("env {API_URL_ENV} not provided, fetches will fail");
        String::new()
    });

    let mut config = args.profile.config();
    if let Some(proxy_base) = args.proxy_base {
        config.proxy_base = proxy_base;
    }
    if !args.categories.is_empty() {
        config.allow_list = args.categories.into_iter().collect();
    }

    info!(
        "Starting playlist generation ({:?} profile, {} categories)",
        args.profile,
        config.allow_list.len()
    );

    let client = init_http_client()?;
    let outputs = Outputs {
        playlist: args.output,
        token: args.token_file,
    };

    match pipeline::run(&client, &base_url, &config, &outputs).await {
        Ok(summary) => {
            info!(
                "Playlist generated with {} channels from selected categories ({} skipped)",
                summary.accepted, summary.skipped
            );
            info!("Token & playlist updated successfully");
            Ok(())
        }
        Err(e) => {
            error!("Playlist generation failed: {e:#}");
            Err(e)
        }
    }
}
