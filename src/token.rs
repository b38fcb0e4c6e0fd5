use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::writer;

pub const TOKEN_LENGTH: usize = 32;
const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Access token handed to the stream proxy, along with when it was minted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub token: String,
    /// Unix timestamp, seconds
    pub generated_at: i64,
}

impl TokenRecord {
    /// Mints a new random token stamped with the current time
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let token = (0..TOKEN_LENGTH)
            .map(|_| char::from(TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())]))
            .collect();

        Self {
            token,
            generated_at: Utc::now().timestamp(),
        }
    }

    /// Writes the record as pretty JSON, replacing whatever was there before
    ///
    /// # Errors
    /// Errors when the file cannot be written
    #[instrument(skip(self))]
    pub async fn persist(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Serializing token record")?;
        writer::write(path, &json).await?;
        debug!("Token record written");
        Ok(())
    }
}
