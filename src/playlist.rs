use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, FixedOffset};
use indoc::formatdoc;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::{
    config::PlaylistConfig,
    token::TokenRecord,
    util::non_empty_trimmed,
    xtream::{Category, Channel},
};

/// Asia/Dhaka, which has no DST
const BD_UTC_OFFSET_SECS: i32 = 6 * 3600;
const INTRO_GROUP: &str = "Intro";

/// Rendered playlist along with how the fetched channels were classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPlaylist {
    pub text: String,
    pub accepted: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Malformed,
    NotAllowed,
    UnknownCategory,
    MissingName,
    MissingStreamId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    logo: String,
    stream_id: String,
}

/// Builds the M3U playlist out of raw `get_live_streams` / `get_live_categories` records
///
/// Every channel is either accepted or skipped, so `accepted + skipped == channels.len()`.
/// Groups come out sorted by category name, channels keep their fetch order inside a group.
#[instrument(skip_all, fields(channels = channels.len(), categories = categories.len()))]
pub fn build(
    channels: &[Value],
    categories: &[Value],
    token: &TokenRecord,
    config: &PlaylistConfig,
) -> BuiltPlaylist {
    let index = category_index(categories);

    let mut groups: BTreeMap<&str, Vec<Entry>> = BTreeMap::new();
    let mut skipped = 0;
    for (position, record) in channels.iter().enumerate() {
        match classify(record, &index, &config.allow_list) {
            Ok((category_name, entry)) => groups.entry(category_name).or_default().push(entry),
            Err(reason) => {
                debug!("Skipping channel #{position}: {reason:?}");
                skipped += 1;
            }
        }
    }
    let accepted = channels.len() - skipped;
    info!(
        "Processed {} channels, selected {accepted}, skipped {skipped}",
        channels.len()
    );

    let mut lines = vec![banner(token, config, accepted, skipped)];
    lines.push(extinf(&config.intro.name, &config.intro.logo, INTRO_GROUP));
    lines.push(config.intro.url.clone());

    for (category_name, entries) in &groups {
        lines.push(format!("# 🟢 {category_name} ({} channels)", entries.len()));
        for entry in entries {
            lines.push(extinf(&entry.name, &entry.logo, category_name));
            lines.push(format!(
                "{}?id={}&token={}",
                config.proxy_base, entry.stream_id, token.token
            ));
        }
    }

    BuiltPlaylist {
        text: lines.join("\n"),
        accepted,
        skipped,
    }
}

/// `category_id` -> `category_name`, later duplicates win
fn category_index(categories: &[Value]) -> HashMap<String, String> {
    let mut index = HashMap::with_capacity(categories.len());
    for record in categories {
        match Category::deserialize(record) {
            Ok(category) => {
                index.insert(category.category_id, category.category_name);
            }
            Err(e) => warn!("Ignoring unreadable category record: {e}"),
        }
    }
    index
}

fn classify<'a>(
    record: &Value,
    index: &'a HashMap<String, String>,
    allow_list: &BTreeSet<String>,
) -> Result<(&'a str, Entry), Rejection> {
    let channel = Channel::deserialize(record).map_err(|_| Rejection::Malformed)?;

    let category_id = channel.category_id.as_deref().unwrap_or_default();
    if !allow_list.contains(category_id) {
        return Err(Rejection::NotAllowed);
    }
    let category_name = index
        .get(category_id)
        .map(String::as_str)
        .ok_or(Rejection::UnknownCategory)?;

    let name = non_empty_trimmed(channel.name.as_deref()).ok_or(Rejection::MissingName)?;
    let stream_id =
        non_empty_trimmed(channel.stream_id.as_deref()).ok_or(Rejection::MissingStreamId)?;

    Ok((
        category_name,
        Entry {
            name: name.to_string(),
            logo: channel.stream_icon.as_deref().map(str::trim).unwrap_or_default().to_string(),
            stream_id: stream_id.to_string(),
        },
    ))
}

fn extinf(name: &str, logo: &str, group: &str) -> String {
    format!(r#"#EXTINF:-1 tvg-id="" tvg-name="{name}" tvg-logo="{logo}" group-title="{group}",{name}"#)
}

fn banner(token: &TokenRecord, config: &PlaylistConfig, accepted: usize, skipped: usize) -> String {
    // Should never panic, the offset is well within a day
    let bd = FixedOffset::east_opt(BD_UTC_OFFSET_SECS).unwrap();
    let updated = DateTime::from_timestamp(token.generated_at, 0)
        .unwrap_or_default()
        .with_timezone(&bd)
        .format("%Y-%m-%d %H:%M:%S");

    formatdoc!(
        "
        #EXTM3U
        # 📦 {title}
        # ⏰ BD Updated time: {updated}
        # 🔄 Updated hourly — Total channels: {accepted}
        # 🎯 Selected categories: {selected}
        # 📊 Skipped: {skipped}
        # 🔁 Each stream link uses token validation
        # 🌐 @ Credit: {credit}",
        title = config.title,
        updated = updated,
        accepted = accepted,
        selected = config.allow_list.len(),
        skipped = skipped,
        credit = config.credit,
    )
}
