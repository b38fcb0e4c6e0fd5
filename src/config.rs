use std::collections::BTreeSet;

use clap::ValueEnum;

/// Environment variable holding the Xtream `player_api.php` URL, credentials included
pub const API_URL_ENV: &str = "XOTT_API_URL";

/// Entry always placed at the top of the playlist, before any category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroEntry {
    pub name: String,
    pub logo: String,
    pub url: String,
}

/// Everything that differs between deployments of the playlist generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistConfig {
    /// Shown in the banner
    pub title: String,
    pub credit: String,
    /// Stream proxy; receives `?id=<stream_id>&token=<token>`
    pub proxy_base: String,
    /// Category ids allowed into the playlist, compared as strings
    pub allow_list: BTreeSet<String>,
    pub intro: IntroEntry,
}

/// Built-in deployments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Profile {
    /// filoox-bdix selection served through bazario.space
    #[default]
    Bdix,
    /// Reduced selection served through the mirror proxy
    Mirror,
}

impl Profile {
    #[must_use]
    pub fn config(self) -> PlaylistConfig {
        match self {
            Self::Bdix => PlaylistConfig {
                title: "filoox-bdix Auto Playlist (Selected Categories)".to_string(),
                proxy_base: "http://bazario.space/token/stream.php".to_string(),
                allow_list: allow_list(&[
                    "1715", "1716", "1718", "1732", "1735", "1736", "1737", "1531", "1356",
                ]),
                ..base_config()
            },
            Self::Mirror => PlaylistConfig {
                title: "filoox-bdix Mirror Playlist".to_string(),
                proxy_base: "http://mirror.bazario.space/token/stream.php".to_string(),
                allow_list: allow_list(&["1715", "1716", "1718", "1531"]),
                ..base_config()
            },
        }
    }
}

fn base_config() -> PlaylistConfig {
    PlaylistConfig {
        title: String::new(),
        credit: "@sultanarabi161".to_string(),
        proxy_base: String::new(),
        allow_list: BTreeSet::new(),
        intro: IntroEntry {
            name: "📺 Welcome".to_string(),
            logo: "https://filexo.vercel.app/image/sultanarabi161.jpg".to_string(),
            url: "https://filexo.vercel.app/video/credit_developed_by_sultanarabi161.mp4"
                .to_string(),
        },
    }
}

fn allow_list(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(ToString::to_string).collect()
}
