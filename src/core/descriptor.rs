use serde::{Deserialize, Serialize};
use std::fmt;

/// Video hosting platforms the resolver knows how to embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    YouTube,
    Twitch,
    Vimeo,
    Streamable,
    Facebook,
    DailyMotion,
    Tixte,
    DirectVideo,
}

impl Platform {
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Twitch => "Twitch",
            Platform::Vimeo => "Vimeo",
            Platform::Streamable => "Streamable",
            Platform::Facebook => "Facebook",
            Platform::DailyMotion => "DailyMotion",
            Platform::Tixte => "Tixte",
            Platform::DirectVideo => "Direct Video",
        }
    }

    /// Permissions the embedding frame has to grant, fixed per platform.
    pub fn allowed_features(&self) -> Vec<Feature> {
        use Feature::*;
        match self {
            Platform::YouTube => vec![
                Accelerometer,
                Autoplay,
                ClipboardWrite,
                EncryptedMedia,
                Gyroscope,
                PictureInPicture,
                WebShare,
            ],
            Platform::Vimeo => vec![Autoplay, Fullscreen, PictureInPicture, WebShare],
            Platform::Facebook => vec![
                Autoplay,
                ClipboardWrite,
                EncryptedMedia,
                PictureInPicture,
                WebShare,
            ],
            Platform::Twitch
            | Platform::Streamable
            | Platform::DailyMotion
            | Platform::Tixte
            | Platform::DirectVideo => vec![Autoplay, Fullscreen],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Permission-policy tokens used in an iframe `allow` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    Accelerometer,
    Autoplay,
    ClipboardWrite,
    EncryptedMedia,
    Fullscreen,
    Gyroscope,
    PictureInPicture,
    WebShare,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Accelerometer => "accelerometer",
            Feature::Autoplay => "autoplay",
            Feature::ClipboardWrite => "clipboard-write",
            Feature::EncryptedMedia => "encrypted-media",
            Feature::Fullscreen => "fullscreen",
            Feature::Gyroscope => "gyroscope",
            Feature::PictureInPicture => "picture-in-picture",
            Feature::WebShare => "web-share",
        }
    }
}

/// Everything a renderer needs to show a video inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedDescriptor {
    pub platform: Platform,
    pub embed_url: String,
    pub allowed_features: Vec<Feature>,
}

impl EmbedDescriptor {
    pub fn new(platform: Platform, embed_url: impl Into<String>) -> Self {
        Self {
            platform,
            embed_url: embed_url.into(),
            allowed_features: platform.allowed_features(),
        }
    }

    /// Value for the frame's `allow` attribute, e.g. `autoplay; fullscreen`.
    pub fn allow_attribute(&self) -> String {
        self.allowed_features
            .iter()
            .map(Feature::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Output of a single matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// A bare identifier; the matcher builds the embed URL from it.
    Id(String),
    /// The matcher already knows the final embed URL.
    Embed { id: String, embed_url: String },
}

impl MatchResult {
    pub fn id(&self) -> &str {
        match self {
            MatchResult::Id(id) => id,
            MatchResult::Embed { id, .. } => id,
        }
    }
}
