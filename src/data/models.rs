use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    /// Long-form text for the detail view; falls back to `description`.
    pub details: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub features: Vec<String>,
    pub version: Option<String>,
    pub downloads: Option<u64>,
    pub download_link: Option<String>,
    pub video_link: Option<String>,
}

impl Project {
    pub fn long_description(&self) -> Option<&str> {
        self.details
            .as_deref()
            .filter(|d| !d.is_empty())
            .or_else(|| self.description.as_deref().filter(|d| !d.is_empty()))
    }

    pub fn video_link(&self) -> Option<&str> {
        self.video_link.as_deref().filter(|link| !link.is_empty())
    }

    pub fn download_link(&self) -> Option<&str> {
        self.download_link.as_deref().filter(|link| !link.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub hover_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}
