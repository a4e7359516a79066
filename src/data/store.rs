use crate::data::{Category, Organization, Project, SocialLink};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error, info};
use url::Url;

pub const ORGANIZATIONS_FILE: &str = "organizations.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const SOCIAL_LINKS_FILE: &str = "social-links.json";
pub const CATEGORIES_FILE: &str = "categories.json";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid base URL {0}: {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the JSON datasets live.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn describe(&self) -> String;
    async fn fetch(&self, name: &str) -> Result<String, DataError>;
}

pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DataSource for DirectorySource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch(&self, name: &str) -> Result<String, DataError> {
        let path = self.root.join(name);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| DataError::Io {
                path: path.display().to_string(),
                source,
            })
    }
}

pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSource {
    pub fn new(base: &str) -> Result<Self, DataError> {
        // A base without a trailing slash would have its last segment replaced by join()
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        let base = Url::parse(&normalized)
            .map_err(|e| DataError::InvalidUrl(base.to_string(), e))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.base.to_string()
    }

    async fn fetch(&self, name: &str) -> Result<String, DataError> {
        let url = self
            .base
            .join(name)
            .map_err(|e| DataError::InvalidUrl(name.to_string(), e))?;
        let http_err = |source| DataError::Http {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(http_err)?;
        debug!("Fetched {}: HTTP {}", url, response.status());

        response.text().await.map_err(|source| DataError::Http {
            url: url.to_string(),
            source,
        })
    }
}

/// All records shown on the showcase page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataStore {
    pub organizations: Vec<Organization>,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
    pub categories: Vec<Category>,
}

impl DataStore {
    /// Loads every dataset, falling back to an empty store if any of them
    /// cannot be fetched or parsed.
    pub async fn load(source: &dyn DataSource) -> Self {
        match Self::try_load(source).await {
            Ok(store) => store,
            Err(e) => {
                error!("Error loading data from {}: {}", source.describe(), e);
                Self::default()
            }
        }
    }

    pub async fn try_load(source: &dyn DataSource) -> Result<Self, DataError> {
        info!("Loading showcase data from {}", source.describe());

        let (organizations, projects, social_links, categories) = futures::try_join!(
            source.fetch(ORGANIZATIONS_FILE),
            source.fetch(PROJECTS_FILE),
            source.fetch(SOCIAL_LINKS_FILE),
            source.fetch(CATEGORIES_FILE),
        )?;

        let store = Self {
            organizations: parse(ORGANIZATIONS_FILE, &organizations)?,
            projects: parse(PROJECTS_FILE, &projects)?,
            social_links: parse(SOCIAL_LINKS_FILE, &social_links)?,
            categories: parse(CATEGORIES_FILE, &categories)?,
        };

        info!(
            "Data loaded: {} organizations, {} projects, {} social links, {} categories",
            store.organizations.len(),
            store.projects.len(),
            store.social_links.len(),
            store.categories.len()
        );

        Ok(store)
    }

    pub fn project(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

fn parse<T: DeserializeOwned>(name: &str, text: &str) -> Result<Vec<T>, DataError> {
    serde_json::from_str(text).map_err(|source| DataError::Parse {
        name: name.to_string(),
        source,
    })
}
