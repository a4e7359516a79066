use crate::config::Config;
use crate::core::{ResolveError, VideoResolver};
use crate::data::{CategoryFilter, DataSource, DataStore, DirectorySource, HttpSource};
use crate::render::{project_detail, render_video_embed};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "showcase-embed")]
#[command(about = "Resolve video embeds and browse portfolio showcase data")]
#[command(version)]
pub struct Cli {
    /// Config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Hostname of the page embedding the videos
    #[arg(long, global = true)]
    pub embed_host: Option<String>,

    /// Directory holding the JSON datasets
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a video link to its embed descriptor
    Resolve {
        #[arg(value_name = "URL")]
        url: String,

        /// Print the descriptor as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the HTML embed fragment for a video link
    Embed {
        #[arg(value_name = "URL")]
        url: String,
    },

    /// List projects, optionally filtered by category
    Projects {
        /// Category to include (repeatable)
        #[arg(short = 'C', long = "category")]
        categories: Vec<String>,
    },

    /// Print the detail view of a project
    Show {
        #[arg(value_name = "ID")]
        id: u64,
    },
}

impl Cli {
    /// Config file values with command-line overrides applied.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(host) = &self.embed_host {
            config.embed_host = host.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
            config.data_url = None;
        }

        Ok(config)
    }

    pub async fn run(&self) -> Result<()> {
        let config = self.config()?;
        debug!("Using config: {:?}", config);

        let resolver = VideoResolver::with_default_matchers(&config.embed_host);

        match &self.command {
            Command::Resolve { url, json } => match resolver.try_resolve(Some(url.as_str())) {
                Ok(descriptor) if *json => {
                    println!("{}", serde_json::to_string_pretty(&descriptor)?);
                }
                Ok(descriptor) => {
                    println!("Platform: {}", descriptor.platform);
                    println!("Embed URL: {}", descriptor.embed_url);
                    println!("Allow: {}", descriptor.allow_attribute());
                }
                Err(ResolveError::UnrecognizedFormat(_)) => {
                    println!("Video format not supported: {}", url);
                    println!(
                        "Supported: {}",
                        VideoResolver::supported_platforms().join(", ")
                    );
                }
                Err(e) => return Err(e.into()),
            },
            Command::Embed { url } => {
                println!("{}", render_video_embed(resolver.resolve(Some(url.as_str())).as_ref()));
            }
            Command::Projects { categories } => {
                let store = load_store(&config).await?;
                let filter: CategoryFilter = categories.iter().collect();

                let projects = filter.apply(&store.projects);
                println!("Projects ({} of {}):", projects.len(), store.projects.len());
                for project in projects {
                    let video = match resolver.resolve(project.video_link()) {
                        Some(descriptor) => descriptor.platform.to_string(),
                        None if project.video_link().is_some() => "unsupported".to_string(),
                        None => "-".to_string(),
                    };
                    println!("  {}: {} [video: {}]", project.id, project.title, video);
                }
            }
            Command::Show { id } => {
                let store = load_store(&config).await?;
                let project = store
                    .project(*id)
                    .ok_or_else(|| anyhow::anyhow!("No project with id {}", id))?;
                println!("{}", project_detail(project, &resolver));
            }
        }

        Ok(())
    }
}

async fn load_store(config: &Config) -> Result<DataStore> {
    let source: Box<dyn DataSource> = match &config.data_url {
        Some(url) => Box::new(HttpSource::new(url)?),
        None => Box::new(DirectorySource::new(&config.data_dir)),
    };

    Ok(DataStore::load(source.as_ref()).await)
}
