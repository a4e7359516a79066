pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod matchers;
pub mod render;
pub mod utils;

pub use config::Config;
pub use core::{
    resolve_video_embed, EmbedDescriptor, Feature, Matcher, Platform, ResolveError,
    VideoResolver,
};
pub use data::{CategoryFilter, DataStore};
