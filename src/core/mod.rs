pub mod descriptor;
pub mod resolver;

pub use descriptor::{EmbedDescriptor, Feature, MatchResult, Platform};
pub use resolver::{resolve_video_embed, Matcher, ResolveError, VideoResolver};
