use crate::core::{EmbedDescriptor, MatchResult, Platform};
use crate::matchers::{
    DailymotionMatcher, DirectVideoMatcher, FacebookMatcher, StreamableMatcher, TixteMatcher,
    TwitchMatcher, VimeoMatcher, YouTubeMatcher,
};
use crate::utils::ensure_absolute_url;
use thiserror::Error;
use tracing::debug;

/// Recognizes one hosting platform's URL shapes.
///
/// Matchers receive the already-normalized URL and must never panic,
/// whatever the input looks like.
pub trait Matcher: Send + Sync {
    fn platform(&self) -> Platform;

    fn extract(&self, url: &str) -> Option<MatchResult>;

    /// Builds the frame URL for an identifier returned as [`MatchResult::Id`].
    /// `url` is the normalized input.
    fn embed_url(&self, id: &str, url: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no video link provided")]
    NoLinkProvided,

    #[error("unrecognized video format: {0}")]
    UnrecognizedFormat(String),
}

/// Ordered list of matchers; the first one that matches wins.
pub struct VideoResolver {
    pub matchers: Vec<Box<dyn Matcher>>,
}

impl VideoResolver {
    /// Empty resolver. Register matchers in priority order.
    pub fn new() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Resolver with every built-in platform registered. `embed_host` is the
    /// hostname of the page doing the embedding, which Twitch requires as `parent`.
    pub fn with_default_matchers(embed_host: &str) -> Self {
        let mut resolver = Self::new();
        resolver.register_matcher(Box::new(YouTubeMatcher::new()));
        resolver.register_matcher(Box::new(TwitchMatcher::new(embed_host)));
        resolver.register_matcher(Box::new(VimeoMatcher::new()));
        resolver.register_matcher(Box::new(StreamableMatcher::new()));
        resolver.register_matcher(Box::new(FacebookMatcher::new()));
        resolver.register_matcher(Box::new(DailymotionMatcher::new()));
        resolver.register_matcher(Box::new(TixteMatcher::new()));
        resolver.register_matcher(Box::new(DirectVideoMatcher::new()));
        resolver
    }

    pub fn register_matcher(&mut self, matcher: Box<dyn Matcher>) {
        self.matchers.push(matcher);
    }

    pub fn try_resolve(&self, link: Option<&str>) -> Result<EmbedDescriptor, ResolveError> {
        let raw = match link {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(ResolveError::NoLinkProvided),
        };

        let url = ensure_absolute_url(raw);

        for matcher in &self.matchers {
            if let Some(matched) = matcher.extract(&url) {
                debug!("Matched {} id {:?} for {}", matcher.platform(), matched.id(), url);
                let embed_url = match matched {
                    MatchResult::Id(id) => matcher.embed_url(&id, &url),
                    MatchResult::Embed { embed_url, .. } => embed_url,
                };
                return Ok(EmbedDescriptor::new(matcher.platform(), embed_url));
            }
        }

        debug!("No matcher recognized {}", url);
        Err(ResolveError::UnrecognizedFormat(url))
    }

    pub fn resolve(&self, link: Option<&str>) -> Option<EmbedDescriptor> {
        self.try_resolve(link).ok()
    }

    /// Names shown to users when a link cannot be embedded.
    pub fn supported_platforms() -> &'static [&'static str] {
        &[
            "YouTube",
            "Twitch",
            "Vimeo",
            "Streamable",
            "Tixte",
            "Facebook",
            "MP4",
        ]
    }
}

impl Default for VideoResolver {
    fn default() -> Self {
        Self::with_default_matchers("localhost")
    }
}

/// One-shot resolution with the default matcher set.
pub fn resolve_video_embed(link: Option<&str>, embed_host: &str) -> Option<EmbedDescriptor> {
    VideoResolver::with_default_matchers(embed_host).resolve(link)
}
