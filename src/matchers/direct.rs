use crate::core::{MatchResult, Matcher, Platform};
use crate::render::inline_video_embed_url;
use crate::utils::has_video_extension;

/// Catch-all for links to raw video containers. Registered last because the
/// extension check would otherwise swallow platform URLs such as Tixte's.
pub struct DirectVideoMatcher;

impl DirectVideoMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DirectVideoMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for DirectVideoMatcher {
    fn platform(&self) -> Platform {
        Platform::DirectVideo
    }

    fn extract(&self, url: &str) -> Option<MatchResult> {
        if !has_video_extension(url) {
            return None;
        }

        Some(MatchResult::Embed {
            id: url.to_string(),
            embed_url: inline_video_embed_url(url),
        })
    }

    fn embed_url(&self, _id: &str, url: &str) -> String {
        inline_video_embed_url(url)
    }
}
