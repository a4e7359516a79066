use crate::core::{MatchResult, Matcher, Platform};
use crate::matchers::compile_patterns;
use crate::render::inline_video_embed_url;
use crate::utils::has_video_extension;
use regex::Regex;

/// Video files uploaded to Tixte. Tixte has no player of its own, so these
/// get the same inline document as any other direct file.
pub struct TixteMatcher {
    patterns: Vec<Regex>,
}

impl TixteMatcher {
    pub fn new() -> Self {
        let patterns = compile_patterns(&[
            r"tixte\.com/([^?#]+)",
            r"d\.tixte\.co/([^?#]+)",
            r"cdn\.tixte\.co/([^?#]+)",
            r"media\.tixte\.co/([^?#]+)",
        ]);

        Self { patterns }
    }

    /// Last path segment of a Tixte-hosted URL.
    pub fn file_name(&self, url: &str) -> Option<String> {
        self.patterns.iter().find_map(|re| {
            let path = re.captures(url)?.get(1)?.as_str();
            path.rsplit('/')
                .next()
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        })
    }
}

impl Default for TixteMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for TixteMatcher {
    fn platform(&self) -> Platform {
        Platform::Tixte
    }

    fn extract(&self, url: &str) -> Option<MatchResult> {
        let file_name = self.file_name(url).filter(|name| has_video_extension(name))?;
        Some(MatchResult::Embed {
            id: file_name,
            embed_url: inline_video_embed_url(url),
        })
    }

    fn embed_url(&self, _id: &str, url: &str) -> String {
        inline_video_embed_url(url)
    }
}
