use crate::core::{MatchResult, Matcher, Platform};
use crate::matchers::{compile_patterns, first_capture};
use crate::utils::encode_component;
use regex::Regex;

/// Facebook's video plugin takes the whole page URL rather than an id.
pub struct FacebookMatcher {
    patterns: Vec<Regex>,
}

impl FacebookMatcher {
    pub fn new() -> Self {
        let patterns = compile_patterns(&[
            r"facebook\.com.*/videos?/([0-9]+)",
            r"fb\.watch/([^/?]+)",
        ]);

        Self { patterns }
    }
}

impl Default for FacebookMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for FacebookMatcher {
    fn platform(&self) -> Platform {
        Platform::Facebook
    }

    fn extract(&self, url: &str) -> Option<MatchResult> {
        let id = first_capture(&self.patterns, url)?;
        let embed_url = self.embed_url(&id, url);
        Some(MatchResult::Embed { id, embed_url })
    }

    fn embed_url(&self, _id: &str, url: &str) -> String {
        format!(
            "https://www.facebook.com/plugins/video.php?href={}&show_text=0&width=560",
            encode_component(url)
        )
    }
}
