use crate::core::{MatchResult, Matcher, Platform};
use crate::matchers::{compile_patterns, first_capture};
use regex::Regex;

pub struct StreamableMatcher {
    patterns: Vec<Regex>,
}

impl StreamableMatcher {
    pub fn new() -> Self {
        Self {
            patterns: compile_patterns(&[r"streamable\.com/([A-Za-z0-9_]+)"]),
        }
    }
}

impl Default for StreamableMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for StreamableMatcher {
    fn platform(&self) -> Platform {
        Platform::Streamable
    }

    fn extract(&self, url: &str) -> Option<MatchResult> {
        first_capture(&self.patterns, url).map(MatchResult::Id)
    }

    fn embed_url(&self, id: &str, _url: &str) -> String {
        format!("https://streamable.com/e/{}", id)
    }
}
