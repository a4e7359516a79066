use crate::core::{MatchResult, Matcher, Platform};
use crate::matchers::{compile_patterns, first_capture};
use regex::Regex;

pub struct YouTubeMatcher {
    patterns: Vec<Regex>,
}

impl YouTubeMatcher {
    pub fn new() -> Self {
        // watch?v=, youtu.be and /embed/ share a pattern; /v/ and the legacy
        // user-channel fragment form come after
        let patterns = compile_patterns(&[
            r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)",
            r"youtube\.com/v/([^&\n?#]+)",
            r"youtube\.com/user/[^/]+#p/[^/]+/[^/]+/([^&\n?#]+)",
        ]);

        Self { patterns }
    }

    pub fn extract_video_id(&self, url: &str) -> Option<String> {
        first_capture(&self.patterns, url)
    }
}

impl Default for YouTubeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for YouTubeMatcher {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    fn extract(&self, url: &str) -> Option<MatchResult> {
        self.extract_video_id(url).map(MatchResult::Id)
    }

    fn embed_url(&self, id: &str, _url: &str) -> String {
        format!("https://www.youtube.com/embed/{}?rel=0&modestbranding=1", id)
    }
}
