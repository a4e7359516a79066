use crate::core::{MatchResult, Matcher, Platform};
use crate::matchers::{compile_patterns, first_capture};
use regex::Regex;

pub struct VimeoMatcher {
    patterns: Vec<Regex>,
}

impl VimeoMatcher {
    pub fn new() -> Self {
        let patterns = compile_patterns(&[
            r"(?:https?://)?(?:www\.)?vimeo\.com/([0-9]+)",
            // private link with hash suffix
            r"(?:https?://)?(?:www\.)?vimeo\.com/([0-9]+)/[a-f0-9]+",
            r"(?:https?://)?(?:www\.)?vimeo\.com/channels/[A-Za-z0-9_-]+/([0-9]+)",
            r"(?:https?://)?(?:www\.)?vimeo\.com/groups/[A-Za-z0-9_-]+/videos/([0-9]+)",
            r"(?:https?://)?player\.vimeo\.com/video/([0-9]+)",
            r"(?:https?://)?(?:www\.)?vimeo\.com/video/([0-9]+)",
            r"(?:https?://)?(?:www\.)?vimeo\.com/user[0-9]+/review/([0-9]+)",
            r"(?:https?://)?(?:www\.)?vimeo\.com/event/[0-9]+/videos/([0-9]+)",
        ]);

        Self { patterns }
    }

    pub fn extract_video_id(&self, url: &str) -> Option<String> {
        first_capture(&self.patterns, url)
    }
}

impl Default for VimeoMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for VimeoMatcher {
    fn platform(&self) -> Platform {
        Platform::Vimeo
    }

    fn extract(&self, url: &str) -> Option<MatchResult> {
        self.extract_video_id(url).map(MatchResult::Id)
    }

    fn embed_url(&self, id: &str, _url: &str) -> String {
        format!(
            "https://player.vimeo.com/video/{}?title=0&byline=0&portrait=0&dnt=1",
            id
        )
    }
}
