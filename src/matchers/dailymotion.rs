use crate::core::{MatchResult, Matcher, Platform};
use crate::matchers::{compile_patterns, first_capture};
use regex::Regex;

pub struct DailymotionMatcher {
    patterns: Vec<Regex>,
}

impl DailymotionMatcher {
    pub fn new() -> Self {
        // Ids stop at the first '_' (title slug) or '?'
        let patterns = compile_patterns(&[
            r"dailymotion\.com/video/([^_?]+)",
            r"dai\.ly/([^_?]+)",
        ]);

        Self { patterns }
    }
}

impl Default for DailymotionMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for DailymotionMatcher {
    fn platform(&self) -> Platform {
        Platform::DailyMotion
    }

    fn extract(&self, url: &str) -> Option<MatchResult> {
        first_capture(&self.patterns, url).map(MatchResult::Id)
    }

    fn embed_url(&self, id: &str, _url: &str) -> String {
        format!("https://www.dailymotion.com/embed/video/{}", id)
    }
}
