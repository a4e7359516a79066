use crate::core::{MatchResult, Matcher, Platform};
use crate::matchers::compile_patterns;
use crate::utils::encode_component;
use regex::Regex;

/// Twitch videos, clips and live channels.
///
/// Twitch refuses to play inside a frame unless `parent` names the host page,
/// so the matcher carries that hostname from configuration.
pub struct TwitchMatcher {
    parent: String,
    video: Option<Regex>,
    clip: Option<Regex>,
    channel: Option<Regex>,
}

impl TwitchMatcher {
    pub fn new(parent_host: &str) -> Self {
        Self {
            parent: encode_component(parent_host),
            video: compile_patterns(&[r"twitch\.tv/videos/([0-9]+)"]).pop(),
            clip: compile_patterns(&[r"twitch\.tv/[A-Za-z0-9_]+/clip/([A-Za-z0-9_]+)"]).pop(),
            // Anchored: the channel name has to be the whole remaining input
            channel: compile_patterns(&[r"twitch\.tv/([A-Za-z0-9_]+)$"]).pop(),
        }
    }

    fn capture(re: &Option<Regex>, url: &str) -> Option<String> {
        re.as_ref()?
            .captures(url)?
            .get(1)
            .map(|m| m.as_str().to_string())
    }

    fn player_url(&self, key: &str, id: &str) -> String {
        format!(
            "https://player.twitch.tv/?{}={}&parent={}&autoplay=false",
            key, id, self.parent
        )
    }

    fn clip_url(&self, id: &str) -> String {
        format!(
            "https://clips.twitch.tv/embed?clip={}&parent={}&autoplay=false",
            id, self.parent
        )
    }
}

impl Matcher for TwitchMatcher {
    fn platform(&self) -> Platform {
        Platform::Twitch
    }

    fn extract(&self, url: &str) -> Option<MatchResult> {
        if let Some(id) = Self::capture(&self.video, url) {
            let embed_url = self.player_url("video", &id);
            return Some(MatchResult::Embed { id, embed_url });
        }

        if let Some(id) = Self::capture(&self.clip, url) {
            let embed_url = self.clip_url(&id);
            return Some(MatchResult::Embed { id, embed_url });
        }

        if let Some(id) = Self::capture(&self.channel, url) {
            let embed_url = self.player_url("channel", &id);
            return Some(MatchResult::Embed { id, embed_url });
        }

        None
    }

    fn embed_url(&self, id: &str, _url: &str) -> String {
        self.player_url("video", id)
    }
}
