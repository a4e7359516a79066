pub mod dailymotion;
pub mod direct;
pub mod facebook;
pub mod streamable;
pub mod tixte;
pub mod twitch;
pub mod vimeo;
pub mod youtube;

pub use dailymotion::DailymotionMatcher;
pub use direct::DirectVideoMatcher;
pub use facebook::FacebookMatcher;
pub use streamable::StreamableMatcher;
pub use tixte::TixteMatcher;
pub use twitch::TwitchMatcher;
pub use vimeo::VimeoMatcher;
pub use youtube::YouTubeMatcher;

use regex::Regex;
use tracing::warn;

/// Compiles a matcher's pattern table, skipping (and logging) any pattern
/// that fails to compile so a bad entry cannot take the resolver down.
pub(crate) fn compile_patterns(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Skipping invalid matcher pattern {:?}: {}", pattern, e);
                None
            }
        })
        .collect()
}

/// First non-empty capture group 1 across `patterns`, tried in order.
pub(crate) fn first_capture(patterns: &[Regex], url: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(url)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    })
}
