/// Container extensions that mark a URL as a direct video file.
pub const VIDEO_EXTENSIONS: [&str; 8] = [
    ".mp4", ".webm", ".ogg", ".avi", ".mov", ".wmv", ".flv", ".mkv",
];

/// Prefixes `https://` unless the URL already carries an http(s) scheme.
pub fn ensure_absolute_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Case-insensitive substring check against [`VIDEO_EXTENSIONS`].
pub fn has_video_extension(text: &str) -> bool {
    let lower = text.to_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lower.contains(ext))
}

/// Percent-encodes a value placed inside generated URLs or documents.
/// Only `A-Z a-z 0-9 - _ . ~` survive unencoded.
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Escapes text for HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
