use crate::utils::encode_component;
use tracing::warn;

const DATA_URL_PREFIX: &str = "data:text/html;charset=utf-8,";

/// Builds the self-contained document used as the frame source for raw video
/// files. Non-http sources are replaced by an empty source; the document is
/// still produced so the frame renders a (non-playing) player.
pub fn build_inline_video_document(url: &str) -> String {
    let safe_url = if url.starts_with("http") {
        url
    } else {
        warn!("Refusing to embed non-http video source: {:?}", url);
        ""
    };
    let src = encode_component(safe_url);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
body {{ margin: 0; padding: 0; background: #000; }}
video {{ width: 100%; height: 100%; object-fit: contain; }}
</style>
</head>
<body>
<video controls autoplay muted style="width: 100%; height: 100%;">
<source src="{src}" type="video/mp4">
<source src="{src}" type="video/webm">
<p style="color: white; text-align: center; padding: 20px;">Your browser does not support this video format.</p>
</video>
</body>
</html>"#,
        src = src
    )
}

/// The inline document packed into a `data:` URL. The payload is
/// percent-encoded as a whole so it survives inside an attribute value.
pub fn inline_video_embed_url(url: &str) -> String {
    format!(
        "{}{}",
        DATA_URL_PREFIX,
        encode_component(&build_inline_video_document(url))
    )
}

/// Recovers the document from a URL built by [`inline_video_embed_url`].
pub fn decode_inline_video_document(embed_url: &str) -> Option<String> {
    let payload = embed_url.strip_prefix(DATA_URL_PREFIX)?;
    urlencoding::decode(payload).ok().map(|doc| doc.into_owned())
}
