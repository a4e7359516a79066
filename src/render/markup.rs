use crate::core::{EmbedDescriptor, VideoResolver};
use crate::utils::escape_html;

/// Frame for a resolved video, or the unsupported-format placeholder.
pub fn render_video_embed(descriptor: Option<&EmbedDescriptor>) -> String {
    match descriptor {
        Some(descriptor) => format!(
            r#"<div class="video-container">
    <iframe src="{src}" title="{title} video player" frameborder="0" allow="{allow}" allowfullscreen></iframe>
</div>"#,
            src = escape_html(&descriptor.embed_url),
            title = escape_html(descriptor.platform.display_name()),
            allow = escape_html(&descriptor.allow_attribute()),
        ),
        None => render_placeholder(),
    }
}

pub fn render_placeholder() -> String {
    format!(
        r#"<div class="video-placeholder">
    <div style="text-align: center;">
        <i class="fas fa-video"></i>
        <p style="color: var(--text-muted); margin: 0;">Video format not supported</p>
        <small style="color: var(--text-muted);">Supported: {}</small>
    </div>
</div>"#,
        VideoResolver::supported_platforms().join(", ")
    )
}

/// Embed fragment for a project's video link; empty when there is no link.
pub fn video_embed_for_link(link: Option<&str>, resolver: &VideoResolver) -> String {
    match link.filter(|l| !l.is_empty()) {
        Some(link) => render_video_embed(resolver.resolve(Some(link)).as_ref()),
        None => String::new(),
    }
}
