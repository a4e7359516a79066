pub mod detail;
pub mod inline_video;
pub mod markup;

pub use detail::project_detail;
pub use inline_video::{
    build_inline_video_document, decode_inline_video_document, inline_video_embed_url,
};
pub use markup::{render_placeholder, render_video_embed, video_embed_for_link};
