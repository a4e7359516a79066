use anyhow::Result;
use regex::Regex;
use showcase_embed::core::{resolve_video_embed, Platform, ResolveError, VideoResolver};
use showcase_embed::matchers::DirectVideoMatcher;
use showcase_embed::data::{CategoryFilter, DataStore, DirectorySource};
use showcase_embed::render::{decode_inline_video_document, project_detail};
use std::fs;
use tempfile::tempdir;

const HOST: &str = "portfolio.example";

fn resolver() -> VideoResolver {
    VideoResolver::with_default_matchers(HOST)
}

#[tokio::test]
async fn test_youtube_watch_url() -> Result<()> {
    let descriptor = resolver()
        .resolve(Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ"))
        .expect("youtube should resolve");

    assert_eq!(descriptor.platform, Platform::YouTube);
    assert_eq!(
        descriptor.embed_url,
        "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&modestbranding=1"
    );
    Ok(())
}

#[tokio::test]
async fn test_twitch_video_without_scheme() -> Result<()> {
    let descriptor = resolver()
        .resolve(Some("twitch.tv/videos/123456789"))
        .expect("twitch should resolve");

    assert_eq!(descriptor.platform, Platform::Twitch);
    assert!(descriptor
        .embed_url
        .contains("player.twitch.tv/?video=123456789&parent="));
    assert!(descriptor.embed_url.contains("parent=portfolio.example&"));
    Ok(())
}

#[tokio::test]
async fn test_vimeo_without_scheme() -> Result<()> {
    let descriptor = resolve_video_embed(Some("vimeo.com/76979871"), HOST).expect("vimeo");
    assert_eq!(descriptor.platform, Platform::Vimeo);
    assert_eq!(
        descriptor.embed_url,
        "https://player.vimeo.com/video/76979871?title=0&byline=0&portrait=0&dnt=1"
    );
    Ok(())
}

#[tokio::test]
async fn test_tixte_takes_priority_over_direct_video() -> Result<()> {
    let url = "https://cdn.tixte.co/abc/clip.mp4";
    let descriptor = resolver().resolve(Some(url)).expect("tixte should resolve");

    assert_eq!(descriptor.platform, Platform::Tixte);

    let document = decode_inline_video_document(&descriptor.embed_url)
        .expect("tixte embeds are inline documents");
    assert!(document.contains(&urlencoding::encode(url).into_owned()));

    // Without the Tixte matcher the generic fallback produces the same document
    let mut direct_only = VideoResolver::new();
    direct_only.register_matcher(Box::new(DirectVideoMatcher::new()));
    let direct = direct_only.resolve(Some(url)).expect("direct video");
    assert_eq!(direct.platform, Platform::DirectVideo);
    assert_eq!(direct.embed_url, descriptor.embed_url);
    Ok(())
}

#[tokio::test]
async fn test_direct_video_file() -> Result<()> {
    let descriptor = resolver()
        .resolve(Some("files.example.com/showreel.webm"))
        .expect("direct video should resolve");
    assert_eq!(descriptor.platform, Platform::DirectVideo);
    assert_eq!(descriptor.allow_attribute(), "autoplay; fullscreen");
    Ok(())
}

#[tokio::test]
async fn test_other_platforms() -> Result<()> {
    let resolver = resolver();

    let cases = vec![
        ("streamable.com/moo7x", Platform::Streamable, "https://streamable.com/e/moo7x"),
        (
            "https://www.dailymotion.com/video/x7tgad0_title",
            Platform::DailyMotion,
            "https://www.dailymotion.com/embed/video/x7tgad0",
        ),
        (
            "fb.watch/abc123",
            Platform::Facebook,
            "https://www.facebook.com/plugins/video.php?href=https%3A%2F%2Ffb.watch%2Fabc123&show_text=0&width=560",
        ),
    ];

    for (input, platform, embed_url) in cases {
        let descriptor = resolver.resolve(Some(input)).expect(input);
        assert_eq!(descriptor.platform, platform, "{}", input);
        assert_eq!(descriptor.embed_url, embed_url, "{}", input);
    }
    Ok(())
}

#[tokio::test]
async fn test_scheme_normalization() -> Result<()> {
    let resolver = resolver();
    let bare = resolver.resolve(Some("youtu.be/dQw4w9WgXcQ")).expect("bare");
    let full = resolver
        .resolve(Some("https://youtu.be/dQw4w9WgXcQ"))
        .expect("full");
    assert_eq!(bare.embed_url, full.embed_url);
    Ok(())
}

#[tokio::test]
async fn test_negative_cases() -> Result<()> {
    let resolver = resolver();

    assert_eq!(resolver.resolve(None), None);
    assert_eq!(resolver.try_resolve(Some("")), Err(ResolveError::NoLinkProvided));
    assert_eq!(resolver.resolve(Some("https://example.com/about")), None);
    assert_eq!(resolver.resolve(Some("not a url at all")), None);
    assert!(matches!(
        resolver.try_resolve(Some("not a url at all")),
        Err(ResolveError::UnrecognizedFormat(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_resolution_is_total_and_idempotent() -> Result<()> {
    let resolver = resolver();
    let inputs = [
        "",
        " ",
        "http://",
        "https://",
        "://youtube.com/watch?v=",
        "youtube.com/watch?v=&&&",
        "twitch.tv/",
        "twitch.tv/videos/",
        "vimeo.com/channels//",
        "dai.ly/_",
        "cdn.tixte.co/.mp4",
        "\u{0}\u{feff}.MKV",
        "ユーチューブ.com/watch?v=日本語",
        "twitch.tv/ストリーマー",
        "https://example.com/\"><script>alert(1)</script>.mp4",
    ];

    for input in inputs {
        let first = resolver.resolve(Some(input));
        let second = resolver.resolve(Some(input));
        assert_eq!(first, second, "{:?}", input);
    }

    // Unicode word characters are not Twitch channel names
    assert_eq!(resolver.resolve(Some("twitch.tv/ストリーマー")), None);
    Ok(())
}

#[tokio::test]
async fn test_hostile_direct_video_url_stays_one_attribute() -> Result<()> {
    let hostile = "https://example.com/a\"><img src=x onerror=alert(1)>.mp4";
    let descriptor = resolver().resolve(Some(hostile)).expect("direct video");
    let document = decode_inline_video_document(&descriptor.embed_url).expect("inline document");

    let source = Regex::new(r#"<source src="([^"]*)" type="video/(mp4|webm)">"#)?;
    let srcs: Vec<String> = source
        .captures_iter(&document)
        .map(|c| c[1].to_string())
        .collect();

    assert_eq!(srcs.len(), 2);
    for src in srcs {
        assert_eq!(urlencoding::decode(&src)?, hostile);
    }
    assert!(!document.contains("<img"));
    Ok(())
}

fn write_dataset(dir: &std::path::Path) -> Result<()> {
    fs::write(
        dir.join("organizations.json"),
        r#"[{"title": "Studio", "detail": "Builder", "logo": "studio.png", "active": true}]"#,
    )?;
    fs::write(
        dir.join("projects.json"),
        r#"[
            {"id": 1, "title": "Castle", "categories": ["Maps"], "videoLink": "youtu.be/dQw4w9WgXcQ"},
            {"id": 2, "title": "Utility Mod", "categories": ["Mods"], "videoLink": "https://example.com/about"},
            {"id": 3, "title": "Untagged"}
        ]"#,
    )?;
    fs::write(
        dir.join("social-links.json"),
        r#"[{"title": "GitHub", "link": "https://github.com/x", "icon": "fab fa-github", "hoverText": "Code"}]"#,
    )?;
    fs::write(
        dir.join("categories.json"),
        r#"[{"name": "Maps", "icon": "fas fa-map"}, {"name": "Mods", "icon": "fas fa-cube"}]"#,
    )?;
    Ok(())
}

#[tokio::test]
async fn test_data_store_loads_directory() -> Result<()> {
    let temp_dir = tempdir()?;
    write_dataset(temp_dir.path())?;

    let store = DataStore::try_load(&DirectorySource::new(temp_dir.path())).await?;
    assert_eq!(store.organizations.len(), 1);
    assert_eq!(store.projects.len(), 3);
    assert_eq!(store.social_links[0].hover_text, "Code");
    assert_eq!(store.categories.len(), 2);

    let filter: CategoryFilter = ["Maps"].into_iter().collect();
    let titles: Vec<&str> = filter
        .apply(&store.projects)
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Castle"]);
    Ok(())
}

#[tokio::test]
async fn test_data_store_falls_back_to_empty() -> Result<()> {
    let temp_dir = tempdir()?;
    write_dataset(temp_dir.path())?;
    fs::write(temp_dir.path().join("projects.json"), "{ not json")?;

    let source = DirectorySource::new(temp_dir.path());
    assert!(DataStore::try_load(&source).await.is_err());

    let store = DataStore::load(&source).await;
    assert_eq!(store, DataStore::default());

    let missing = DirectorySource::new(temp_dir.path().join("missing"));
    assert_eq!(DataStore::load(&missing).await, DataStore::default());
    Ok(())
}

#[tokio::test]
async fn test_project_detail_embeds_video() -> Result<()> {
    let temp_dir = tempdir()?;
    write_dataset(temp_dir.path())?;
    let store = DataStore::load(&DirectorySource::new(temp_dir.path())).await;
    let resolver = resolver();

    let castle = project_detail(store.project(1).expect("castle"), &resolver);
    assert!(castle.contains("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&amp;modestbranding=1"));

    let unsupported = project_detail(store.project(2).expect("mod"), &resolver);
    assert!(unsupported.contains("video-placeholder"));

    let bare = project_detail(store.project(3).expect("untagged"), &resolver);
    assert!(!bare.contains("video"));
    Ok(())
}
