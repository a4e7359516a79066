use crate::core::VideoResolver;
use crate::data::Project;
use crate::render::video_embed_for_link;
use crate::utils::{ensure_absolute_url, escape_html};

/// Body of the project detail view: heading, image, video, description,
/// feature list, metadata and outbound links.
pub fn project_detail(project: &Project, resolver: &VideoResolver) -> String {
    let mut html = String::new();
    let title = escape_html(&project.title);

    html.push_str(&format!("<h2>{}</h2>\n", title));

    if let Some(image) = project.image.as_deref().filter(|i| !i.is_empty()) {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"project-image\">\n",
            escape_html(image),
            title
        ));
    }

    html.push_str(&video_embed_for_link(project.video_link(), resolver));
    html.push('\n');

    html.push_str("<div class=\"project-details\">\n<div>\n");
    if let Some(text) = project.long_description() {
        html.push_str(&format!(
            "<h3>Project Details</h3>\n<p>{}</p>\n",
            escape_html(text)
        ));
    }
    if !project.features.is_empty() {
        html.push_str("<h4>Features</h4>\n<ul>\n");
        for feature in &project.features {
            html.push_str(&format!("<li>{}</li>\n", escape_html(feature)));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</div>\n<div>\n");

    let categories = project.categories.as_deref().unwrap_or_default();
    let has_info = project.version.is_some()
        || project.downloads.is_some()
        || !categories.is_empty()
        || !project.tags.is_empty();
    if has_info {
        html.push_str("<h3>Info</h3>\n");
        if let Some(version) = &project.version {
            html.push_str(&format!(
                "<p><strong>Version:</strong> {}</p>\n",
                escape_html(version)
            ));
        }
        if let Some(downloads) = project.downloads {
            html.push_str(&format!(
                "<p><strong>Downloads:</strong> {}</p>\n",
                group_thousands(downloads)
            ));
        }
        push_chips(&mut html, "Categories", "project-tag", categories);
        push_chips(&mut html, "Tags", "skill-tag", &project.tags);
    }
    html.push_str("</div>\n</div>\n");

    if project.download_link().is_some() || project.video_link().is_some() {
        html.push_str("<div class=\"project-links\">\n");
        if let Some(link) = project.download_link() {
            html.push_str(&format!(
                "<a href=\"{}\" class=\"btn btn-primary\" target=\"_blank\" rel=\"noopener noreferrer\">Download</a>\n",
                escape_html(link)
            ));
        }
        if let Some(link) = project.video_link() {
            html.push_str(&format!(
                "<a href=\"{}\" class=\"btn btn-secondary\" target=\"_blank\" rel=\"noopener noreferrer\">Open Video</a>\n",
                escape_html(&ensure_absolute_url(link))
            ));
        }
        html.push_str("</div>\n");
    }

    html
}

fn push_chips(html: &mut String, heading: &str, class: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    html.push_str(&format!("<h4>{}</h4>\n<div>", heading));
    for item in items {
        html.push_str(&format!(
            "<span class=\"{}\">{}</span>",
            class,
            escape_html(item)
        ));
    }
    html.push_str("</div>\n");
}

/// `1234567` -> `1,234,567`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
