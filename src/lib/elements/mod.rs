//! Building blocks for content pages. Every function returns a
//! [`Fragment`]; a page script pushes them into a
//! [`Document`](crate::document::Document) top to bottom.

use itertools::Itertools;

use crate::{
    config::{SITE_LANG, SiteConfig},
    document::Fragment,
    inline::{render_inline, render_plain},
    page::PageModel,
    utils::{escape_attr, escape_text, sanitize_href},
};

/// Entry in the site navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub key: String,
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Document head, site banner and the page heading block. Leaves `<body>`
/// and `<main>` open for the content that follows.
pub fn header(page: &PageModel, nav_items: &[NavItem]) -> Fragment {
    let mut out = String::new();

    out.push_str(&format!(
        r#"<!doctype html>
<html lang="{SITE_LANG}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
"#
    ));
    out.push_str(&head_meta(page));
    out.push_str("</head>\n");

    out.push_str(&format!(
        r#"<body data-route="{}">
"#,
        escape_attr(page.route_key())
    ));
    out.push_str(&banner(page, nav_items));
    out.push_str("<main>\n");
    out.push_str(&body_head(page));

    Fragment::new(out)
}

fn head_meta(page: &PageModel) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "<title>{} · {}</title>\n",
        escape_text(page.title()),
        escape_text(page.site_name())
    ));

    let description = render_plain(page.description());
    if !description.trim().is_empty() {
        result.push_str(&format!(
            r#"<meta name="description" content="{}">
"#,
            description.trim()
        ));
    }

    if !page.tags().is_empty() {
        result.push_str(&format!(
            r#"<meta name="keywords" content="{}">
"#,
            escape_attr(&page.tags().iter().join(", "))
        ));
    }

    result
}

fn banner(page: &PageModel, nav_items: &[NavItem]) -> String {
    let mut result = String::new();
    result.push_str(&format!(
        r#"<header class="site-header">
<a class="site-name" href="/">{}</a>
"#,
        escape_text(page.site_name())
    ));

    if !nav_items.is_empty() {
        let links = nav_items
            .iter()
            .map(|item| {
                let class = if item.key == page.route_key() {
                    r#" class="active""#
                } else {
                    ""
                };
                format!(
                    r#"<a href="{}"{class}>{}</a>"#,
                    sanitize_href(&item.href),
                    escape_text(&item.label)
                )
            })
            .join("\n");
        result.push_str(&format!("<nav>\n{links}\n</nav>\n"));
    }

    result.push_str("</header>\n");
    result
}

fn body_head(page: &PageModel) -> String {
    let mut result = String::new();

    result.push_str(&format!("<h1>{}</h1>\n", escape_text(page.title())));

    if !page.description().trim().is_empty() {
        result.push_str(&format!(
            r#"<p class="description">{}</p>
"#,
            render_inline(page.description())
        ));
    }

    result.push_str(&render_body_meta(page));
    result
}

fn render_body_meta(page: &PageModel) -> String {
    let mut parts: Vec<String> = Vec::new();

    let created = page.created();
    parts.push(format!(
        r#"<span class="meta-item">Опубликовано: <time datetime="{}">{}</time></span>"#,
        created.iso(),
        created.as_str()
    ));

    let updated = page.updated();
    if updated != created {
        parts.push(format!(
            r#"<span class="meta-item">Обновлено: <time datetime="{}">{}</time></span>"#,
            updated.iso(),
            updated.as_str()
        ));
    }

    let mut result = format!(
        r#"<p class="meta">{}</p>
"#,
        parts.join(r#"<span class="meta-sep">·</span>"#)
    );

    if !page.tags().is_empty() {
        let rendered_tags = page
            .tags()
            .iter()
            .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_text(t)))
            .join(" ");
        result.push_str(&format!(
            r#"<p class="tags">{rendered_tags}</p>
"#
        ));
    }

    result
}

/// Section heading.
pub fn title_section(text: &str) -> Fragment {
    Fragment::new(format!("<h2>{}</h2>\n", escape_text(text)))
}

/// Paragraph of trusted inline markup with code spans applied.
pub fn text(s: &str) -> Fragment {
    Fragment::new(format!("<p>{}</p>\n", render_inline(s)))
}

/// Highlighted callout block.
pub fn important(s: &str) -> Fragment {
    Fragment::new(format!(
        r#"<div class="important"><p>{}</p></div>
"#,
        render_inline(s)
    ))
}

/// Inline link meant to be spliced into `text` or `important` content.
/// The label is trusted markup; external targets open in a new tab.
pub fn embedded_link(label: &str, url: &str) -> String {
    let external = url.starts_with("http://") || url.starts_with("https://");
    let target = if external {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };
    format!(
        r#"<a class="embedded-link" href="{}"{target}>{label}</a>"#,
        sanitize_href(url)
    )
}

pub fn line() -> Fragment {
    Fragment::new("<hr>\n")
}

/// Closes the content area and the document, with a contact link in the
/// site footer.
pub fn footer(config: &SiteConfig) -> Fragment {
    Fragment::new(format!(
        r#"</main>
<footer class="site-footer">
<p>{} · {}</p>
</footer>
</body>
</html>
"#,
        escape_text(&config.site_name),
        embedded_link("Telegram", &config.telegram_link)
    ))
}
