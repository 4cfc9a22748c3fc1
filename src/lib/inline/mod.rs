//! Inline markup for paragraph content.
//!
//! Only backtick-delimited code spans are recognised: each pair of
//! backticks becomes a `<code>` element with its content escaped. Text
//! outside the spans is trusted markup and passes through untouched, so
//! links built with `embedded_link` survive. A backtick without a partner
//! is kept as a literal character.

use crate::utils::{escape_text, escape_text_keep_entities, strip_tags};

enum Span<'a> {
    Markup(&'a str),
    Code(&'a str),
}

fn spans(s: &str) -> Vec<Span<'_>> {
    let mut out = Vec::new();
    let mut rest = s;

    while let Some(open) = rest.find('`') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('`') else {
            break;
        };

        out.push(Span::Markup(&rest[..open]));
        out.push(Span::Code(&after_open[..close]));
        rest = &after_open[close + 1..];
    }

    out.push(Span::Markup(rest));
    out
}

pub fn render_inline(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for span in spans(s) {
        match span {
            Span::Markup(markup) => out.push_str(markup),
            Span::Code(code) => {
                out.push_str("<code>");
                out.push_str(&escape_text(code));
                out.push_str("</code>");
            }
        }
    }
    out
}

/// Inline markup flattened to escaped plain text, for attribute values
/// such as `<meta>` content. Tags are dropped, code spans lose their
/// delimiters, and entities already present in the markup are kept.
pub fn render_plain(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for span in spans(s) {
        match span {
            Span::Markup(markup) => out.push_str(&escape_text_keep_entities(&strip_tags(markup))),
            Span::Code(code) => out.push_str(&escape_text(code)),
        }
    }
    out
}
