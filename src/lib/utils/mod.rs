/// HTML-escape text content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// HTML-escape attribute values (same rules as text for this codebase).
pub fn escape_attr(s: &str) -> String {
    escape_text(s)
}

/// Like [`escape_text`], but an `&` that already opens a character
/// reference such as `&amp;` or `&#171;` is left alone.
pub fn escape_text_keep_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, ch) in s.char_indices() {
        match ch {
            '&' if opens_entity(&s[i + 1..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn opens_entity(rest: &str) -> bool {
    let body = rest.strip_prefix('#').unwrap_or(rest);
    let name_len = body
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .count();
    name_len > 0 && body[name_len..].starts_with(';')
}

/// Make a URL safe to place in a double-quoted `href` while leaving every
/// other character as written.
pub fn sanitize_href(url: &str) -> String {
    url.replace('"', "%22")
}

/// Drop markup tags, keeping the text between them. A `<` that cannot
/// open a tag (`1 < 2`) is kept as text.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for (i, ch) in s.char_indices() {
        match ch {
            '<' if !in_tag && opens_tag(&s[i + 1..]) => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

fn opens_tag(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

/// Relative output file for a route: `ru/jobs` -> `ru/jobs/index.html`.
pub fn route_to_rel_path(route: &str) -> std::path::PathBuf {
    let mut rel = std::path::PathBuf::new();
    for seg in route.split('/').filter(|s| !s.is_empty()) {
        rel.push(seg);
    }
    rel.join("index.html")
}

#[cfg(test)]
mod tests;
