use std::path::PathBuf;

use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::{
    escape_text, escape_text_keep_entities, route_to_rel_path, sanitize_href, strip_tags,
};

#[test]
fn escape_text_removes_angle_and_quotes() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |s| {
            let escaped = escape_text(&s);
            for ch in ['<', '>', '"', '\''] {
                prop_assert!(!escaped.contains(ch));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn escape_text_noops_when_safe() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[^<>'\"&]*", |s| {
            let escaped = escape_text(&s);
            prop_assert_eq!(escaped, s);
            Ok(())
        })
        .unwrap();
}

#[test]
fn sanitize_href_only_touches_quotes() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |s| {
            let href = sanitize_href(&s);
            prop_assert!(!href.contains('"'));
            if !s.contains('"') {
                prop_assert_eq!(href, s);
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn strip_tags_keeps_text() {
    assert_eq!(
        strip_tags(r#"Задать вопросы <a href="https://t.me/x">в телеграм</a>."#),
        "Задать вопросы в телеграм."
    );
    assert_eq!(strip_tags("no markup"), "no markup");
    assert_eq!(strip_tags("1 > 0"), "1 > 0");
    assert_eq!(strip_tags("1 < 2 ok"), "1 < 2 ok");
    assert_eq!(strip_tags("a<br>b<!-- note -->c</p>"), "abc");
}

#[test]
fn existing_entities_are_not_escaped_twice() {
    assert_eq!(escape_text_keep_entities("Rock &amp; roll"), "Rock &amp; roll");
    assert_eq!(escape_text_keep_entities("&#171;цитата&#187;"), "&#171;цитата&#187;");
    assert_eq!(escape_text_keep_entities("R&D & QA"), "R&amp;D &amp; QA");
    assert_eq!(escape_text_keep_entities("1 < 2 & \"x\""), "1 &lt; 2 &amp; &quot;x&quot;");
    assert_eq!(escape_text_keep_entities("&;"), "&amp;;");
}

#[test]
fn keep_entities_matches_escape_without_ampersands() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[^&]*", |s| {
            let kept = escape_text_keep_entities(&s);
            prop_assert_eq!(kept, escape_text(&s));
            Ok(())
        })
        .unwrap();
}

#[test]
fn route_maps_to_index_file() {
    let mut runner = TestRunner::new(Config {
        cases: 32,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(
            &proptest::collection::vec("[a-z0-9-]{1,10}", 1..4),
            |segments| {
                let route = segments.join("/");
                let mut expected = PathBuf::new();
                for seg in &segments {
                    expected.push(seg);
                }
                expected.push("index.html");
                prop_assert_eq!(route_to_rel_path(&route), expected.clone());
                let slashed = format!("/{route}/");
                prop_assert_eq!(route_to_rel_path(&slashed), expected);
                Ok(())
            },
        )
        .unwrap();
}
