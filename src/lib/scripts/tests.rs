use std::collections::HashSet;

use super::{all, contribute, date, find, jobs, nav_items};
use crate::{config::site_config, elements::embedded_link};

#[test]
fn every_page_has_a_valid_model() {
    let config = site_config();
    contribute::model(&config).unwrap().validate().unwrap();
    jobs::model(&config).unwrap().validate().unwrap();
}

#[test]
fn every_page_renders_a_complete_document() {
    let config = site_config();
    for script in all() {
        let html = (script.render)(&config).unwrap().render();
        assert!(html.starts_with("<!doctype html>"), "{}", script.route);
        assert!(html.trim_end().ends_with("</html>"), "{}", script.route);
        assert_eq!(html.matches("<main>").count(), 1);
        assert_eq!(html.matches("</main>").count(), 1);
    }
}

#[test]
fn rendering_is_repeatable() {
    let config = site_config();
    for script in all() {
        let first = (script.render)(&config).unwrap().render();
        let second = (script.render)(&config).unwrap().render();
        assert_eq!(first, second);
    }
}

#[test]
fn routes_and_keys_are_unique() {
    let routes: HashSet<_> = all().iter().map(|p| p.route).collect();
    let keys: HashSet<_> = all().iter().map(|p| p.key).collect();
    assert_eq!(routes.len(), all().len());
    assert_eq!(keys.len(), all().len());
}

#[test]
fn find_ignores_surrounding_slashes() {
    assert_eq!(find("/ru/jobs/").map(|p| p.key), Some(jobs::KEY));
    assert_eq!(find("ru/contribute").map(|p| p.key), Some(contribute::KEY));
    assert!(find("ru/missing").is_none());
}

#[test]
fn nav_marks_current_page() {
    let config = site_config();
    let html = jobs::render(&config).unwrap().render();
    assert!(html.contains(r#"<a href="/ru/jobs" class="active">Вакансии</a>"#));
    assert!(html.contains(r#"<a href="/ru/contribute">Стать Автором</a>"#));
    assert_eq!(nav_items().len(), all().len());
}

#[test]
fn jobs_links_to_contribute_page() {
    let config = site_config();
    let html = jobs::render(&config).unwrap().render();
    let link = embedded_link("здесь", &config.url(contribute::ROUTE));
    assert!(html.contains(&link));
    assert!(html.contains("<code>http</code>"));
    assert!(html.contains("UIKit` + Catalyst"));
}

#[test]
fn contribute_page_content_order() {
    let config = site_config();
    let doc = contribute::render(&config).unwrap();
    let headings: Vec<_> = doc
        .fragments()
        .iter()
        .filter(|f| f.as_str().starts_with("<h2>"))
        .map(|f| f.as_str().trim_end().to_string())
        .collect();
    assert_eq!(
        headings,
        [
            "<h2>Выбрать тему</h2>",
            "<h2>План</h2>",
            "<h2>Форматирование, медиа-файлы</h2>",
            "<h2>Публикация</h2>",
        ]
    );
    assert!(doc.render().contains(&config.telegram_link));
}

#[test]
fn malformed_date_literal_is_an_error() {
    assert!(date("32.13.2022").is_err());
    assert!(date("20.03.2022").is_ok());
}

#[test]
fn debug_output_names_the_page() {
    let script = find(jobs::ROUTE).unwrap();
    let debug = format!("{script:?}");
    assert!(debug.contains(jobs::KEY));
    assert!(debug.contains(jobs::ROUTE));
    assert!(debug.contains(jobs::LABEL));
}
