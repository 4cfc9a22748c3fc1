//! Page scripts: one module per page, each composing a fixed sequence of
//! elements with literal content.

use color_eyre::eyre::eyre;

use crate::{config::SiteConfig, document::Document, elements::NavItem, types::PageDate};

pub mod contribute;
pub mod jobs;

type RenderFn = fn(&SiteConfig) -> color_eyre::Result<Document>;

/// A registered page and the route it is published under.
#[derive(Clone, Copy, Debug)]
pub struct PageScript {
    pub key: &'static str,
    pub route: &'static str,
    pub label: &'static str,
    pub render: RenderFn,
}

const PAGES: &[PageScript] = &[
    PageScript {
        key: contribute::KEY,
        route: contribute::ROUTE,
        label: contribute::LABEL,
        render: contribute::render,
    },
    PageScript {
        key: jobs::KEY,
        route: jobs::ROUTE,
        label: jobs::LABEL,
        render: jobs::render,
    },
];

pub fn all() -> &'static [PageScript] {
    PAGES
}

pub fn find(route: &str) -> Option<&'static PageScript> {
    let route = route.trim_matches('/');
    PAGES.iter().find(|p| p.route == route)
}

/// Navigation bar linking every registered page.
pub fn nav_items() -> Vec<NavItem> {
    PAGES
        .iter()
        .map(|p| NavItem::new(p.key, p.label, format!("/{}", p.route)))
        .collect()
}

/// Dates in page scripts are literals; a typo surfaces as an error.
pub(crate) fn date(literal: &str) -> color_eyre::Result<PageDate> {
    PageDate::parse(literal).ok_or_else(|| eyre!("Malformed page date literal '{literal}'"))
}

#[cfg(test)]
mod tests;
