use color_eyre::eyre::eyre;

use crate::types::PageDate;

/// Metadata for a single rendered page. Built once per render and never
/// modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageModel {
    route_key: String,
    site_name: String,
    title: String,
    // Trusted inline markup; may carry embedded links.
    description: String,
    tags: Vec<String>,
    created: PageDate,
    updated: PageDate,
}

impl PageModel {
    pub fn new(
        route_key: impl Into<String>,
        site_name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        created: PageDate,
        updated: PageDate,
    ) -> Self {
        Self {
            route_key: route_key.into(),
            site_name: site_name.into(),
            title: title.into(),
            description: description.into(),
            tags,
            created,
            updated,
        }
    }

    pub fn route_key(&self) -> &str {
        &self.route_key
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn created(&self) -> PageDate {
        self.created
    }

    pub fn updated(&self) -> PageDate {
        self.updated
    }

    /// An update can never predate creation.
    pub fn validate(&self) -> color_eyre::Result<()> {
        if self.updated < self.created {
            return Err(eyre!(
                "Page '{}' updated on {} before it was created on {}",
                self.title,
                self.updated,
                self.created
            ));
        }
        Ok(())
    }
}
