//! Static content pages for the site: a small set of page-building
//! elements, the page scripts that use them, and a pipeline that writes
//! the rendered documents out.

pub mod config;
pub mod document;
pub mod elements;
pub mod inline;
pub mod page;
pub mod pipeline;
pub mod scripts;
pub mod types;
pub mod utils;
