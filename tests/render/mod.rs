//! Rendering tests over a loaded site
//!
//! - Class, namespace, file and page layouts
//! - Cross-page member links
//! - Collection index pages

pub mod tests_pages;
