//! # doxyforge-base
//!
//! Core library for turning Doxygen XML output into a cross-linked tree of
//! MDX documentation pages.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Directory loading (index.xml, Doxyfile.xml, <refid>.xml)
//!   ↓
//! render    → MDX rendering: fragments, lines, member blocks, pages
//!   ↓
//! model     → SiteBuilder → Site: hierarchy, permalinks, sections, links
//!   ↓
//! config    → DoxygenConfig, SiteOptions
//!   ↓
//! schema    → Typed shapes for the Doxygen XML schema
//!   ↓
//! xml       → Attributed XmlNode trees over quick-xml
//!   ↓
//! base      → Primitives (CompoundId, member-id splitting, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → xml → schema → config → model → render → project)
// ============================================================================

/// Foundation types: CompoundId, member ids, constants
pub mod base;

/// Crate-wide error type
pub mod error;

/// XML reading: XmlNode trees
pub mod xml;

/// Schema node model: typed Doxygen shapes
pub mod schema;

/// Doxyfile lookup and site options
pub mod config;

/// Compound registry and cross-reference model
pub mod model;

/// MDX rendering
pub mod render;

/// Directory loading
pub mod project;

// Re-export foundation types
pub use base::{CompoundId, member_anchor, split_member_id};

// Re-export the main entry points
pub use config::{DoxygenConfig, SiteOptions};
pub use error::{DoxyError, Result};
pub use model::{CollectionKind, Compound, Site, SiteBuilder};
pub use project::load_site;
pub use render::RenderContext;
