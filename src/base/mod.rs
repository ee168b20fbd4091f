//! Foundation types for doxyforge.
//!
//! This module provides the primitives shared by every other layer:
//! - [`CompoundId`] - Stable compound identifiers (`refid` in Doxygen XML)
//! - [`split_member_id`] - Page prefix / anchor split of member identifiers
//! - Domain constants (file names, routes, separator markers)
//!
//! This module has NO dependencies on other doxyforge modules.

pub mod constants;
mod ids;

pub use ids::{CompoundId, member_anchor, split_member_id};
