//! Compound identifiers.

use std::sync::Arc;

use super::constants::MEMBER_SEPARATOR;

/// Unique identifier for a compound.
///
/// This corresponds to `refid` / `id` in Doxygen XML (`classfoo`,
/// `namespacens_1_1inner`, `dir_68267d1309a1af8e8297ef4c3efbcdba`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompoundId(pub Arc<str>);

impl CompoundId {
    /// Create a new compound ID.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CompoundId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CompoundId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::borrow::Borrow<str> for CompoundId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Split a member identifier into its page prefix and in-page anchor.
///
/// The anchor is everything after the last `_1` marker. Trailing markers left
/// on the prefix are trimmed, so `classA_1_1methodB` yields
/// `("classA", "methodB")` and `classfoo_1a3f2` yields `("classfoo", "a3f2")`.
///
/// Returns `None` when the identifier carries no marker or either side is
/// empty.
pub fn split_member_id(refid: &str) -> Option<(&str, &str)> {
    let pos = refid.rfind(MEMBER_SEPARATOR)?;
    let anchor = &refid[pos + MEMBER_SEPARATOR.len()..];
    let mut prefix = &refid[..pos];
    while let Some(stripped) = prefix.strip_suffix(MEMBER_SEPARATOR) {
        prefix = stripped;
    }
    if prefix.is_empty() || anchor.is_empty() {
        return None;
    }
    Some((prefix, anchor))
}

/// The in-page anchor of a member identifier, or the whole id when it has no
/// page prefix.
pub fn member_anchor(refid: &str) -> &str {
    split_member_id(refid).map_or(refid, |(_, anchor)| anchor)
}
