//! Domain constants.

/// Name of the index document enumerating every compound.
pub const INDEX_FILE: &str = "index.xml";

/// Name of the build-configuration document.
pub const DOXYFILE_FILE: &str = "Doxyfile.xml";

/// Extension of per-compound documents (`<refid>.xml`).
pub const COMPOUND_EXTENSION: &str = "xml";

/// Marker Doxygen places between a compound id and a member anchor.
///
/// The same two characters also encode `::` inside compound ids
/// (`classns_1_1Foo`), which is why splitting uses the last occurrence.
pub const MEMBER_SEPARATOR: &str = "_1";

/// Default route segment under which all generated pages live.
pub const DEFAULT_BASE_ROUTE: &str = "api";

/// Path separator used inside permalinks.
pub const PATH_SEPARATOR: char = '/';

/// Scope separator used in qualified C++ names.
pub const SCOPE_SEPARATOR: &str = "::";

/// Id of the main page (`\mainpage`), whose inner pages stay top-level.
pub const MAIN_PAGE_ID: &str = "indexpage";

/// Character marking anonymous entities in Doxygen names (`@0`, `@1`).
pub const ANONYMOUS_MARKER: char = '@';
