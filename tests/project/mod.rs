//! Directory loading tests
//!
//! - index.xml drives which compound documents are read
//! - Doxyfile.xml feeds the project configuration
//! - load failures surface as typed errors

pub mod tests_load_site;
