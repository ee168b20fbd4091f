//! Error types for doxyforge.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = DoxyError> = std::result::Result<T, E>;

/// Errors that can occur while loading, modelling or rendering documentation.
#[derive(Debug, Error)]
pub enum DoxyError {
    /// IO error while reading an input document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML syntax error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Attribute absent or not convertible to the requested type.
    #[error("Missing {expected} attribute '@{attribute}' on <{element}>")]
    MissingAttribute {
        element: String,
        attribute: String,
        expected: &'static str,
    },

    /// Child element absent.
    #[error("Missing child <{child}> in <{element}>")]
    MissingChild { element: String, child: String },

    /// Unrecognized attribute, element, text or attribute value.
    ///
    /// Always fatal: the schema description is stale relative to the input.
    #[error("Schema violation in {shape}: unrecognized {item}")]
    SchemaViolation { shape: &'static str, item: String },

    /// A compound without a permalink was referenced as navigable.
    #[error("Compound '{0}' has no permalink but is referenced")]
    MissingPermalink(String),

    /// No renderer of the requested family handles the shape.
    #[error("No {family} renderer for {shape}")]
    Dispatch {
        shape: &'static str,
        family: &'static str,
    },

    /// Lookup of a compound id that is not registered.
    #[error("Unknown compound: {0}")]
    UnknownCompound(String),

    /// Invalid site options or build configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DoxyError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a missing attribute error.
    pub fn missing_attribute(
        element: impl Into<String>,
        attribute: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
            expected,
        }
    }

    /// Create a missing child error.
    pub fn missing_child(element: impl Into<String>, child: impl Into<String>) -> Self {
        Self::MissingChild {
            element: element.into(),
            child: child.into(),
        }
    }

    /// Unrecognized attribute `name` on `shape`.
    pub fn unknown_attribute(shape: &'static str, name: &str) -> Self {
        Self::SchemaViolation {
            shape,
            item: format!("@{name}"),
        }
    }

    /// Unrecognized child element `name` in `shape`.
    pub fn unknown_element(shape: &'static str, name: &str) -> Self {
        Self::SchemaViolation {
            shape,
            item: format!("<{name}>"),
        }
    }

    /// Unrecognized value of attribute `name` on `shape`.
    pub fn unknown_value(shape: &'static str, name: &str, value: &str) -> Self {
        Self::SchemaViolation {
            shape,
            item: format!("@{name}=\"{value}\""),
        }
    }

    /// Non-whitespace text inside a structural shape.
    pub fn unexpected_text(shape: &'static str) -> Self {
        Self::SchemaViolation {
            shape,
            item: "#text".to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
