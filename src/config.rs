//! Configuration: what Doxygen ran with, and how the site is laid out.
//!
//! ```text
//! Doxyfile.xml ──▶ Doxyfile ──▶ DoxygenConfig   (read-only lookup)
//! site.json    ──────────────▶ SiteOptions     (serde, all fields defaulted)
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::base::constants::DEFAULT_BASE_ROUTE;
use crate::error::{DoxyError, Result};
use crate::schema::Doxyfile;

// ============================================================================
// Doxyfile options
// ============================================================================

/// Flat view over the options of `Doxyfile.xml`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DoxygenConfig {
    options: IndexMap<String, Vec<String>>,
}

impl DoxygenConfig {
    pub fn from_doxyfile(doxyfile: &Doxyfile) -> Self {
        let options = doxyfile
            .options
            .iter()
            .map(|o| (o.id.clone(), o.values.clone()))
            .collect();
        Self { options }
    }

    /// Builder: set an option.
    pub fn with_option(mut self, id: impl Into<String>, values: &[&str]) -> Self {
        self.options
            .insert(id.into(), values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// First value of an option, if it has one.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.options
            .get(id)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// All values of an option (empty when absent).
    pub fn get_list(&self, id: &str) -> &[String] {
        self.options.get(id).map_or(&[], Vec::as_slice)
    }

    /// Doxygen booleans are spelled `YES` / `NO`.
    pub fn get_bool(&self, id: &str) -> Option<bool> {
        match self.get(id)?.trim().to_ascii_uppercase().as_str() {
            "YES" | "TRUE" => Some(true),
            "NO" | "FALSE" => Some(false),
            _ => None,
        }
    }

    pub fn project_name(&self) -> Option<&str> {
        self.get("PROJECT_NAME").filter(|s| !s.is_empty())
    }

    pub fn project_brief(&self) -> Option<&str> {
        self.get("PROJECT_BRIEF").filter(|s| !s.is_empty())
    }

    pub fn project_number(&self) -> Option<&str> {
        self.get("PROJECT_NUMBER").filter(|s| !s.is_empty())
    }
}

// ============================================================================
// Site options
// ============================================================================

fn default_base_route() -> String {
    DEFAULT_BASE_ROUTE.to_string()
}

fn default_true() -> bool {
    true
}

/// Layout choices for the generated pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteOptions {
    /// First URL segment of every page (`/api/classes/...`).
    #[serde(default = "default_base_route")]
    pub base_route: String,

    /// Append `Definition at line N of file F` to member blocks.
    #[serde(default = "default_true")]
    pub show_source_locations: bool,

    /// Render file program listings on file pages.
    #[serde(default)]
    pub show_program_listing: bool,

    /// Overrides `PROJECT_BRIEF` from the Doxyfile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_brief: Option<String>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            base_route: default_base_route(),
            show_source_locations: true,
            show_program_listing: false,
            project_brief: None,
        }
    }
}

impl SiteOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| DoxyError::config(format!("Invalid site options: {e}")))?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_base_route(mut self, route: impl Into<String>) -> Self {
        self.base_route = route.into();
        self
    }

    pub fn with_program_listing(mut self, show: bool) -> Self {
        self.show_program_listing = show;
        self
    }

    /// The base route without surrounding slashes.
    pub fn route(&self) -> &str {
        self.base_route.trim_matches('/')
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.route().is_empty() {
            return Err(DoxyError::config("baseRoute must not be empty"));
        }
        if self.route().chars().any(char::is_whitespace) {
            return Err(DoxyError::config(format!(
                "baseRoute '{}' must not contain whitespace",
                self.base_route
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DoxyfileOption, OptionType};

    #[test]
    fn test_doxygen_config_lookup() {
        let doxyfile = Doxyfile {
            version: "1.9.8".to_string(),
            lang: None,
            options: vec![
                DoxyfileOption {
                    id: "PROJECT_NAME".to_string(),
                    ty: OptionType::String,
                    is_default: false,
                    values: vec!["Demo".to_string()],
                },
                DoxyfileOption {
                    id: "EXTRACT_ALL".to_string(),
                    ty: OptionType::Bool,
                    is_default: true,
                    values: vec!["NO".to_string()],
                },
                DoxyfileOption {
                    id: "PROJECT_BRIEF".to_string(),
                    ty: OptionType::String,
                    is_default: true,
                    values: vec![],
                },
            ],
        };
        let config = DoxygenConfig::from_doxyfile(&doxyfile);
        assert_eq!(config.project_name(), Some("Demo"));
        assert_eq!(config.get_bool("EXTRACT_ALL"), Some(false));
        assert_eq!(config.project_brief(), None);
        assert!(config.get_list("INPUT").is_empty());
    }

    #[test]
    fn test_site_options_defaults() {
        let options = SiteOptions::from_json_str("{}").unwrap();
        assert_eq!(options, SiteOptions::default());
        assert_eq!(options.route(), "api");
        assert!(options.show_source_locations);
        assert!(!options.show_program_listing);
    }

    #[test]
    fn test_site_options_from_json() {
        let options = SiteOptions::from_json_str(
            r#"{"baseRoute": "/reference/", "showProgramListing": true, "projectBrief": "Fast"}"#,
        )
        .unwrap();
        assert_eq!(options.route(), "reference");
        assert!(options.show_program_listing);
        assert_eq!(options.project_brief.as_deref(), Some("Fast"));
    }

    #[test]
    fn test_site_options_errors() {
        assert!(matches!(
            SiteOptions::from_json_str("{\"baseRoute\": 3}"),
            Err(DoxyError::Config(_))
        ));
        assert!(SiteOptions::from_json_str("{\"baseRoute\": \"/\"}").is_err());
    }
}
