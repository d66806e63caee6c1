//! Template configuration using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (prefix: HTMX_)
//! 2. Current working directory: ./htmx.toml
//! 3. Default values

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::templates::{
    htmx_init_with_extension, TemplateSource, Templates, DEFAULT_TEMPLATE_EXTENSION,
};

/// Template source configuration
///
/// An alternative to constructing [`Templates`] in code: describe the template
/// directories in `htmx.toml` or `HTMX_`-prefixed environment variables and
/// let [`TemplatesConfig::init`] register them.
///
/// ```toml
/// directory = "templates"
/// extension = "jinja2"
///
/// [collections]
/// app = "templates/app"
/// emails = "templates/emails"
/// ```
///
/// When `collections` is non-empty it takes precedence over `directory` and
/// routes must address templates with collection-qualified identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Directory of the single template collection
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File extension appended to template names
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Named template collections and their directories
    #[serde(default)]
    pub collections: HashMap<String, PathBuf>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
            collections: HashMap::new(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("templates")
}

fn default_extension() -> String {
    DEFAULT_TEMPLATE_EXTENSION.to_owned()
}

impl TemplatesConfig {
    /// Load configuration from defaults, `./htmx.toml`, and environment
    pub fn load() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }

    /// Load configuration from a specific TOML file plus environment
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("HTMX_"))
            .extract()?)
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("htmx.toml"))
            .merge(Env::prefixed("HTMX_"))
    }

    /// Materialize the configured template source
    #[must_use]
    pub fn into_source(self) -> TemplateSource {
        if self.collections.is_empty() {
            TemplateSource::Single(Templates::new(self.directory))
        } else {
            TemplateSource::Collections(
                self.collections
                    .into_iter()
                    .map(|(name, directory)| (name, Templates::new(directory)))
                    .collect(),
            )
        }
    }

    /// Register the configured source with the process-wide registry
    pub fn init(self) {
        let extension = self.extension.clone();
        htmx_init_with_extension(self.into_source(), extension);
    }
}
