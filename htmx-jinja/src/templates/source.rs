//! Template source and identifier types.

use std::collections::HashMap;
use std::fmt;

use super::Templates;

/// The process-wide template source registered at startup.
///
/// Most applications use a single template directory. Larger ones can split
/// templates into several collections (per app area, per crate) and address
/// them by name with [`TemplateSpec`].
#[derive(Debug)]
pub enum TemplateSource {
    /// One template collection; routes use bare template names.
    Single(Templates),
    /// Multiple named collections; routes address them via [`TemplateSpec`].
    Collections(HashMap<String, Templates>),
}

impl From<Templates> for TemplateSource {
    fn from(templates: Templates) -> Self {
        TemplateSource::Single(templates)
    }
}

impl From<HashMap<String, Templates>> for TemplateSource {
    fn from(collections: HashMap<String, Templates>) -> Self {
        TemplateSource::Collections(collections)
    }
}

/// A template addressed inside a named collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    /// Key of the collection as registered with `htmx_init`.
    pub collection: String,
    /// Template name within that collection, without file extension.
    pub template: String,
}

impl TemplateSpec {
    /// Create a spec addressing `template` inside `collection`.
    pub fn new(collection: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            template: template.into(),
        }
    }
}

/// Identifies the template a route renders.
///
/// Either a bare template name (single-collection setups) or a
/// collection-qualified [`TemplateSpec`]. The file extension is appended at
/// render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateId {
    /// A bare template name, resolved against the single registered collection.
    Name(String),
    /// A (collection, template) pair, resolved against named collections.
    Spec(TemplateSpec),
}

impl TemplateId {
    /// The template name without collection qualifier or extension.
    #[must_use]
    pub fn template_name(&self) -> &str {
        match self {
            TemplateId::Name(name) => name,
            TemplateId::Spec(spec) => &spec.template,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateId::Name(name) => write!(f, "{name}"),
            TemplateId::Spec(spec) => write!(f, "{}:{}", spec.collection, spec.template),
        }
    }
}

impl From<&str> for TemplateId {
    fn from(name: &str) -> Self {
        TemplateId::Name(name.to_owned())
    }
}

impl From<String> for TemplateId {
    fn from(name: String) -> Self {
        TemplateId::Name(name)
    }
}

impl From<TemplateSpec> for TemplateId {
    fn from(spec: TemplateSpec) -> Self {
        TemplateId::Spec(spec)
    }
}

impl From<(&str, &str)> for TemplateId {
    fn from((collection, template): (&str, &str)) -> Self {
        TemplateId::Spec(TemplateSpec::new(collection, template))
    }
}
