//! Process-wide template registry.

use std::sync::{PoisonError, RwLock};

use serde_json::{Map, Value};

use crate::error::{Error, Result};

use super::{TemplateId, TemplateSource};

/// File extension appended to template names unless overridden.
pub const DEFAULT_TEMPLATE_EXTENSION: &str = "jinja2";

struct Registry {
    source: TemplateSource,
    extension: String,
}

// Write-once at startup, read on every request. Re-initializing while
// requests are in flight is not supported.
static REGISTRY: RwLock<Option<Registry>> = RwLock::new(None);

/// Register the template source, with the default `jinja2` file extension.
///
/// Must be called once before any decorated route executes. Calling it again
/// replaces the previous source. Contents are not validated here; a bad
/// directory or collection key surfaces on first use.
///
/// # Example
///
/// ```rust,no_run
/// use htmx_jinja::prelude::*;
///
/// htmx_init(Templates::new("templates"));
/// ```
pub fn htmx_init(source: impl Into<TemplateSource>) {
    htmx_init_with_extension(source, DEFAULT_TEMPLATE_EXTENSION);
}

/// Register the template source with a custom default file extension.
///
/// The extension can still be overridden per route via
/// [`HtmxPage::extension`](crate::htmx::HtmxPage::extension).
pub fn htmx_init_with_extension(source: impl Into<TemplateSource>, extension: impl Into<String>) {
    let registry = Registry {
        source: source.into(),
        extension: extension.into(),
    };
    tracing::debug!(extension = %registry.extension, "template source registered");
    *REGISTRY.write().unwrap_or_else(PoisonError::into_inner) = Some(registry);
}

/// Resolve a template identifier against the registry and render it.
///
/// `extension` is the route-level override; when absent the extension given
/// at init time applies. The renderable file name is
/// `"{template_name}.{extension}"`.
pub fn render_template(
    id: &TemplateId,
    extension: Option<&str>,
    context: &Map<String, Value>,
) -> Result<String> {
    let guard = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    let registry = guard.as_ref().ok_or(Error::TemplatesNotInitialized)?;

    let collection = match (&registry.source, id) {
        (TemplateSource::Collections(collections), TemplateId::Spec(spec)) => {
            collections.get(&spec.collection).ok_or_else(|| {
                Error::InvalidTemplateSource(format!(
                    "no template collection named `{}` was registered; \
                     pass all collections used in route decorators to htmx_init()",
                    spec.collection
                ))
            })?
        }
        (TemplateSource::Collections(_), TemplateId::Name(name)) => {
            return Err(Error::InvalidTemplateSource(format!(
                "template `{name}` does not name a collection, \
                 but htmx_init() registered multiple collections"
            )));
        }
        (TemplateSource::Single(collection), _) => collection,
    };

    let extension = extension.unwrap_or(&registry.extension);
    let file_name = format!("{}.{}", id.template_name(), extension);
    collection.render(&file_name, context)
}
