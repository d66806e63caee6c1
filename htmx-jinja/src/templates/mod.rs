//! Template collections and the process-wide template registry.
//!
//! A [`Templates`] value wraps a minijinja environment rooted at a template
//! directory. Routes refer to templates by [`TemplateId`]: either a bare name
//! resolved against a single collection, or a [`TemplateSpec`] naming one of
//! several collections registered under distinct keys.
//!
//! The registry is set up once at startup via [`htmx_init`] (or
//! [`htmx_init_with_extension`]) and read on every dispatched request.
//! Re-initializing while requests are in flight is not supported.

mod collection;
mod registry;
mod source;

pub use collection::Templates;
pub use registry::{
    htmx_init, htmx_init_with_extension, render_template, DEFAULT_TEMPLATE_EXTENSION,
};
pub use source::{TemplateId, TemplateSource, TemplateSpec};
