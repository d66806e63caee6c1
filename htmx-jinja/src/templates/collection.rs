//! A single on-disk template collection backed by minijinja.

use std::fmt;
use std::path::{Path, PathBuf};

use minijinja::{path_loader, Environment};
use serde::Serialize;

use crate::error::Result;

/// A collection of templates loaded from a directory.
///
/// This is the unit the registry stores: a minijinja [`Environment`] with a
/// path loader rooted at `directory`. Template file names are resolved
/// relative to that root, so subdirectories work (`"emails/inbox.jinja2"`).
///
/// # Example
///
/// ```rust,no_run
/// use htmx_jinja::templates::Templates;
///
/// let templates = Templates::new("templates");
/// ```
pub struct Templates {
    environment: Environment<'static>,
    root: PathBuf,
}

impl Templates {
    /// Create a collection rooted at a template directory.
    ///
    /// The directory is not validated here; a missing directory or template
    /// surfaces as a render-time error.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        let root = directory.into();
        let mut environment = Environment::new();
        environment.set_loader(path_loader(&root));
        Self { environment, root }
    }

    /// The directory this collection loads templates from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Mutable access to the underlying environment.
    ///
    /// Use this before `htmx_init` to register custom filters, tests, or
    /// globals with minijinja.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.environment
    }

    /// Render a template file with the given context.
    pub fn render<S: Serialize>(&self, file_name: &str, context: S) -> Result<String> {
        let template = self.environment.get_template(file_name)?;
        Ok(template.render(context)?)
    }
}

impl fmt::Debug for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Templates").field("root", &self.root).finish()
    }
}
