//! # htmx-jinja
//!
//! HTMX-aware template dispatch for axum route handlers, rendered with minijinja.
//!
//! A page route in an HTMX application answers two kinds of requests: direct
//! navigation, which needs the full page, and HTMX fragment requests, which
//! need only the partial the front end is swapping in. This crate wraps a
//! handler once with both template names and picks the right one per request
//! by inspecting the `HX-Request` header.
//!
//! ## Features
//!
//! - **Partial/full dispatch**: one route, two templates, chosen per request
//! - **Context constructors**: optional async callables that build the template
//!   context for either render mode, enabling URL rewriting and history support
//! - **Passthrough responses**: redirects and other raw responses skip templating
//! - **Template collections**: a single template directory or several named ones
//! - **Typed errors**: misconfiguration surfaces as 4xx/5xx JSON error responses
//!
//! ## Example
//!
//! ```rust,no_run
//! use htmx_jinja::prelude::*;
//!
//! fn customers_context() -> Result<RenderPayload> {
//!     RenderPayload::vars(json!({ "customers": ["John Doe", "Jane Doe"] }))
//! }
//!
//! async fn customers(_request: HtmxRequest) -> Result<RenderPayload> {
//!     customers_context()
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Register the template directory once, before serving traffic.
//!     htmx_init(Templates::new("templates"));
//!
//!     let app = Router::new().route(
//!         "/customers",
//!         get(htmx("customers").full("index").handler(customers)),
//!     );
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! Templates are resolved on disk as `"{name}.{extension}"` inside the
//! configured directory, with `jinja2` as the default extension.

pub mod config;
pub mod error;
pub mod htmx;
pub mod templates;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::TemplatesConfig;

    pub use crate::error::{Error, ErrorResponse, Result};

    pub use crate::htmx::{
        htmx, is_fullpage_request, is_htmx_request, HtmxPage, HtmxRequest, RenderPayload,
        RouteParams,
    };

    pub use crate::templates::{
        htmx_init, htmx_init_with_extension, TemplateId, TemplateSource, TemplateSpec, Templates,
        DEFAULT_TEMPLATE_EXTENSION,
    };

    // HTMX response headers (from axum-htmx)
    pub use crate::htmx::{
        HxLocation, HxPushUrl, HxRedirect, HxRefresh, HxReplaceUrl, HxReselect, HxResponseTrigger,
        HxReswap, HxRetarget, SwapOption,
    };

    pub use axum::{
        http::{HeaderMap, HeaderValue, StatusCode},
        response::{Html, IntoResponse, Redirect, Response},
        routing::{delete, get, patch, post, put},
        Router,
    };

    pub use serde::{Deserialize, Serialize};
    pub use serde_json::json;

    // Re-export tracing macros
    pub use tracing::{debug, error, info, trace, warn};
}
