//! HTMX request classification and route dispatch.
//!
//! The core of the crate: [`htmx`] wraps a route handler with a partial and an
//! optional full-page template. Each request is classified from the
//! `HX-Request` header, the matching context constructor (or the handler
//! itself) produces the template context, and the rendered output is returned
//! as the response body. Raw responses (redirects etc.) pass through
//! untouched.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use htmx_jinja::prelude::*;
//!
//! fn customers_context() -> Result<RenderPayload> {
//!     RenderPayload::vars(json!({ "customers": ["John Doe", "Jane Doe"] }))
//! }
//!
//! fn index_context() -> Result<RenderPayload> {
//!     RenderPayload::vars(json!({
//!         "greeting": "Hello World",
//!         "customers": ["John Doe", "Jane Doe"],
//!     }))
//! }
//!
//! async fn customers(_request: HtmxRequest) -> Result<RenderPayload> {
//!     Ok(RenderPayload::empty())
//! }
//!
//! let app: Router = Router::new().route(
//!     "/customers",
//!     get(htmx("customers")
//!         .full("index")
//!         .partial_context(|_params| async { customers_context() })
//!         .full_context(|_params| async { index_context() })
//!         .handler(customers)),
//! );
//! ```

mod page;
mod payload;
mod request;

pub use page::{htmx, HtmxPage};
pub use payload::RenderPayload;
pub use request::{is_fullpage_request, is_htmx_request, HtmxRequest, RouteParams};

// Re-export response headers from axum-htmx
pub use axum_htmx::{
    HxLocation, HxPushUrl, HxRedirect, HxRefresh, HxReplaceUrl, HxReselect, HxResponseTrigger,
    HxReswap, HxRetarget, SwapOption,
};
