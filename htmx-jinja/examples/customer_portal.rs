//! Customer Portal Example
//!
//! A small server-rendered app demonstrating partial/full template dispatch:
//!
//! - `/` renders the full page
//! - `/customers` serves the customer list both as an HTMX fragment and,
//!   via its context constructors, as a full page for direct navigation
//! - `/about` handles `HX-Request` manually with the `HtmxRequest` extractor
//! - `/legacy` shows redirect passthrough
//!
//! ## Running
//!
//! ```bash
//! cargo run --example customer-portal
//! ```
//!
//! Then open http://localhost:8080 in your browser.

use axum::http::Uri;
use htmx_jinja::prelude::*;

fn customers_context() -> Result<RenderPayload> {
    RenderPayload::vars(json!({ "customers": ["John Doe", "Jane Doe"] }))
}

fn index_context() -> Result<RenderPayload> {
    RenderPayload::vars(json!({
        "greeting": "Hello World",
        "customers": ["John Doe", "Jane Doe"],
    }))
}

async fn root_page(_request: HtmxRequest) -> Result<RenderPayload> {
    index_context()
}

async fn customers(_request: HtmxRequest) -> Result<RenderPayload> {
    // Only reached when a context constructor does not cover the render mode.
    Ok(RenderPayload::empty())
}

async fn legacy(_request: HtmxRequest) -> Result<RenderPayload> {
    Ok(Redirect::to("/").into())
}

/// A plain axum handler using `HtmxRequest` as an extractor.
async fn about(request: HtmxRequest) -> impl IntoResponse {
    let fragment = "<section><h2>About</h2><p>A tiny HTMX demo.</p></section>";
    if request.hx_request {
        (HxPushUrl(Uri::from_static("/about").to_string()), Html(fragment.to_owned())).into_response()
    } else {
        Html(format!("<html><body>{fragment}</body></html>")).into_response()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    htmx_init(Templates::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/examples/templates"
    )));

    let app = Router::new()
        .route("/", get(htmx("index").full("index").handler(root_page)))
        .route(
            "/customers",
            get(htmx("customers")
                .full("index")
                .partial_context(|_params: RouteParams| async { customers_context() })
                .full_context(|_params: RouteParams| async { index_context() })
                .handler(customers)),
        )
        .route("/about", get(about))
        .route("/legacy", get(htmx("index").full("index").handler(legacy)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
    info!("customer portal listening on http://127.0.0.1:8080");
    axum::serve(listener, app).await?;
    Ok(())
}
