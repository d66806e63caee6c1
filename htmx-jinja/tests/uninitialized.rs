//! Dispatch without `htmx_init` must fail loudly, not render.
//!
//! Lives in its own test binary so no other test can initialize the
//! process-wide registry first.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use htmx_jinja::prelude::*;

async fn root_page(_request: HtmxRequest) -> Result<RenderPayload> {
    Ok(RenderPayload::empty())
}

fn app() -> Router {
    Router::new().route("/", get(htmx("index").full("index").handler(root_page)))
}

#[tokio::test]
async fn missing_init_is_a_server_error() {
    for hx_request in [None, Some("true")] {
        let mut request = Request::builder().uri("/");
        if let Some(value) = hx_request {
            request = request.header("HX-Request", value);
        }
        let response = app()
            .oneshot(request.body(Body::empty()).expect("build request"))
            .await
            .expect("infallible");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        let body = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
        assert!(body.contains("TEMPLATES_NOT_INITIALIZED"));
    }
}
