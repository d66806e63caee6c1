//! End-to-end dispatch tests against a single template collection.

use std::sync::LazyLock;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tempfile::TempDir;
use tower::ServiceExt;

use htmx_jinja::prelude::*;

static TEMPLATES: LazyLock<TempDir> = LazyLock::new(|| {
    let dir = tempfile::tempdir().expect("create template dir");
    std::fs::write(
        dir.path().join("index.jinja2"),
        "<html><body><h1>{{ greeting }}</h1>{% include \"customers.jinja2\" %}</body></html>",
    )
    .expect("write index template");
    std::fs::write(
        dir.path().join("customers.jinja2"),
        "<ul>{% for customer in customers %}<li>{{ customer }}</li>{% endfor %}</ul>",
    )
    .expect("write customers template");
    std::fs::write(
        dir.path().join("email.jinja2"),
        "<p>{{ email_id }}</p><span>{{ heading }}</span>",
    )
    .expect("write email template");
    std::fs::write(dir.path().join("probe.jinja2"), "<span>{{ request.path }}</span>")
        .expect("write probe template");
    std::fs::write(dir.path().join("notice.html"), "<aside>{{ message }}</aside>")
        .expect("write notice template");
    htmx_init(Templates::new(dir.path()));
    dir
});

fn index_context() -> Result<RenderPayload> {
    RenderPayload::vars(json!({
        "greeting": "Hello World",
        "customers": ["John Doe", "Jane Doe"],
    }))
}

fn customers_context() -> Result<RenderPayload> {
    RenderPayload::vars(json!({ "customers": ["John Doe", "Jane Doe"] }))
}

async fn root_page(_request: HtmxRequest) -> Result<RenderPayload> {
    index_context()
}

async fn unreached(_request: HtmxRequest) -> Result<RenderPayload> {
    Ok(RenderPayload::empty())
}

async fn legacy(_request: HtmxRequest) -> Result<RenderPayload> {
    Ok(Redirect::to("/").into())
}

async fn email(request: HtmxRequest) -> Result<RenderPayload> {
    RenderPayload::vars(json!({
        "email_id": request.params().get("id"),
        "heading": request.params().get("heading"),
    }))
}

async fn probe(_request: HtmxRequest) -> Result<RenderPayload> {
    // Tries to shadow the reserved `request` key; the real request must win.
    RenderPayload::vars(json!({ "request": "bogus" }))
}

async fn notice(_request: HtmxRequest) -> Result<RenderPayload> {
    RenderPayload::vars(json!({ "message": "maintenance tonight" }))
}

fn app() -> Router {
    LazyLock::force(&TEMPLATES);
    Router::new()
        .route("/", get(htmx("index").full("index").handler(root_page)))
        .route(
            "/customers",
            get(htmx("customers")
                .full("index")
                .partial_context(|_params: RouteParams| async { customers_context() })
                .full_context(|_params: RouteParams| async { index_context() })
                .handler(unreached)),
        )
        .route(
            "/customers-async",
            get(htmx("customers")
                .full("index")
                .partial_context(|_params: RouteParams| async {
                    tokio::time::sleep(Duration::ZERO).await;
                    customers_context()
                })
                .full_context(|_params: RouteParams| async {
                    tokio::time::sleep(Duration::ZERO).await;
                    index_context()
                })
                .handler(unreached)),
        )
        .route("/fragment-only", get(htmx("customers").handler(unreached)))
        .route("/legacy", get(htmx("index").full("index").handler(legacy)))
        .route("/email/{id}", get(htmx("email").full("email").handler(email)))
        .route("/probe", get(htmx("probe").full("probe").handler(probe)))
        .route(
            "/notice",
            get(htmx("notice")
                .full("notice")
                .extension("html")
                .handler(notice)),
        )
        .route(
            "/qualified",
            get(htmx(TemplateSpec::new("app", "customers"))
                .full(TemplateSpec::new("app", "index"))
                .partial_context(|_params: RouteParams| async { customers_context() })
                .full_context(|_params: RouteParams| async { index_context() })
                .handler(unreached)),
        )
}

async fn get_response(uri: &str, hx_request: Option<&str>) -> axum::response::Response {
    let mut request = Request::builder().uri(uri);
    if let Some(value) = hx_request {
        request = request.header("HX-Request", value);
    }
    app()
        .oneshot(request.body(Body::empty()).expect("build request"))
        .await
        .expect("infallible")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn full_page_renders_the_wrapper() {
    let response = get_response("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<h1>Hello World</h1>"));
    assert!(body.contains("<li>John Doe</li>"));
    assert!(body.contains("<li>Jane Doe</li>"));
}

#[tokio::test]
async fn constructors_rebuild_the_full_page() {
    let response = get_response("/customers", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<h1>Hello World</h1>"));
    assert!(body.contains("<li>John Doe</li>"));
}

#[tokio::test]
async fn fragment_request_omits_the_wrapper() {
    let response = get_response("/customers", Some("true")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(!body.contains("<h1>Hello World</h1>"));
    assert!(body.contains("<li>John Doe</li>"));
    assert!(body.contains("<li>Jane Doe</li>"));
}

#[tokio::test]
async fn classification_is_case_insensitive() {
    let fragment = body_text(get_response("/customers", Some("TRUE")).await).await;
    assert!(!fragment.contains("<h1>Hello World</h1>"));

    let full = body_text(get_response("/customers", Some("false")).await).await;
    assert!(full.contains("<h1>Hello World</h1>"));
}

#[tokio::test]
async fn async_constructors_match_their_sync_equivalents() {
    for hx_request in [None, Some("true")] {
        let ready = body_text(get_response("/customers", hx_request).await).await;
        let suspended = body_text(get_response("/customers-async", hx_request).await).await;
        assert_eq!(ready, suspended);
    }
}

#[tokio::test]
async fn direct_access_without_full_template_is_a_client_error() {
    let response = get_response("/fragment-only", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("Resource cannot be accessed directly."));
    assert!(body.contains("DIRECT_ACCESS"));
}

#[tokio::test]
async fn fragment_access_without_full_template_still_works() {
    let response = get_response("/fragment-only", Some("true")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn raw_payloads_skip_templating() {
    let response = get_response("/legacy", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/")
    );
}

#[tokio::test]
async fn handlers_see_path_and_query_params() {
    let response = get_response("/email/123?heading=Inbox", Some("true")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<p>123</p>"));
    assert!(body.contains("<span>Inbox</span>"));
}

#[tokio::test]
async fn reserved_request_key_is_never_shadowed() {
    let body = body_text(get_response("/probe", None).await).await;
    assert_eq!(body, "<span>/probe</span>");
}

#[tokio::test]
async fn route_extension_overrides_the_registered_default() {
    // Only `notice.html` exists; the `jinja2` default would be a 500 here.
    for hx_request in [None, Some("true")] {
        let response = get_response("/notice", hx_request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert_eq!(body, "<aside>maintenance tonight</aside>");
    }
}

#[tokio::test]
async fn collection_qualified_id_resolves_against_the_single_source() {
    // The `app` qualifier names no registered collection; with a single
    // source only the template name part is used.
    let fragment = body_text(get_response("/qualified", Some("true")).await).await;
    assert!(fragment.contains("<li>John Doe</li>"));
    assert!(!fragment.contains("<h1>Hello World</h1>"));

    let full = body_text(get_response("/qualified", None).await).await;
    assert!(full.contains("<h1>Hello World</h1>"));
    assert!(full.contains("<li>Jane Doe</li>"));
}
