//! Request classification and the handler-facing request view.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query, RawPathParams};
use axum::http::{request::Parts, HeaderMap, Method, Uri};
use serde_json::{json, Value};

/// Check whether a header set marks an HTMX fragment request.
///
/// Only an `HX-Request` header whose value case-insensitively equals `true`
/// counts. An absent header, an empty value, or any other value means direct
/// navigation.
#[must_use]
pub fn is_htmx_request(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Check whether a header set marks a full-page (direct navigation) request.
///
/// The inverse of [`is_htmx_request`].
#[must_use]
pub fn is_fullpage_request(headers: &HeaderMap) -> bool {
    !is_htmx_request(headers)
}

/// Path and query parameters of the matched route.
///
/// This is what context constructors receive instead of the request itself:
/// enough to rebuild the same context for both render modes of a route.
#[derive(Debug, Clone, Default)]
pub struct RouteParams {
    path: HashMap<String, String>,
    query: HashMap<String, String>,
}

impl RouteParams {
    /// Look up a parameter by name, path parameters first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.path
            .get(name)
            .or_else(|| self.query.get(name))
            .map(String::as_str)
    }

    /// Parameters captured from the route path.
    #[must_use]
    pub fn path_params(&self) -> &HashMap<String, String> {
        &self.path
    }

    /// Parameters parsed from the query string.
    #[must_use]
    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query
    }

    pub(crate) async fn from_parts(parts: &mut Parts) -> Self {
        let path = match RawPathParams::from_request_parts(parts, &()).await {
            Ok(params) => params
                .iter()
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
            Err(_) => HashMap::new(),
        };
        let query = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map(|Query(query)| query)
            .unwrap_or_default();
        Self { path, query }
    }
}

/// The request view handed to wrapped handlers.
///
/// Carries the pieces of the request a page handler actually needs, plus the
/// `hx_request` flag the dispatcher sets before the handler runs. Also usable
/// as a standalone axum extractor for routes that handle `HX-Request`
/// manually:
///
/// ```rust,ignore
/// async fn email(request: HtmxRequest) -> impl IntoResponse {
///     if request.hx_request {
///         // render the fragment
///     } else {
///         // render the whole page
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HtmxRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    params: RouteParams,
    /// Whether this request was classified as an HTMX fragment request.
    pub hx_request: bool,
}

impl HtmxRequest {
    pub(crate) fn from_parts(parts: &Parts, params: RouteParams, hx_request: bool) -> Self {
        Self {
            method: parts.method.clone(),
            uri: parts.uri.clone(),
            headers: parts.headers.clone(),
            params,
            hx_request,
        }
    }

    /// The request method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request URI.
    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// The request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Path and query parameters of the matched route.
    #[must_use]
    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// The value rendered under the reserved `request` template key.
    pub(crate) fn context_value(&self) -> Value {
        json!({
            "method": self.method.as_str(),
            "path": self.uri.path(),
            "query_string": self.uri.query(),
            "path_params": self.params.path,
            "query_params": self.params.query,
            "hx_request": self.hx_request,
        })
    }
}

impl<S> FromRequestParts<S> for HtmxRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = RouteParams::from_parts(parts).await;
        let hx_request = is_htmx_request(&parts.headers);
        Ok(Self::from_parts(parts, params, hx_request))
    }
}
