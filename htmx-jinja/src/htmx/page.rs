//! The route wrapper: per-request classification and template dispatch.

use std::future::Future;
use std::sync::Arc;

use axum::extract::Request;
use axum::response::{Html, IntoResponse, Response};
use futures::future::BoxFuture;

use crate::error::{Error, Result};
use crate::templates::{render_template, TemplateId};

use super::payload::RenderPayload;
use super::request::{is_fullpage_request, HtmxRequest, RouteParams};

type ContextFuture = BoxFuture<'static, Result<RenderPayload>>;
type ContextFn = Arc<dyn Fn(RouteParams) -> ContextFuture + Send + Sync>;

/// Wrap a route with HTMX template dispatch.
///
/// `partial` is the template rendered for HTMX fragment requests. Chain
/// [`full`](HtmxPage::full) to serve direct navigation from the same route,
/// and [`partial_context`](HtmxPage::partial_context) /
/// [`full_context`](HtmxPage::full_context) to build the context without
/// involving the handler. Finish with [`handler`](HtmxPage::handler).
pub fn htmx(partial: impl Into<TemplateId>) -> HtmxPage {
    HtmxPage::new(partial)
}

/// Route specification for HTMX template dispatch.
///
/// See [`htmx`] for the usual way to construct one.
#[derive(Clone)]
pub struct HtmxPage {
    partial: TemplateId,
    full: Option<TemplateId>,
    partial_context: Option<ContextFn>,
    full_context: Option<ContextFn>,
    extension: Option<String>,
}

impl HtmxPage {
    /// Create a route specification with the given partial template.
    pub fn new(partial: impl Into<TemplateId>) -> Self {
        Self {
            partial: partial.into(),
            full: None,
            partial_context: None,
            full_context: None,
            extension: None,
        }
    }

    /// Template rendered for full-page (direct navigation) requests.
    ///
    /// Without one, a direct request to this route is answered with a 400
    /// error; fragments keep working.
    #[must_use]
    pub fn full(mut self, full: impl Into<TemplateId>) -> Self {
        self.full = Some(full.into());
        self
    }

    /// Context constructor invoked instead of the handler for fragment
    /// requests.
    #[must_use]
    pub fn partial_context<F, Fut>(mut self, constructor: F) -> Self
    where
        F: Fn(RouteParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RenderPayload>> + Send + 'static,
    {
        self.partial_context = Some(Arc::new(move |params| -> ContextFuture {
            Box::pin(constructor(params))
        }));
        self
    }

    /// Context constructor invoked instead of the handler for full-page
    /// requests.
    ///
    /// Together with [`partial_context`](Self::partial_context) this gives a
    /// route history and URL-rewriting support: the same parameters rebuild
    /// either render mode.
    #[must_use]
    pub fn full_context<F, Fut>(mut self, constructor: F) -> Self
    where
        F: Fn(RouteParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<RenderPayload>> + Send + 'static,
    {
        self.full_context = Some(Arc::new(move |params| -> ContextFuture {
            Box::pin(constructor(params))
        }));
        self
    }

    /// Override the template file extension for this route only.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Wrap a handler, producing an axum-compatible handler.
    ///
    /// The handler runs only when no context constructor covers the request's
    /// render mode. It receives an [`HtmxRequest`] with the `hx_request` flag
    /// already set.
    pub fn handler<H, Fut>(
        self,
        handler: H,
    ) -> impl Fn(Request) -> BoxFuture<'static, Result<Response>> + Clone + Send + Sync + 'static
    where
        H: Fn(HtmxRequest) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<RenderPayload>> + Send + 'static,
    {
        move |request: Request| -> BoxFuture<'static, Result<Response>> {
            let page = self.clone();
            let handler = handler.clone();
            Box::pin(async move { page.dispatch(request, handler).await })
        }
    }

    async fn dispatch<H, Fut>(self, request: Request, handler: H) -> Result<Response>
    where
        H: Fn(HtmxRequest) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<RenderPayload>> + Send + 'static,
    {
        let (mut parts, _body) = request.into_parts();
        let params = RouteParams::from_parts(&mut parts).await;
        let fullpage = is_fullpage_request(&parts.headers);
        let request = HtmxRequest::from_parts(&parts, params.clone(), !fullpage);

        let payload = match (fullpage, &self.full_context, &self.partial_context) {
            (true, Some(constructor), _) => constructor(params).await?,
            (false, _, Some(constructor)) => constructor(params).await?,
            _ => handler(request.clone()).await?,
        };

        let vars = match payload {
            RenderPayload::Raw(response) => {
                tracing::debug!(
                    status = %response.status(),
                    "payload is not a template context, returning it unchanged"
                );
                return Ok(response);
            }
            RenderPayload::Vars(vars) => vars,
        };
        if vars.is_empty() {
            tracing::debug!("no context provided for route, rendering with an empty one");
        }

        let template = if fullpage {
            match &self.full {
                Some(template) => template,
                None => return Err(Error::MissingFullPageTemplate),
            }
        } else {
            &self.partial
        };

        let mut context = vars;
        // Inserted after the payload so a payload key named `request` can
        // never shadow the request object.
        context.insert("request".to_owned(), request.context_value());

        let html = render_template(template, self.extension.as_deref(), &context)?;
        Ok(Html(html).into_response())
    }
}
