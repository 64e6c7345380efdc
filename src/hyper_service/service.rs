use super::handler::{BoxHandler, Handler, Reply};
use super::{BoxError, BoxFuture, Request, Response};
use crate::extract::Params;
use crate::router::{Method, Router};

use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;
use hyper::{Body, StatusCode};

/// Serves a [`Router`] of async handlers.
///
/// Matching routes run in declaration order; a handler answering
/// [`Reply::Next`] passes the request on. When no handler responds the
/// default handler runs with empty params.
pub struct RouterService<H = BoxHandler> {
    router: Arc<Router<H>>,
    default: Arc<H>,
}

impl<H> Clone for RouterService<H> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
            default: Arc::clone(&self.default),
        }
    }
}

impl<H> Service<Request> for RouterService<H>
where
    H: Handler + Send + Sync + 'static,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let router = Arc::clone(&self.router);
        let default = Arc::clone(&self.default);

        Box::pin(async move {
            let method = req.method().as_str().to_owned();
            let path = req.uri().path().to_owned();
            let candidates: Vec<(&H, Params)> = router
                .matches(&method, &path)
                .map(|(h, caps)| (h, Params::new(&caps)))
                .collect();
            tracing::trace!(
                method = %method,
                path = %path,
                candidates = candidates.len(),
                "serving request"
            );

            let mut req = req;
            for (handler, params) in candidates {
                match handler.call(req, params).await? {
                    Reply::Respond(res) => return Ok(res),
                    Reply::Next(r) => req = r,
                }
            }

            match default.call(req, Params::empty()).await? {
                Reply::Respond(res) => Ok(res),
                Reply::Next(_) => Ok(not_found()),
            }
        })
    }
}

fn not_found() -> Response {
    let mut res = Response::new(Body::from("404 Not Found"));
    *res.status_mut() = StatusCode::NOT_FOUND;
    res
}

impl<H> RouterService<H> {
    pub fn new(default: H) -> Self {
        Self::from_router(Router::new(), default)
    }

    pub fn from_router(router: Router<H>, default: H) -> Self {
        Self {
            router: Arc::new(router),
            default: Arc::new(default),
        }
    }
}

impl Router<BoxHandler> {
    pub fn route(
        &mut self,
        method: Method,
        pattern: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> &mut Self {
        self.insert_method(method, pattern, Box::new(h))
    }

    pub fn any(&mut self, pattern: &str, h: impl Handler + Send + Sync + 'static) -> &mut Self {
        self.insert(pattern, Box::new(h))
    }

    pub fn with_default(self, default: impl Handler + Send + Sync + 'static) -> RouterService {
        RouterService::from_router(self, Box::new(default))
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(&mut self, pattern: &str, h: impl Handler + Send + Sync + 'static) -> &mut Self {
            self.route(Method::$method, pattern, h)
        }
    };
}

impl Router<BoxHandler> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
    define_method!(head, HEAD);
    define_method!(options, OPTIONS);
    define_method!(connect, CONNECT);
    define_method!(patch, PATCH);
    define_method!(trace, TRACE);
}
