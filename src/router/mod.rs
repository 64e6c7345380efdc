mod router_macro;

use crate::dispatcher::{Flow, RequestContext, Resolution};
use crate::error::{DispatchError, RouteError};
use crate::extract::FromCaptures;
use crate::matcher::{join_prefix, Captures, Matcher};

use std::fmt;

pub use http::Method;

/// Routes compiled once at registration, tried in declaration order.
#[derive(Debug)]
pub struct Router<T> {
    routes: Vec<Route<T>>,
}

#[derive(Debug)]
struct Route<T> {
    method: Option<Method>,
    matcher: Matcher,
    data: T,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.routes.clear();
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The first route matching `method` and `path`.
    pub fn find<'a>(&'a self, method: &'a str, path: &'a str) -> Option<(&'a T, Captures<'a>)> {
        self.matches(method, path).next()
    }

    /// Every route matching `method` and `path`, in declaration order.
    pub fn matches<'a>(&'a self, method: &'a str, path: &'a str) -> Matches<'a, T> {
        Matches {
            routes: self.routes.iter(),
            method,
            path,
        }
    }

    /// Inserts a route for any method.
    pub fn insert(&mut self, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.push(None, pattern, data, &[]) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_insert(&mut self, pattern: &str, data: T) -> Result<&mut Self, RouteError> {
        self.push(None, pattern, data, &[])?;
        Ok(self)
    }

    pub fn insert_method(&mut self, method: Method, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.push(Some(method), pattern, data, &[]) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_insert_method(
        &mut self,
        method: Method,
        pattern: &str,
        data: T,
    ) -> Result<&mut Self, RouteError> {
        self.push(Some(method), pattern, data, &[])?;
        Ok(self)
    }

    /// Moves every route of `router` under `prefix`.
    pub fn insert_router(&mut self, prefix: &str, router: Router<T>) -> &mut Self {
        if let Err(e) = self.try_insert_router(prefix, router) {
            panic!("{}: pattern = {:?}", e, prefix);
        }
        self
    }

    pub fn try_insert_router(
        &mut self,
        prefix: &str,
        router: Router<T>,
    ) -> Result<&mut Self, RouteError> {
        let prefix = join_prefix(None, prefix);
        let mut routes = Vec::with_capacity(router.routes.len());
        for route in router.routes {
            let matcher = Matcher::compile(prefix.as_deref(), route.matcher.template())?;
            routes.push(Route { matcher, ..route });
        }
        self.routes.extend(routes);
        Ok(self)
    }

    pub fn nest(&mut self, prefix: &str, f: impl FnOnce(&mut Router<T>)) -> &mut Self {
        let mut router = Self::new();
        f(&mut router);
        self.insert_router(prefix, router)
    }

    pub fn try_nest(
        &mut self,
        prefix: &str,
        f: impl FnOnce(&mut Router<T>),
    ) -> Result<&mut Self, RouteError> {
        let mut router = Self::new();
        f(&mut router);
        self.try_insert_router(prefix, router)
    }
}

impl<T> Router<T> {
    fn push(
        &mut self,
        method: Option<Method>,
        pattern: &str,
        data: T,
        required: &[&str],
    ) -> Result<(), RouteError> {
        let matcher = Matcher::compile(None, pattern)?;
        matcher.check_required(required)?;
        self.routes.push(Route {
            method,
            matcher,
            data,
        });
        Ok(())
    }
}

pub struct Matches<'a, T> {
    routes: std::slice::Iter<'a, Route<T>>,
    method: &'a str,
    path: &'a str,
}

impl<'a, T> Iterator for Matches<'a, T> {
    type Item = (&'a T, Captures<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let (method, path) = (self.method, self.path);
        self.routes.find_map(|route| {
            if !method_matches(route.method.as_ref(), method) {
                return None;
            }
            let caps = route.matcher.find(path)?;
            Some((&route.data, caps))
        })
    }
}

impl<T> fmt::Debug for Matches<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matches")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish()
    }
}

#[inline]
fn method_matches(filter: Option<&Method>, method: &str) -> bool {
    match filter {
        Some(m) => m.as_str().eq_ignore_ascii_case(method),
        None => true,
    }
}

/// A handler erased to run against raw captures.
pub type BoxHandler = Box<dyn Fn(&Captures<'_>) -> Result<Flow, DispatchError> + Send + Sync>;

impl Router<BoxHandler> {
    pub fn route<A, R, F>(&mut self, method: Method, pattern: &str, handler: F) -> &mut Self
    where
        A: FromCaptures + 'static,
        R: Into<Flow> + 'static,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        if let Err(e) = self.try_route_with(Some(method), pattern, handler) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_route<A, R, F>(
        &mut self,
        method: Method,
        pattern: &str,
        handler: F,
    ) -> Result<&mut Self, RouteError>
    where
        A: FromCaptures + 'static,
        R: Into<Flow> + 'static,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.try_route_with(Some(method), pattern, handler)?;
        Ok(self)
    }

    /// Routes every method.
    pub fn any<A, R, F>(&mut self, pattern: &str, handler: F) -> &mut Self
    where
        A: FromCaptures + 'static,
        R: Into<Flow> + 'static,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        if let Err(e) = self.try_route_with(None, pattern, handler) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    /// Runs matching handlers in declaration order until one stops the request.
    ///
    /// A context without a path resolves to [`Resolution::Unresolved`].
    pub fn dispatch(&self, ctx: &RequestContext) -> Result<Resolution, DispatchError> {
        let path = match ctx.path() {
            Some(p) => p,
            None => return Ok(Resolution::Unresolved),
        };
        let method = ctx.method().unwrap_or("");

        let mut resolution = Resolution::Unresolved;
        for (handler, caps) in self.matches(method, path) {
            match handler(&caps)? {
                Flow::Continue => resolution = Resolution::Continued,
                Flow::Stop => {
                    tracing::debug!(method, path, "request resolved");
                    return Ok(Resolution::Stopped);
                }
            }
        }
        Ok(resolution)
    }

    fn try_route_with<A, R, F>(
        &mut self,
        method: Option<Method>,
        pattern: &str,
        handler: F,
    ) -> Result<(), RouteError>
    where
        A: FromCaptures + 'static,
        R: Into<Flow> + 'static,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let handler: BoxHandler = Box::new(move |caps: &Captures<'_>| -> Result<Flow, DispatchError> {
            let args = A::from_captures(caps)?;
            Ok(handler(args).into())
        });
        self.push(method, pattern, handler, A::REQUIRED)
    }
}

macro_rules! define_method {
    ($name:ident, $method:ident) => {
        pub fn $name<A, R, F>(&mut self, pattern: &str, handler: F) -> &mut Self
        where
            A: FromCaptures + 'static,
            R: Into<Flow> + 'static,
            F: Fn(A) -> R + Send + Sync + 'static,
        {
            self.route(Method::$method, pattern, handler)
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
