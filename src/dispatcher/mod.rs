mod context;

pub use self::context::RequestContext;

use crate::error::DispatchError;
use crate::extract::FromCaptures;
use crate::matcher::{join_prefix, join_template, MatcherCache};

use std::cell::Cell;
use std::rc::Rc;

/// What a handler tells the dispatcher once it has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep trying the routes declared after this one.
    Continue,
    /// The request is handled.
    Stop,
}

impl From<()> for Flow {
    fn from(_: ()) -> Self {
        Flow::Stop
    }
}

/// `false` continues, `true` stops.
impl From<bool> for Flow {
    fn from(stop: bool) -> Self {
        if stop {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}

/// Where a request stands after a series of route declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No route matched yet.
    Unresolved,
    /// At least one handler ran and asked to continue.
    Continued,
    /// A handler finished the request. Later declarations are no-ops.
    Stopped,
}

impl Resolution {
    fn advance(self, flow: Flow) -> Self {
        match (self, flow) {
            (Resolution::Stopped, _) | (_, Flow::Stop) => Resolution::Stopped,
            (_, Flow::Continue) => Resolution::Continued,
        }
    }
}

/// Per-request, chainable route declarations.
///
/// Every declaration is tested against the request right away. Once a handler
/// stops the request, this dispatcher and every dispatcher derived from it
/// with [`prefix`](Dispatcher::prefix) ignore the remaining declarations.
///
/// ```
/// use nuclear_dispatch::{Dispatcher, MatcherCache, Params, RequestContext, Resolution};
///
/// let cache = MatcherCache::new();
/// let ctx = RequestContext::new("GET", "/api/users/42");
///
/// let mut seen = Vec::new();
/// let root = Dispatcher::new(&ctx, &cache);
/// root.prefix("api")
///     .get("/users/<id:int>", |p: Params| {
///         seen.push(p.get("id").unwrap().to_owned());
///     })
///     .get("/users/<name>", |_: Params| -> () { unreachable!() });
///
/// assert_eq!(root.resolution(), Resolution::Stopped);
/// assert_eq!(seen, ["42"]);
/// ```
#[derive(Debug)]
pub struct Dispatcher<'c> {
    ctx: &'c RequestContext,
    cache: &'c MatcherCache,
    prefix: Option<Box<str>>,
    resolution: Rc<Cell<Resolution>>,
}

impl<'c> Dispatcher<'c> {
    pub fn new(ctx: &'c RequestContext, cache: &'c MatcherCache) -> Self {
        Self {
            ctx,
            cache,
            prefix: None,
            resolution: Rc::new(Cell::new(Resolution::Unresolved)),
        }
    }

    /// Derives a dispatcher whose routes live under `segment`.
    ///
    /// The receiver keeps its own prefix; both share the request's resolution.
    pub fn prefix(&self, segment: &str) -> Self {
        Self {
            ctx: self.ctx,
            cache: self.cache,
            prefix: join_prefix(self.prefix.as_deref(), segment).map(String::into_boxed_str),
            resolution: Rc::clone(&self.resolution),
        }
    }

    pub fn current_prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn context(&self) -> &'c RequestContext {
        self.ctx
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution.get()
    }

    pub fn is_stopped(&self) -> bool {
        self.resolution() == Resolution::Stopped
    }

    /// Declares a route for any method.
    ///
    /// # Panics
    /// Panics if the template does not compile or does not declare a capture
    /// the handler requires. Captures that fail to extract at request time
    /// are treated as no match; use [`try_route`](Dispatcher::try_route) to
    /// observe them.
    pub fn route<A, R, F>(&mut self, route: &str, handler: F) -> &mut Self
    where
        A: FromCaptures,
        R: Into<Flow>,
        F: FnOnce(A) -> R,
    {
        match self.dispatch(route, handler) {
            Ok(()) => {}
            Err(DispatchError::Route { template, source }) => {
                panic!("{}: pattern = {:?}", source, template)
            }
            Err(e) => tracing::debug!(route, error = %e, "captures rejected by handler"),
        }
        self
    }

    pub fn try_route<A, R, F>(&mut self, route: &str, handler: F) -> Result<&mut Self, DispatchError>
    where
        A: FromCaptures,
        R: Into<Flow>,
        F: FnOnce(A) -> R,
    {
        self.dispatch(route, handler)?;
        Ok(self)
    }

    /// Declares a route for `method`, compared case-insensitively.
    pub fn on<A, R, F>(&mut self, method: &str, route: &str, handler: F) -> &mut Self
    where
        A: FromCaptures,
        R: Into<Flow>,
        F: FnOnce(A) -> R,
    {
        if self.ctx.method_is(method) {
            self.route(route, handler);
        }
        self
    }

    pub fn try_on<A, R, F>(
        &mut self,
        method: &str,
        route: &str,
        handler: F,
    ) -> Result<&mut Self, DispatchError>
    where
        A: FromCaptures,
        R: Into<Flow>,
        F: FnOnce(A) -> R,
    {
        if self.ctx.method_is(method) {
            self.try_route(route, handler)?;
        }
        Ok(self)
    }
}

macro_rules! define_method {
    ($name:ident, $method:literal) => {
        #[doc = concat!("Declares a route for `", $method, "` requests.")]
        pub fn $name<A, R, F>(&mut self, route: &str, handler: F) -> &mut Self
        where
            A: FromCaptures,
            R: Into<Flow>,
            F: FnOnce(A) -> R,
        {
            self.on($method, route, handler)
        }
    };
}

impl Dispatcher<'_> {
    define_method!(get, "GET");
    define_method!(post, "POST");
    define_method!(put, "PUT");
    define_method!(delete, "DELETE");
    define_method!(head, "HEAD");
    define_method!(options, "OPTIONS");
    define_method!(connect, "CONNECT");
    define_method!(patch, "PATCH");
    define_method!(trace, "TRACE");
}

impl Dispatcher<'_> {
    fn dispatch<A, R, F>(&self, route: &str, handler: F) -> Result<(), DispatchError>
    where
        A: FromCaptures,
        R: Into<Flow>,
        F: FnOnce(A) -> R,
    {
        if self.is_stopped() {
            return Ok(());
        }
        let path = match self.ctx.path() {
            Some(p) => p,
            None => return Ok(()),
        };

        let prefix = self.prefix.as_deref();
        let matcher = self
            .cache
            .get_or_compile(prefix, route)
            .map_err(|e| DispatchError::route(&join_template(prefix, route), e))?;
        matcher
            .check_required(A::REQUIRED)
            .map_err(|e| DispatchError::route(matcher.template(), e))?;

        let caps = match matcher.find(path) {
            Some(caps) => caps,
            None => return Ok(()),
        };
        let args = A::from_captures(&caps)?;

        tracing::debug!(template = matcher.template(), path, "route matched");

        let flow: Flow = handler(args).into();
        let resolution = self.resolution.get().advance(flow);
        self.resolution.set(resolution);

        if resolution == Resolution::Stopped {
            tracing::debug!(template = matcher.template(), path, "request resolved");
        }
        Ok(())
    }
}
