//! Request dispatch over typed path templates.
//!
//! A template such as `/users/<id:int>/files/<name:string>/<ext:string?>`
//! compiles into a [`Matcher`]; matching a request path yields [`Captures`]
//! that contain only the placeholders actually present. Routes are declared
//! either per request through a chainable [`Dispatcher`], or once at startup
//! in a [`Router`]. Either way a handler returns a [`Flow`]: `Continue`
//! lets later routes run, `Stop` ends dispatch for the request.
//!
//! Placeholder types: `int`/`integer`, `float`/`double`, `bool`/`boolean`,
//! `binary`, `string`. Any other or missing type uses a conservative
//! default (`[A-Za-z0-9_~.-]+`). A trailing `?` makes the placeholder,
//! including its leading slash, optional.

#![deny(unsafe_code)]

mod dispatcher;
mod error;
mod extract;
mod matcher;
mod placeholder;
mod router;

#[cfg(feature = "hyper-service")]
pub mod hyper_service;

pub use self::dispatcher::{Dispatcher, Flow, RequestContext, Resolution};
pub use self::error::{DispatchError, RouteError};
pub use self::extract::{FromCaptures, Params};
pub use self::matcher::{Captures, Matcher, MatcherCache};
pub use self::placeholder::{Kind, Placeholder, Value};
pub use self::router::{BoxHandler, Matches, Method, Router};

#[cfg(feature = "hyper-service")]
pub use self::hyper_service::{Reply, RouterService};

#[test]
fn test_simple() {
    let cache = MatcherCache::new();
    let ctx = RequestContext::new("GET", "/users/42");

    let mut got = None;
    Dispatcher::new(&ctx, &cache)
        .route("/users/<id:int>", |p: Params| got = p.parse::<u32>("id"))
        .route("/users/<id>", |_: ()| -> () { panic!("stopped before") });
    assert_eq!(got, Some(Ok(42)));

    let ctx = RequestContext::new("GET", "/users/abc");
    let root = Dispatcher::new(&ctx, &cache);
    root.prefix("").route("/users/<id:int>", |_: ()| -> () { panic!("no match") });
    assert_eq!(root.resolution(), Resolution::Unresolved);
    assert_eq!(cache.len(), 1);
}
