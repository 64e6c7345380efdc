//! Serving a [`Router`](crate::Router) of async handlers with hyper.
//!
//! A handler receives the request and the owned [`Params`](crate::Params) of
//! the matched route. Answering [`Reply::Next`] gives the request back and
//! lets the next matching route try it.

#![forbid(unsafe_code)]

mod handler;
mod service;
mod service_macro;

pub use self::handler::{BoxHandler, Handler, Reply};
pub use self::service::RouterService;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

pub type Request = hyper::Request<hyper::Body>;
pub type Response = hyper::Response<hyper::Body>;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;
