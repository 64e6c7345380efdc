use super::{BoxError, BoxFuture, Future, Request, Response, StdError};
use crate::extract::Params;

/// What an async handler did with the request.
#[derive(Debug)]
pub enum Reply {
    /// The request is answered; no later route runs.
    Respond(Response),
    /// Hands the request back so the next matching route can try it.
    Next(Request),
}

impl From<Response> for Reply {
    fn from(res: Response) -> Self {
        Reply::Respond(res)
    }
}

pub trait Handler {
    fn call(&self, req: Request, params: Params) -> BoxFuture<'static, Result<Reply, BoxError>>;
}

pub type BoxHandler = Box<dyn Handler + Send + Sync>;

impl Handler for BoxHandler {
    fn call(&self, req: Request, params: Params) -> BoxFuture<'static, Result<Reply, BoxError>> {
        Handler::call(&**self, req, params)
    }
}

impl<F, R, E, Fut> Handler for F
where
    F: Fn(Request, Params) -> Fut,
    R: Into<Reply> + 'static,
    E: StdError + Send + Sync + 'static,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
{
    fn call(&self, req: Request, params: Params) -> BoxFuture<'static, Result<Reply, BoxError>> {
        let fut = (self)(req, params);
        Box::pin(async move {
            let ret = fut.await;
            match ret {
                Ok(r) => Ok(r.into()),
                Err(e) => Err(Box::new(e) as BoxError),
            }
        })
    }
}
