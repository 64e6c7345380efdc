#![cfg(feature = "hyper-service")]

use nuclear_dispatch::hyper_service::Reply;
use nuclear_dispatch::{router_service, Params, RouterService};

use std::convert::Infallible as Never;

use hyper::service::Service;
use hyper::{Body, Request, Response, StatusCode};

async fn not_found(_: Request<Body>, _: Params) -> Result<Response<Body>, Never> {
    let mut res = Response::new(Body::from("nothing here"));
    *res.status_mut() = StatusCode::NOT_FOUND;
    Ok(res)
}

async fn user(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let id = params.get("id").unwrap_or_default();
    Ok(Response::new(Body::from(format!("user {}", id))))
}

async fn audit(req: Request<Body>, params: Params) -> Result<Reply, Never> {
    if params.get("id") == Some("0") {
        return Ok(Reply::Respond(Response::new(Body::from("root user"))));
    }
    Ok(Reply::Next(req))
}

async fn file(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let name = params.get("name").unwrap_or_default();
    let ext = params.get("ext").unwrap_or("bin");
    Ok(Response::new(Body::from(format!("{}.{}", name, ext))))
}

fn service() -> RouterService {
    router_service! {
        GET "/users/<id:int>" => audit,
        GET "/users/<id:int>" => user,
        @ "/api/v1" => router_service! {
            ANY "/files/<name:string>/<ext?>" => file
        };
        _ => not_found
    }
}

async fn get(svc: &mut RouterService, method: &str, uri: &str) -> (StatusCode, String) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let res = svc.call(req).await.unwrap();
    let status = res.status();
    let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn serves_routes() {
    let mut svc = service();

    assert_eq!(
        get(&mut svc, "GET", "/users/42?x=1").await,
        (StatusCode::OK, "user 42".to_owned())
    );
    assert_eq!(
        get(&mut svc, "GET", "/users/0").await,
        (StatusCode::OK, "root user".to_owned())
    );
    assert_eq!(
        get(&mut svc, "DELETE", "/api/v1/files/report/pdf").await,
        (StatusCode::OK, "report.pdf".to_owned())
    );
    assert_eq!(
        get(&mut svc, "GET", "/api/v1/files/report").await,
        (StatusCode::OK, "report.bin".to_owned())
    );
    assert_eq!(
        get(&mut svc, "POST", "/users/42").await,
        (StatusCode::NOT_FOUND, "nothing here".to_owned())
    );
}

#[tokio::test]
async fn next_without_default_response() {
    async fn pass(req: Request<Body>, _: Params) -> Result<Reply, Never> {
        Ok(Reply::Next(req))
    }

    let mut svc = router_service! {
        ANY "/<x?>" => pass;
        _ => pass
    };
    let (status, _) = get(&mut svc, "GET", "/anything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
