use nuclear_dispatch::hyper_service::Reply;
use nuclear_dispatch::{router_service, Params};

use std::convert::Infallible as Never;

use hyper::service::make_service_fn;
use hyper::{Body, Request, Response};

async fn not_found(req: Request<Body>, _: Params) -> Result<Response<Body>, Never> {
    dbg!((req.method(), req.uri().path()));
    let res = hyper::Response::builder()
        .status(404)
        .body(hyper::Body::from("404 Not Found"))
        .unwrap();
    Ok(res)
}

async fn log(req: Request<Body>, params: Params) -> Result<Reply, Never> {
    dbg!(params.iter().collect::<Vec<_>>());
    Ok(Reply::Next(req))
}

async fn hello(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let name = params.get("name").unwrap();
    Ok(Response::new(Body::from(format!("hello, {}!", name))))
}

async fn file(_: Request<Body>, params: Params) -> Result<Response<Body>, Never> {
    let name = params.get("name").unwrap();
    let ext = params.get("ext").unwrap_or("txt");
    Ok(Response::new(Body::from(format!("access file: {}.{}", name, ext))))
}

#[tokio::main]
async fn main() {
    let router = router_service! {
        ANY "/<any:string?>" => log,
        GET "/hello/<name>" => hello,
        @ "/api/v1" => router_service!{
            GET "/file/<name:string>/<ext?>" => file
        };
        _ => not_found
    };

    let make = make_service_fn(|_| {
        let router = router.clone();
        async move { Ok::<_, Never>(router) }
    });

    let addr = "127.0.0.1:3000";

    let server = hyper::Server::bind(&addr.parse().unwrap()).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("api: http://{}/api/v1/file/report/pdf", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    server.await.unwrap();
}
