use nuclear_dispatch::{Dispatcher, Flow, MatcherCache, Params, RequestContext, Resolution};

use std::cell::RefCell;

fn captures_of(template: &str, path: &str) -> Option<Vec<(String, String)>> {
    let cache = MatcherCache::new();
    let ctx = RequestContext::new("GET", path);
    let mut got = None;
    Dispatcher::new(&ctx, &cache).route(template, |p: Params| got = Some(p));
    got.map(|p| p.into_iter().collect())
}

fn pairs(v: &[(&str, &str)]) -> Option<Vec<(String, String)>> {
    Some(
        v.iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect(),
    )
}

#[test]
fn literal_templates_match_themselves() {
    for &t in &["/", "/about", "/a/b/c", "/v1.0/status", "/a+b/(c)"] {
        assert_eq!(captures_of(t, t), pairs(&[]), "template = {:?}", t);
    }
}

#[test]
fn integer_capture() {
    for &v in &["0", "42", "-7", "0012"] {
        let path = format!("/users/{}", v);
        assert_eq!(captures_of("/users/<id:int>", &path), pairs(&[("id", v)]));
    }
    for &v in &["abc", "4.2", "-", "1e3"] {
        let path = format!("/users/{}", v);
        assert_eq!(captures_of("/users/<id:int>", &path), None);
    }
}

#[test]
fn optional_placeholder_is_absent_not_empty() {
    assert_eq!(captures_of("/<x?>", "/"), pairs(&[]));
    assert_eq!(captures_of("/<x?>", "/foo"), pairs(&[("x", "foo")]));
}

#[test]
fn optional_string_extension() {
    let t = "/files/<name:string>/<ext:string?>";
    assert_eq!(captures_of(t, "/files/report"), pairs(&[("name", "report")]));
    assert_eq!(
        captures_of(t, "/files/report/pdf"),
        pairs(&[("name", "report"), ("ext", "pdf")])
    );
}

#[test]
fn prefix_composition() {
    let cache = MatcherCache::new();
    let paths = ["/a/b/x", "/a/x", "/a/b", "/b/x"];

    for path in paths.iter() {
        let ctx = RequestContext::new("GET", path);
        let root = Dispatcher::new(&ctx, &cache);

        let mut nested = false;
        root.prefix("a").prefix("b").route("/x", |_: ()| nested = true);

        let root = Dispatcher::new(&ctx, &cache);
        let mut flat = false;
        root.prefix("/a/b/").route("x", |_: ()| flat = true);

        assert_eq!(nested, flat, "path = {:?}", path);
        assert_eq!(nested, *path == "/a/b/x");
    }
}

#[test]
fn prefix_does_not_alias() {
    let cache = MatcherCache::new();
    let ctx = RequestContext::new("GET", "/admin/users");
    let root = Dispatcher::new(&ctx, &cache);
    let admin = root.prefix("admin");
    let _api = root.prefix("api");
    let _admin_v2 = admin.prefix("v2");

    assert_eq!(root.current_prefix(), None);
    assert_eq!(admin.current_prefix(), Some("/admin"));

    let hits = RefCell::new(Vec::new());
    root.prefix("admin")
        .route("/users", |_: ()| {
            hits.borrow_mut().push("admin");
            Flow::Continue
        });
    root.prefix("").route("/admin/users", |_: ()| hits.borrow_mut().push("root"));
    assert_eq!(*hits.borrow(), ["admin", "root"]);
}

#[test]
fn short_circuit() {
    let cache = MatcherCache::new();
    let ctx = RequestContext::new("GET", "/same");

    let calls = RefCell::new(Vec::new());
    let mut d = Dispatcher::new(&ctx, &cache);
    d.route("/same", |_: ()| {
        calls.borrow_mut().push("first");
        false
    })
    .route("/<any>", |_: ()| calls.borrow_mut().push("second"))
    .route("/same", |_: ()| calls.borrow_mut().push("third"));
    assert_eq!(*calls.borrow(), ["first", "second"]);
    assert_eq!(d.resolution(), Resolution::Stopped);

    let calls = RefCell::new(Vec::new());
    let mut d = Dispatcher::new(&ctx, &cache);
    d.route("/same", |_: ()| calls.borrow_mut().push("first"))
        .route("/same", |_: ()| calls.borrow_mut().push("second"));
    assert_eq!(*calls.borrow(), ["first"]);
}

#[test]
fn method_filtering() {
    let cache = MatcherCache::new();
    let ctx = RequestContext::new("GET", "/submit");
    let mut d = Dispatcher::new(&ctx, &cache);
    d.post("/submit", |_: ()| -> () { panic!("POST route ran for GET") })
        .put("/submit", |_: ()| -> () { panic!("PUT route ran for GET") });
    assert_eq!(d.resolution(), Resolution::Unresolved);

    let ctx = RequestContext::new("Post", "/submit");
    let mut ran = false;
    Dispatcher::new(&ctx, &cache).post("/submit", |_: ()| ran = true);
    assert!(ran);
}

#[test]
fn no_request_path() {
    let cache = MatcherCache::new();
    let ctx = RequestContext::from_uri("GET", "::bad uri::");
    let mut d = Dispatcher::new(&ctx, &cache);
    d.route("/<x?>", |_: ()| -> () { panic!("no request") });
    assert_eq!(d.resolution(), Resolution::Unresolved);
}
