use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use nuclear_dispatch::{Dispatcher, Matcher, MatcherCache, Params, RequestContext, Router};

fn router_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-find");

    group.bench_function("single-route", |b| {
        let mut router: Router<usize> = Router::new();
        router.insert("/hello/<name>", 1);
        b.iter_with_large_drop(|| router.find("GET", "/hello/world").map(|(d, _)| *d))
    });

    group.bench_function("typed-optional", |b| {
        let mut router: Router<usize> = Router::new();
        router
            .insert("/users/<id:int>", 1)
            .insert("/files/<name:string>/<ext:string?>", 2);
        b.iter_with_large_drop(|| router.find("GET", "/files/report/pdf").map(|(d, _)| *d))
    });
}

fn router_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-insert");

    group.bench_function("single-route", |b| {
        b.iter_batched_ref(
            Router::new,
            |router: &mut Router<usize>| {
                router.insert("/hello/<name>", 1);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("compile", |b| {
        b.iter_with_large_drop(|| Matcher::compile(Some("/api"), "/users/<id:int>/<tab?>"))
    });
}

fn dispatcher_cached(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatcher");

    group.bench_function("cached-route", |b| {
        let cache = MatcherCache::new();
        let ctx = RequestContext::new("GET", "/hello/world");
        b.iter(|| {
            let mut hit = false;
            Dispatcher::new(&ctx, &cache).get("/hello/<name>", |_: Params| hit = true);
            hit
        })
    });
}

criterion_group!(benches, router_find, router_insert, dispatcher_cached);
criterion_main!(benches);
