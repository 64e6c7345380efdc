/// Builds a [`Router`](crate::Router) from a list of declarations.
///
/// ```
/// use nuclear_dispatch::{router, Router};
///
/// let router: Router<i32> = router! {
///     GET "/users/<id:int>" => 1,
///     ANY "/health" => 2,
///     @ "/v1" => router! {
///         POST "/items/<name?>" => 3
///     }
/// };
///
/// assert_eq!(*router.find("GET", "/users/7").unwrap().0, 1);
/// assert_eq!(*router.find("DELETE", "/health").unwrap().0, 2);
/// assert_eq!(*router.find("POST", "/v1/items").unwrap().0, 3);
/// ```
#[macro_export]
macro_rules! router {
    {$($method:tt $pattern:expr => $data:expr),+ $(,)?} => {{
        let mut __router = $crate::Router::new();
        $($crate::router!(@entry __router, $method, $pattern, $data);)+
        __router
    }};

    {@entry $router:expr, @, $prefix:expr, $sub_router:expr} => {
        $router.insert_router($prefix, $sub_router)
    };
    {@entry $router:expr, ANY, $pattern:expr, $data:expr} => {
        $router.insert($pattern, $data)
    };
    {@entry $router:expr, GET, $pattern:expr, $data:expr} => {
        $router.insert_method($crate::Method::GET, $pattern, $data)
    };
    {@entry $router:expr, POST, $pattern:expr, $data:expr} => {
        $router.insert_method($crate::Method::POST, $pattern, $data)
    };
    {@entry $router:expr, PUT, $pattern:expr, $data:expr} => {
        $router.insert_method($crate::Method::PUT, $pattern, $data)
    };
    {@entry $router:expr, DELETE, $pattern:expr, $data:expr} => {
        $router.insert_method($crate::Method::DELETE, $pattern, $data)
    };
    {@entry $router:expr, HEAD, $pattern:expr, $data:expr} => {
        $router.insert_method($crate::Method::HEAD, $pattern, $data)
    };
    {@entry $router:expr, OPTIONS, $pattern:expr, $data:expr} => {
        $router.insert_method($crate::Method::OPTIONS, $pattern, $data)
    };
    {@entry $router:expr, CONNECT, $pattern:expr, $data:expr} => {
        $router.insert_method($crate::Method::CONNECT, $pattern, $data)
    };
    {@entry $router:expr, PATCH, $pattern:expr, $data:expr} => {
        $router.insert_method($crate::Method::PATCH, $pattern, $data)
    };
    {@entry $router:expr, TRACE, $pattern:expr, $data:expr} => {
        $router.insert_method($crate::Method::TRACE, $pattern, $data)
    };
}
