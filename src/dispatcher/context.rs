use http::Uri;

/// What the host server knows about the current request.
///
/// A context without a path never matches anything, which makes every
/// dispatch a no-op outside of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    method: Option<Box<str>>,
    path: Option<Box<str>>,
}

impl RequestContext {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: Some(method.into()),
            path: Some(path.into()),
        }
    }

    /// Takes the path out of a full request target, dropping query and fragment.
    ///
    /// A target that does not parse leaves the path absent.
    pub fn from_uri(method: &str, uri: &str) -> Self {
        let path = uri
            .parse::<Uri>()
            .ok()
            .map(|uri| uri.path().to_owned())
            .filter(|path| !path.is_empty());
        Self {
            method: Some(method.into()),
            path: path.map(String::into_boxed_str),
        }
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Compares the request method case-insensitively. An absent method never matches.
    pub fn method_is(&self, method: &str) -> bool {
        match self.method() {
            Some(m) => m.eq_ignore_ascii_case(method),
            None => false,
        }
    }
}

impl<B> From<&http::Request<B>> for RequestContext {
    fn from(req: &http::Request<B>) -> Self {
        Self::new(req.method().as_str(), req.uri().path())
    }
}
