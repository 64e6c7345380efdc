/// A route template or registration that can never work.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("capture name {name:?} is declared more than once")]
    DuplicateCapture { name: Box<str> },

    #[error("handler requires capture {name:?} which the template does not declare")]
    UndeclaredCapture { name: Box<str> },

    #[error("template does not compile: {0}")]
    Regex(#[from] regex::Error),
}

/// A failure while handing a matched route to its handler.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("{source}: pattern = {template:?}")]
    Route {
        template: Box<str>,
        #[source]
        source: RouteError,
    },

    #[error("missing capture {name:?}")]
    MissingCapture { name: Box<str> },

    #[error("invalid value {value:?} for capture {name:?}")]
    InvalidCapture { name: Box<str>, value: Box<str> },
}

impl DispatchError {
    pub(crate) fn route(template: &str, source: RouteError) -> Self {
        Self::Route {
            template: template.into(),
            source,
        }
    }

    pub(crate) fn invalid_capture(name: &str, value: &str) -> Self {
        Self::InvalidCapture {
            name: name.into(),
            value: value.into(),
        }
    }
}
