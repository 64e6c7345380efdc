mod cache;
mod captures;

pub use self::cache::MatcherCache;
pub use self::captures::Captures;

use crate::error::RouteError;
use crate::placeholder::Placeholder;

use std::fmt;

use regex::Regex;

const SLASH: char = '/';

/// A path template compiled into an anchored regular expression.
///
/// Built once per declared route and reused for every request.
#[derive(Clone)]
pub struct Matcher {
    template: Box<str>,
    regex: Regex,
    placeholders: Vec<Placeholder>,
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("template", &self.template)
            .field("regex", &self.regex.as_str())
            .field("placeholders", &self.placeholders)
            .finish()
    }
}

impl Matcher {
    /// Compiles `prefix` followed by `route`.
    ///
    /// A route without a leading slash gets one, so `prefix + route`
    /// never loses its separator.
    pub fn compile(prefix: Option<&str>, route: &str) -> Result<Self, RouteError> {
        let template = join_template(prefix, route);

        let mut pattern = String::with_capacity(template.len() * 2);
        let mut placeholders: Vec<Placeholder> = Vec::new();
        let mut all_optional = true;

        // join_template always starts with '/'
        for segment in template[1..].split(SLASH) {
            match Placeholder::parse(segment) {
                Some(p) => {
                    if placeholders.iter().any(|q| q.name() == p.name()) {
                        return Err(RouteError::DuplicateCapture {
                            name: p.name().into(),
                        });
                    }
                    all_optional &= p.is_optional();
                    p.write_pattern(&mut pattern);
                    placeholders.push(p);
                }
                None => {
                    all_optional = false;
                    pattern.push(SLASH);
                    pattern.push_str(&regex::escape(segment));
                }
            }
        }

        // a template made only of optional segments also answers the root path
        let pattern = if all_optional {
            format!("^(?:{}|/)$", pattern)
        } else {
            format!("^{}$", pattern)
        };

        tracing::trace!(template = %template, regex = %pattern, "compiled route template");

        let regex = Regex::new(&pattern)?;
        Ok(Self {
            template: template.into(),
            regex,
            placeholders,
        })
    }

    /// The full template, prefix included.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Capture names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.placeholders.iter().map(Placeholder::name)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.placeholders.iter().any(|p| p.name() == name)
    }

    /// Fails with the first name in `required` this template never declares.
    pub fn check_required(&self, required: &[&str]) -> Result<(), RouteError> {
        match required.iter().find(|name| !self.declares(name)) {
            Some(name) => Err(RouteError::UndeclaredCapture {
                name: (*name).into(),
            }),
            None => Ok(()),
        }
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Matches the whole of `path`.
    pub fn find<'a>(&'a self, path: &'a str) -> Option<Captures<'a>> {
        let caps = self.regex.captures(path)?;

        let mut captures = Captures::new();
        let groups = caps.iter().skip(1);
        for (p, group) in self.placeholders.iter().zip(groups) {
            if let Some(m) = group {
                captures.buf.push((p.name(), m.as_str()));
                captures.kinds.push(p.kind());
            }
        }
        Some(captures)
    }
}

/// Joins a prefix and a route with exactly one slash between them.
pub(crate) fn join_template(prefix: Option<&str>, route: &str) -> String {
    let prefix = prefix.map_or("", |p| p.trim_end_matches(SLASH));
    let mut template = String::with_capacity(prefix.len() + route.len() + 2);
    if !prefix.is_empty() && !prefix.starts_with(SLASH) {
        template.push(SLASH);
    }
    template.push_str(prefix);
    if !route.starts_with(SLASH) {
        template.push(SLASH);
    }
    template.push_str(route);
    template
}

/// Appends `segment` to `prefix`, trimming the segment's surrounding slashes
/// and inserting a single separator. An empty segment leaves the prefix as is.
pub(crate) fn join_prefix(prefix: Option<&str>, segment: &str) -> Option<String> {
    let segment = segment.trim_matches(SLASH);
    let prefix = prefix.map(|p| p.trim_end_matches(SLASH));
    if segment.is_empty() {
        return prefix.map(str::to_owned);
    }
    let prefix = prefix.unwrap_or("");
    let mut joined = String::with_capacity(prefix.len() + segment.len() + 2);
    if !prefix.starts_with(SLASH) {
        joined.push(SLASH);
    }
    joined.push_str(prefix);
    if !prefix.is_empty() {
        joined.push(SLASH);
    }
    joined.push_str(segment);
    Some(joined)
}
