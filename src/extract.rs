use crate::error::DispatchError;
use crate::matcher::Captures;

use std::iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator};
use std::str::FromStr;

/// Builds a handler's arguments from the captures of a match.
///
/// `REQUIRED` lists the capture names the type can not do without. They are
/// checked against the template when the route is compiled, so a handler
/// asking for a name its template never declares fails loudly instead of
/// silently receiving nothing.
///
/// ```
/// use nuclear_dispatch::{Captures, DispatchError, FromCaptures};
///
/// struct Post {
///     user: String,
///     id: u64,
/// }
///
/// impl FromCaptures for Post {
///     const REQUIRED: &'static [&'static str] = &["user", "id"];
///
///     fn from_captures(caps: &Captures<'_>) -> Result<Self, DispatchError> {
///         Ok(Self {
///             user: caps.require("user")?.to_owned(),
///             id: caps.require_parse("id")?,
///         })
///     }
/// }
/// ```
pub trait FromCaptures: Sized {
    const REQUIRED: &'static [&'static str] = &[];

    fn from_captures(caps: &Captures<'_>) -> Result<Self, DispatchError>;
}

impl FromCaptures for () {
    fn from_captures(_: &Captures<'_>) -> Result<Self, DispatchError> {
        Ok(())
    }
}

impl FromCaptures for Params {
    fn from_captures(caps: &Captures<'_>) -> Result<Self, DispatchError> {
        Ok(Params::new(caps))
    }
}

/// Owned captures, detached from the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    buf: String,
    offset: Vec<(Box<str>, usize, usize)>, // (name, start, end)
}

impl Params {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.offset
            .iter()
            .find_map(|&(ref n, s, e)| some_if(&**n == name, || &self.buf[s..e]))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.offset.iter().any(|(n, _, _)| &**n == name)
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn require(&self, name: &str) -> Result<&str, DispatchError> {
        self.get(name)
            .ok_or_else(|| DispatchError::MissingCapture { name: name.into() })
    }

    pub fn require_parse<T: FromStr>(&self, name: &str) -> Result<T, DispatchError> {
        let raw = self.require(name)?;
        raw.parse()
            .map_err(|_| DispatchError::invalid_capture(name, raw))
    }

    pub fn len(&self) -> usize {
        self.offset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offset.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buf: &self.buf,
            offset: self.offset.iter(),
        }
    }

    pub fn new(caps: &Captures<'_>) -> Self {
        let mut buf = String::with_capacity(caps.iter().map(|&(_, v)| v.len()).sum());
        let mut offset = Vec::with_capacity(caps.len());
        for &(name, value) in caps.iter() {
            let start = buf.len();
            buf.push_str(value);
            offset.push((name.into(), start, buf.len()));
        }
        Self { buf, offset }
    }
}

impl<'a> From<&Captures<'a>> for Params {
    fn from(caps: &Captures<'a>) -> Self {
        Params::new(caps)
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = IntoIter;
    fn into_iter(self) -> IntoIter {
        IntoIter {
            buf: self.buf,
            offset: self.offset.into_iter(),
        }
    }
}

#[inline(always)]
fn some_if<T>(cond: bool, f: impl FnOnce() -> T) -> Option<T> {
    if cond {
        Some(f())
    } else {
        None
    }
}

pub struct Iter<'a> {
    buf: &'a str,
    offset: std::slice::Iter<'a, (Box<str>, usize, usize)>,
}

pub struct IntoIter {
    buf: String,
    offset: std::vec::IntoIter<(Box<str>, usize, usize)>,
}

macro_rules! delegate {
    (iter, $method:tt) => {
        fn $method(&mut self) -> Option<Self::Item> {
            let &(ref n, s, e) = self.offset.$method()?;
            let buf = self.buf;
            Some((&**n, &buf[s..e]))
        }
    };

    (into_iter, $method:tt) => {
        fn $method(&mut self) -> Option<Self::Item> {
            let (n, s, e) = self.offset.$method()?;
            Some((n.into(), self.buf[s..e].to_owned()))
        }
    };

    (size_hint) => {
        fn size_hint(&self) -> (usize, Option<usize>) {
            self.offset.size_hint()
        }
    };

    (len) => {
        fn len(&self) -> usize {
            self.offset.len()
        }
    };
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);
    delegate!(iter, next);
    delegate!(size_hint);
}

impl DoubleEndedIterator for Iter<'_> {
    delegate!(iter, next_back);
}

impl Iterator for IntoIter {
    type Item = (String, String);
    delegate!(into_iter, next);
    delegate!(size_hint);
}

impl DoubleEndedIterator for IntoIter {
    delegate!(into_iter, next_back);
}

impl FusedIterator for Iter<'_> {}
impl FusedIterator for IntoIter {}

impl ExactSizeIterator for Iter<'_> {
    delegate!(len);
}

impl ExactSizeIterator for IntoIter {
    delegate!(len);
}
