use crate::error::DispatchError;
use crate::placeholder::{Kind, Value};

use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Values bound by one successful match, in declaration order.
///
/// Optional placeholders that did not match have no entry.
#[derive(Debug, Clone)]
pub struct Captures<'a> {
    pub(super) buf: SmallVec<[(&'a str, &'a str); 8]>,
    pub(super) kinds: SmallVec<[Kind; 8]>,
}

impl<'a> Captures<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.buf
            .iter()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    /// Coerces a capture according to the kind of its placeholder.
    pub fn value(&self, name: &str) -> Option<Result<Value<'a>, DispatchError>> {
        let i = self.buf.iter().position(|&(k, _)| k == name)?;
        let (name, raw) = self.buf[i];
        Some(
            self.kinds[i]
                .coerce(raw)
                .ok_or_else(|| DispatchError::invalid_capture(name, raw)),
        )
    }

    pub fn require(&self, name: &str) -> Result<&'a str, DispatchError> {
        self.get(name)
            .ok_or_else(|| DispatchError::MissingCapture { name: name.into() })
    }

    pub fn require_parse<T: FromStr>(&self, name: &str) -> Result<T, DispatchError> {
        let raw = self.require(name)?;
        raw.parse()
            .map_err(|_| DispatchError::invalid_capture(name, raw))
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.buf.iter().map(|&(k, _)| k)
    }
}

impl<'a> Deref for Captures<'a> {
    type Target = [(&'a str, &'a str)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl Captures<'_> {
    pub(crate) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
            kinds: SmallVec::new(),
        }
    }
}
