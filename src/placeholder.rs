//! Typed placeholders: `<name>`, `<name?>`, `<name:type>` and `<name:type?>`.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

const OPEN: char = '<';
const CLOSE: char = '>';
const COLON: char = ':';
const QUESTION: char = '?';

/// The value type of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    Float,
    Boolean,
    Binary,
    String,
    /// Used for an omitted or unrecognized type tag.
    Default,
}

impl Kind {
    /// Resolves a type tag case-insensitively. Unknown tags fall back to [`Kind::Default`].
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        match tag.as_str() {
            "int" | "integer" => Self::Integer,
            "float" | "double" => Self::Float,
            "bool" | "boolean" => Self::Boolean,
            "binary" => Self::Binary,
            "string" => Self::String,
            _ => Self::Default,
        }
    }

    /// The sub-pattern matching one path segment of this kind.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Integer => r"-?[0-9]+",
            Self::Float => r"-?[0-9]*\.?[0-9]+(?:[Ee]-?[0-9]+)?",
            Self::Boolean => r"[Tt][Rr][Uu][Ee]|[Ff][Aa][Ll][Ss][Ee]",
            Self::Binary => r"(?:[A-Za-z0-9_+=-]|%2[BbFf]|%3[Dd])+",
            Self::String => r"[^/<>]+",
            Self::Default => r"[A-Za-z0-9_~.\-]+",
        }
    }

    /// Converts a raw capture of this kind into a typed value.
    ///
    /// Returns `None` when the raw text can not be represented,
    /// e.g. an integer that overflows `i64`.
    pub fn coerce(self, raw: &str) -> Option<Value<'_>> {
        let value = match self {
            Self::Integer => Value::Integer(raw.parse().ok()?),
            Self::Float => Value::Float(raw.parse().ok()?),
            Self::Boolean => {
                if raw.eq_ignore_ascii_case("true") {
                    Value::Boolean(true)
                } else if raw.eq_ignore_ascii_case("false") {
                    Value::Boolean(false)
                } else {
                    return None;
                }
            }
            Self::Binary => Value::Binary(decode_binary(raw)),
            Self::String | Self::Default => Value::Text(raw),
        };
        Some(value)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Integer => "int",
            Self::Float => "float",
            Self::Boolean => "bool",
            Self::Binary => "binary",
            Self::String => "string",
            Self::Default => "default",
        };
        f.write_str(s)
    }
}

/// A capture coerced according to its placeholder kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Binary token with `%2B`, `%2F` and `%3D` decoded.
    Binary(Cow<'a, str>),
    Text(&'a str),
}

/// A named, typed variable segment of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    name: Box<str>,
    optional: bool,
    kind: Kind,
}

impl Placeholder {
    pub fn new(name: &str, kind: Kind, optional: bool) -> Self {
        Self {
            name: name.into(),
            optional,
            kind,
        }
    }

    /// Parses a whole path segment. Returns `None` if the segment is literal text.
    pub fn parse(segment: &str) -> Option<Self> {
        if !segment.starts_with(OPEN) || !segment.ends_with(CLOSE) || segment.len() < 3 {
            return None;
        }
        let inner = &segment[1..segment.len() - 1];

        let name_len = inner
            .find(|c: char| !is_word_char(c))
            .unwrap_or_else(|| inner.len());
        if name_len == 0 {
            return None;
        }
        let (name, mut rest) = inner.split_at(name_len);

        let mut optional = false;
        if rest.starts_with(COLON) {
            rest = &rest[1..];
            // legacy form `<name:?type>`
            if rest.starts_with(QUESTION) {
                optional = true;
                rest = &rest[1..];
            }
        } else if rest != "?" && !rest.is_empty() {
            return None;
        }
        if rest.ends_with(QUESTION) {
            if optional {
                return None;
            }
            optional = true;
            rest = &rest[..rest.len() - 1];
        }
        if rest.contains(|c| c == OPEN || c == CLOSE || c == QUESTION) {
            return None;
        }

        Some(Self::new(name, Kind::from_tag(rest), optional))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Appends `(?:/(sub))`, followed by `?` when optional.
    ///
    /// The separator belongs to the group, so an absent optional segment
    /// leaves no dangling slash.
    pub fn write_pattern(&self, buf: &mut String) {
        let _ = write!(buf, "(?:/({}))", self.kind.pattern());
        if self.optional {
            buf.push(QUESTION);
        }
    }

    pub fn pattern(&self) -> String {
        let mut buf = String::new();
        self.write_pattern(&mut buf);
        buf
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn decode_binary(raw: &str) -> Cow<'_, str> {
    if !raw.contains('%') {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let escape = rest.get(pos..pos + 3).unwrap_or(&rest[pos..]);
        let decoded = match escape.to_ascii_uppercase().as_str() {
            "%2B" => Some('+'),
            "%2F" => Some('/'),
            "%3D" => Some('='),
            _ => None,
        };
        match decoded {
            Some(c) => {
                out.push(c);
                rest = &rest[pos + escape.len()..];
            }
            None => {
                out.push('%');
                rest = &rest[pos + 1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
