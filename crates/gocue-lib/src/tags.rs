//! Struct tag micro-syntax.
//!
//! A tag is a space-separated sequence of `key:"value"` pairs, as in
//! `` `json:"name,omitempty" yaml:"name"` ``. Each quoted value is split on
//! commas into an ordered list; the first element is conventionally the
//! serialized name and the rest are options.
//!
//! Keys keep their source order. A repeated key keeps its first occurrence,
//! matching how Go's `reflect.StructTag.Get` resolves lookups. Later
//! occurrences are discarded at parse time, so `json:"a" json:"b"` renders
//! back as `json:"a"`.

use std::fmt;

use indexmap::IndexMap;
use logos::Logos;
use serde::Serialize;

use crate::{Error, Result};

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
enum Token<'src> {
    #[token(":")]
    Colon,

    #[regex(r#""([^"\\]|\\.)*""#, |lex| lex.slice())]
    Quoted(&'src str),

    #[regex(r#"[^ \t\n\r:"`]+"#, |lex| lex.slice())]
    Key(&'src str),
}

/// Ordered multi-valued tag mapping: key → values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tags(IndexMap<String, Vec<String>>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw tag literal. Surrounding backticks are optional.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let body = trimmed
            .strip_prefix('`')
            .and_then(|s| s.strip_suffix('`'))
            .unwrap_or(trimmed);

        let malformed = |message: String| Error::MalformedTag {
            tag: raw.to_string(),
            message,
        };

        let mut tokens = Vec::new();
        for (token, span) in Token::lexer(body).spanned() {
            match token {
                Ok(token) => tokens.push(token),
                Err(_) => {
                    return Err(malformed(format!(
                        "unexpected character {:?} at {}",
                        &body[span.clone()],
                        span.start
                    )));
                }
            }
        }

        let mut tags = Tags::new();
        let mut tokens = tokens.into_iter();
        while let Some(token) = tokens.next() {
            let Token::Key(key) = token else {
                return Err(malformed(format!("expected tag key, got {:?}", token)));
            };
            match tokens.next() {
                Some(Token::Colon) => {}
                _ => return Err(malformed(format!("expected ':' after key {key:?}"))),
            }
            let Some(Token::Quoted(quoted)) = tokens.next() else {
                return Err(malformed(format!("expected quoted value for key {key:?}")));
            };
            let values = unquote(quoted).split(',').map(str::to_string).collect();
            tags.0.entry(key.to_string()).or_insert(values);
        }

        Ok(tags)
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Set the values for `key`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.0.insert(key.into(), values);
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.0.shift_remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Renders the tag body without backticks: `json:"a,omitempty" yaml:"a"`.
impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, values)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:\"{}\"", key, quote(&values.join(",")))?;
        }
        Ok(())
    }
}

fn unquote(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Inverse of `unquote`: escapes everything it decodes.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}
