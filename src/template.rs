//! Response templates.
//!
//! A template is literal text with `{name}` and `{request}` placeholders.
//! `{{` and `}}` produce literal braces. Templates are parsed once, when a
//! handler is constructed, so rendering cannot fail.

use crate::error::TemplateError;
use std::fmt;
use std::str::FromStr;

/// Template used by the reference handlers.
pub const DEFAULT_TEMPLATE: &str = "{name}: I'll eat the {request}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Name,
    Request,
}

/// A parsed response template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl ResponseTemplate {
    /// Parse a template string.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut key = String::new();
                    let mut closed = false;
                    for (_, k) in chars.by_ref() {
                        if k == '}' {
                            closed = true;
                            break;
                        }
                        key.push(k);
                    }
                    if !closed {
                        return Err(TemplateError::Unclosed(pos));
                    }
                    let segment = match key.as_str() {
                        "name" => Segment::Name,
                        "request" => Segment::Request,
                        _ => return Err(TemplateError::UnknownPlaceholder(key)),
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(TemplateError::StrayClose(pos)),
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Render the acknowledgment for `request` on behalf of handler `name`.
    pub fn render(&self, name: &str, request: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + name.len() + request.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Name => out.push_str(name),
                Segment::Request => out.push_str(request),
            }
        }
        out
    }

    /// The template text as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for ResponseTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            segments: vec![
                Segment::Name,
                Segment::Literal(": I'll eat the ".to_string()),
                Segment::Request,
            ],
        }
    }
}

impl FromStr for ResponseTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ResponseTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
