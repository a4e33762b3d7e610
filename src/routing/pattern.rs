//! # Route Patterns
//!
//! A pattern is a `/`-separated list of segments. A segment written as
//! `{name}` is a placeholder that binds one non-empty path segment to
//! `name`; every other segment must match literally. `/` on its own is the
//! root and has no segments.

use std::collections::HashSet;
use std::fmt;

use super::errors::{RouteError, RouteResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

impl Segment {
    fn is_literal(&self) -> bool {
        matches!(self, Segment::Literal(_))
    }
}

/// Parameters bound by placeholder segments, in pattern order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    entries: Vec<(String, String)>,
}

impl RouteParams {
    /// Value bound to `name`, if the pattern has such a placeholder
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A parsed route pattern
#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> RouteResult<Self> {
        let rest = pattern
            .strip_prefix('/')
            .ok_or_else(|| RouteError::invalid(pattern, "must start with '/'"))?;

        let segments = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/')
                .map(|raw| Self::parse_segment(pattern, raw))
                .collect::<RouteResult<Vec<_>>>()?
        };

        let mut names = HashSet::new();
        for segment in &segments {
            if let Segment::Placeholder(name) = segment {
                if !names.insert(name.as_str()) {
                    return Err(RouteError::invalid(
                        pattern,
                        format!("placeholder '{}' appears more than once", name),
                    ));
                }
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    fn parse_segment(pattern: &str, raw: &str) -> RouteResult<Segment> {
        let is_brace = |c: char| c == '{' || c == '}';

        if raw.is_empty() {
            return Err(RouteError::invalid(pattern, "empty segment"));
        }

        if let Some(inner) = raw.strip_prefix('{') {
            let name = inner
                .strip_suffix('}')
                .ok_or_else(|| RouteError::invalid(pattern, format!("unbalanced '{}'", raw)))?;
            if name.is_empty() {
                return Err(RouteError::invalid(pattern, "placeholder without a name"));
            }
            if name.contains(is_brace) {
                return Err(RouteError::invalid(pattern, format!("unbalanced '{}'", raw)));
            }
            return Ok(Segment::Placeholder(name.to_string()));
        }

        if raw.contains(is_brace) {
            return Err(RouteError::invalid(
                pattern,
                format!("placeholder must span the whole segment: '{}'", raw),
            ));
        }

        Ok(Segment::Literal(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Same literals in the same places and placeholders in the same
    /// places; placeholder names are not compared.
    pub fn same_shape(&self, other: &RoutePattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    (Segment::Placeholder(_), Segment::Placeholder(_)) => true,
                    _ => false,
                })
    }

    /// Compare two patterns that matched the same path: scanning left to
    /// right, the first position where one has a literal and the other a
    /// placeholder decides.
    pub fn is_more_specific_than(&self, other: &RoutePattern) -> bool {
        self.segments
            .iter()
            .zip(&other.segments)
            .find(|(a, b)| a.is_literal() != b.is_literal())
            .map(|(a, _)| a.is_literal())
            .unwrap_or(false)
    }

    /// Match already-split path segments, returning bound parameters
    pub fn match_segments(&self, path: &[&str]) -> Option<RouteParams> {
        if path.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (segment, value) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(literal) if literal == value => {}
                Segment::Placeholder(name) if !value.is_empty() => {
                    params.entries.push((name.clone(), value.to_string()));
                }
                _ => return None,
            }
        }

        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Split a request path into segments. `/` yields no segments; a trailing
/// slash yields a final empty segment, which nothing matches.
pub fn split_path(path: &str) -> Vec<&str> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('/').collect()
    }
}
