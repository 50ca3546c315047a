//! Route template matching.
//!
//! A template is a `/`-separated pattern of literal segments, `:name`
//! placeholders, and an optional trailing `*` splat. Matching is structural:
//! a placeholder matches any single non-empty, non-slash token; a literal
//! must match exactly; a splat matches any remainder, including an empty
//! one. No regular expressions - templates are short and fixed, so a
//! segment-by-segment scan is enough.

use super::RouteError;
use std::fmt;

/// A route pattern with named placeholder segments.
///
/// Templates are compile-time constants; construction never validates
/// because the route table is the only source of patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTemplate(&'static str);

/// Parameters bound by a successful template match.
///
/// Names borrow from the template (static), values are owned copies of the
/// matched path tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings(Vec<(&'static str, String)>);

impl Bindings {
    /// Look up a bound parameter by placeholder name (without the `:`).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no parameters were bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Split a path into its non-empty segments.
///
/// Leading, trailing, and duplicate slashes are tolerated; only the tokens
/// between them participate in matching.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl RouteTemplate {
    /// Wrap a static pattern string.
    pub const fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    /// The original pattern string.
    pub const fn pattern(&self) -> &'static str {
        self.0
    }

    /// Attempt a structural match against `path`.
    ///
    /// Returns the bound parameters on success, `None` when the path does
    /// not fit this template. A trailing `*` splat consumes the rest of the
    /// path without binding anything.
    pub fn matches(&self, path: &str) -> Option<Bindings> {
        let mut bound = Vec::new();
        let mut path_segs = segments(path).peekable();

        for pattern_seg in segments(self.0) {
            if pattern_seg == "*" {
                // Splat: accept whatever remains, bound or not.
                return Some(Bindings(bound));
            }
            let token = path_segs.next()?;
            if let Some(name) = pattern_seg.strip_prefix(':') {
                bound.push((name, token.to_string()));
            } else if pattern_seg != token {
                return None;
            }
        }

        // Without a splat the path must be fully consumed.
        if path_segs.peek().is_some() {
            return None;
        }
        Some(Bindings(bound))
    }

    /// Fill this template's placeholders from `lookup`, producing a path.
    ///
    /// Used by the redirect-path builder. A splat segment is dropped. A
    /// placeholder `lookup` cannot supply is a [`RouteError::MissingParam`].
    pub fn reverse<'a>(
        &self,
        mut lookup: impl FnMut(&str) -> Option<&'a str>,
    ) -> Result<String, RouteError> {
        let mut out = String::new();
        for pattern_seg in segments(self.0) {
            if pattern_seg == "*" {
                continue;
            }
            let token = if let Some(name) = pattern_seg.strip_prefix(':') {
                lookup(name).ok_or(RouteError::MissingParam {
                    name,
                    template: self.0,
                })?
            } else {
                pattern_seg
            };
            out.push('/');
            out.push_str(token);
        }
        Ok(out)
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
