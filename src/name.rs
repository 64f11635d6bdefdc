// this_file: fontresolve/src/name.rs
//
// Font name normalization and package identifiers

use crate::{FontResolveError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Default npm scope holding the Fontsource font packages
pub const DEFAULT_SCOPE: &str = "@fontsource";

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-z0-9]+").expect("static regex is valid"));

static NPM_SCOPE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^@[a-z0-9][a-z0-9._~-]*$").expect("static regex is valid"));

/// A font name in Fontsource package convention (kebab-case).
///
/// Only `[a-z0-9-]`, never empty, no leading, trailing or repeated hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FontName(String);

impl FontName {
    /// Normalize an extracted font name.
    ///
    /// Lowercases, turns every run of characters outside `[a-z0-9]` into a
    /// single hyphen and trims hyphens from both ends. Applying it to its own
    /// output is a no-op.
    pub fn normalize(extracted: &str) -> Result<Self> {
        let normalized = normalize_font_name(extracted);
        if normalized.is_empty() {
            return Err(FontResolveError::InvalidName(extracted.to_string()));
        }
        Ok(FontName(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a font name, returning an empty string when nothing is left
pub fn normalize_font_name(font_name: &str) -> String {
    let lower = font_name.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Scoped package name of a font, e.g. `@fontsource/open-sans`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageId {
    scope: String,
    name: FontName,
}

impl PackageId {
    /// Build a package id in `scope`, which must be an npm scope such as
    /// `@fontsource`. A single trailing `/` is accepted.
    ///
    /// The scope becomes a directory under the dependency cache that cleanup
    /// deletes, so anything that could step outside it is rejected.
    pub fn new(scope: &str, name: FontName) -> Result<Self> {
        let trimmed = scope.strip_suffix('/').unwrap_or(scope);
        if !NPM_SCOPE.is_match(trimmed) || trimmed.contains("..") {
            return Err(FontResolveError::InvalidScope(scope.to_string()));
        }
        Ok(Self {
            scope: trimmed.to_string(),
            name,
        })
    }

    /// Package in the default Fontsource scope
    pub fn fontsource(name: FontName) -> Self {
        Self {
            scope: DEFAULT_SCOPE.to_string(),
            name,
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn name(&self) -> &FontName {
        &self.name
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scope, self.name)
    }
}
