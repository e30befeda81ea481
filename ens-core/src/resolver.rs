//! Locale resolution from route paths.
//!
//! Resolution is pure: nothing here reads storage or touches the document,
//! so it is safe to call before the first render.

use crate::locale::Locale;

/// Classification of a path's leading segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocaleRoute {
    Resolved(Locale),
    /// The path has no first segment (`/`, empty string).
    Missing,
    /// The first segment exists but is not a supported locale code.
    Unrecognized(String),
}

impl LocaleRoute {
    #[must_use]
    pub const fn locale(&self) -> Option<Locale> {
        match self {
            Self::Resolved(locale) => Some(*locale),
            Self::Missing | Self::Unrecognized(_) => None,
        }
    }
}

fn first_segment(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').find(|segment| !segment.is_empty())
}

/// Classify the first segment of `path`.
#[must_use]
pub fn classify_path(path: &str) -> LocaleRoute {
    match first_segment(path) {
        None => LocaleRoute::Missing,
        Some(segment) => Locale::from_code(segment).map_or_else(
            || LocaleRoute::Unrecognized(segment.to_string()),
            LocaleRoute::Resolved,
        ),
    }
}

/// Extract the locale from the first path segment, if it is supported.
#[must_use]
pub fn resolve_locale(path: &str) -> Option<Locale> {
    classify_path(path).locale()
}

/// Resolve the route locale, keeping `current` when the segment is not a locale.
#[must_use]
pub fn resolve_or_keep(path: &str, current: Locale) -> Locale {
    let resolved = resolve_locale(path);
    if resolved.is_none() {
        log::debug!("path `{path}` carries no locale; keeping {current}");
    }
    resolved.unwrap_or(current)
}
