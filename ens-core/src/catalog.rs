//! Translation catalogs addressed by dotted key paths.
//!
//! A catalog is parsed once per locale and shared behind an [`Arc`]. Lookups
//! return a tagged [`Entry`] so views never inspect raw JSON shapes.

use crate::locale::Locale;
use serde::Deserialize as _;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog for `{locale}` is not valid JSON: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog for `{0}` must be a JSON object at the root")]
    NotAnObject(Locale),
    #[error("key `{0}` is missing")]
    Missing(String),
    #[error("key `{0}` holds text where a list was expected")]
    NotAList(String),
    #[error("list item {index} under `{key}` has an unexpected shape: {source}")]
    Item {
        key: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Result of a key-path lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entry<'a> {
    Text(&'a str),
    /// Ordered list-shaped content (feature lists, pricing tiers, steps).
    List(&'a [Value]),
}

impl<'a> Entry<'a> {
    #[must_use]
    pub const fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(*text),
            Self::List(_) => None,
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&'a [Value]> {
        match self {
            Self::List(items) => Some(*items),
            Self::Text(_) => None,
        }
    }
}

/// Parsed translation dictionary for a single locale.
#[derive(Debug, PartialEq)]
pub struct Catalog {
    locale: Locale,
    root: Value,
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.')
        .try_fold(obj, |current, segment| current.get(segment))
}

fn interpolate(mut text: String, args: &BTreeMap<&str, &str>) -> String {
    for (k, v) in args {
        let ph1 = format!("{{{{{k}}}}}");
        let ph2 = format!("{{{k}}}");
        text = text.replace(&ph1, v);
        text = text.replace(&ph2, v);
    }
    text
}

impl Catalog {
    /// Parse a catalog from its JSON source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not JSON or its root is not an object.
    pub fn from_json(locale: Locale, source: &str) -> Result<Self, CatalogError> {
        let root: Value =
            serde_json::from_str(source).map_err(|source| CatalogError::Parse { locale, source })?;
        Self::from_value(locale, root)
    }

    /// Wrap an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not an object.
    pub fn from_value(locale: Locale, root: Value) -> Result<Self, CatalogError> {
        if root.is_object() {
            Ok(Self { locale, root })
        } else {
            Err(CatalogError::NotAnObject(locale))
        }
    }

    /// An empty catalog; every text lookup falls back to its key.
    #[must_use]
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            root: Value::Object(serde_json::Map::new()),
        }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up a dotted key path.
    ///
    /// Numbers and booleans are not valid leaves and resolve to `None`, as do
    /// nested objects.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Entry<'_>> {
        match get_nested_value(&self.root, key)? {
            Value::String(text) => Some(Entry::Text(text)),
            Value::Array(items) => Some(Entry::List(items)),
            _ => None,
        }
    }

    /// Translate a key, returning the key itself when it is missing.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.lookup(key)
            .and_then(|entry| entry.as_text())
            .map_or_else(|| key.to_string(), ToString::to_string)
    }

    /// Translate a key and substitute `{name}` / `{{name}}` placeholders.
    #[must_use]
    pub fn tr(&self, key: &str, args: &BTreeMap<&str, &str>) -> String {
        interpolate(self.t(key), args)
    }

    /// Decode list-shaped content into typed records.
    ///
    /// # Errors
    ///
    /// Returns an error when the key is missing, holds text, or an item does not
    /// match `T`.
    pub fn list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, CatalogError> {
        let items = match self.lookup(key) {
            Some(Entry::List(items)) => items,
            Some(Entry::Text(_)) => return Err(CatalogError::NotAList(key.to_string())),
            None => return Err(CatalogError::Missing(key.to_string())),
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                T::deserialize(item).map_err(|source| CatalogError::Item {
                    key: key.to_string(),
                    index,
                    source,
                })
            })
            .collect()
    }

    /// Like [`Catalog::list`], but logs and returns an empty list on failure.
    #[must_use]
    pub fn list_or_empty<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.list(key).unwrap_or_else(|err| {
            log::warn!("[{}] {err}", self.locale);
            Vec::new()
        })
    }
}

/// The catalogs of both locales, parsed up front.
#[derive(Clone, Debug)]
pub struct CatalogSet {
    ar: Arc<Catalog>,
    en: Arc<Catalog>,
}

impl CatalogSet {
    #[must_use]
    pub fn new(ar: Catalog, en: Catalog) -> Self {
        Self {
            ar: Arc::new(ar),
            en: Arc::new(en),
        }
    }

    /// Parse both catalogs; a locale whose source fails to parse gets an empty
    /// catalog so the site still renders its keys.
    #[must_use]
    pub fn from_sources(ar_json: &str, en_json: &str) -> Self {
        let parse = |locale: Locale, source: &str| {
            Catalog::from_json(locale, source).unwrap_or_else(|err| {
                log::warn!("{err}");
                Catalog::empty(locale)
            })
        };
        Self::new(parse(Locale::Ar, ar_json), parse(Locale::En, en_json))
    }

    #[must_use]
    pub fn get(&self, locale: Locale) -> Arc<Catalog> {
        match locale {
            Locale::Ar => Arc::clone(&self.ar),
            Locale::En => Arc::clone(&self.en),
        }
    }
}
