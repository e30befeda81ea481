//! Menu template gallery: fixed records, translated text, and filtering.

use crate::catalog::Catalog;
use crate::config::ALL_CATEGORY;

/// Compile-time template definition; text lives in the translation catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateDef {
    pub id: u32,
    /// Key segment under `templates.items`.
    pub key: &'static str,
    pub image: &'static str,
}

impl TemplateDef {
    fn text_key(&self, field: &str) -> String {
        format!("templates.items.{}.{field}", self.key)
    }

    /// Resolve the record's text against `catalog`.
    #[must_use]
    pub fn resolve(&self, catalog: &Catalog) -> TemplateRecord {
        TemplateRecord {
            id: self.id,
            title: catalog.t(&self.text_key("title")),
            description: catalog.t(&self.text_key("description")),
            category: catalog.t(&self.text_key("category")),
            image: self.image.to_string(),
        }
    }
}

pub const TEMPLATES: [TemplateDef; 6] = [
    TemplateDef {
        id: 1,
        key: "fineDining",
        image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=600",
    },
    TemplateDef {
        id: 2,
        key: "modernCafe",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600",
    },
    TemplateDef {
        id: 3,
        key: "fastFood",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600",
    },
    TemplateDef {
        id: 4,
        key: "pizza",
        image: "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?w=600",
    },
    TemplateDef {
        id: 5,
        key: "sushi",
        image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=600",
    },
    TemplateDef {
        id: 6,
        key: "bakery",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600",
    },
];

/// A template with its text in one locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// All six templates, in declaration order, translated by `catalog`.
#[must_use]
pub fn resolve_all(catalog: &Catalog) -> Vec<TemplateRecord> {
    TEMPLATES.iter().map(|def| def.resolve(catalog)).collect()
}

/// Category selector value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Parse a selector value; the `all` sentinel maps to [`CategoryFilter::All`].
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORY {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORY,
            Self::Named(name) => name,
        }
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }
}

/// Query and category as typed by the user. Transient; reset on reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterState {
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [TemplateRecord]) -> FilterView<'a> {
        filter(records, &self.query, &self.category)
    }
}

/// Records that passed the filter, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterView<'a> {
    records: Vec<&'a TemplateRecord>,
}

impl<'a> FilterView<'a> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a TemplateRecord> + '_ {
        self.records.iter().copied()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<u32> {
        self.records.iter().map(|record| record.id).collect()
    }
}

/// Keep records whose title or description contains `query` (case-insensitive)
/// and whose category matches.
#[must_use]
pub fn filter<'a>(
    records: &'a [TemplateRecord],
    query: &str,
    category: &CategoryFilter,
) -> FilterView<'a> {
    let needle = query.to_lowercase();
    let records = records
        .iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&needle)
                || record.description.to_lowercase().contains(&needle)
        })
        .filter(|record| category.matches(&record.category))
        .collect();
    FilterView { records }
}

/// `all` followed by each distinct category in first-seen order.
#[must_use]
pub fn categories(records: &[TemplateRecord]) -> Vec<CategoryFilter> {
    let mut out = vec![CategoryFilter::All];
    for record in records {
        let named = CategoryFilter::Named(record.category.clone());
        if !out.contains(&named) {
            out.push(named);
        }
    }
    out
}
